//! Events published on every state transition, for off-chain indexers.

use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerAdded {
    pub signer: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRemoved {
    pub signer: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumUpdated {
    pub quorum: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionInitiated {
    #[topic]
    pub tx_id: u64,
    pub amount: i128,
    pub destination: Address,
    pub initiator: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionApproved {
    #[topic]
    pub tx_id: u64,
    pub approver: Address,
    pub approval_count: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionExecuted {
    #[topic]
    pub tx_id: u64,
    pub amount: i128,
    pub destination: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferProposed {
    pub next_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipClaimed {
    pub new_owner: Address,
}

pub(crate) fn signer_added(env: &Env, signer: &Address) {
    SignerAdded {
        signer: signer.clone(),
    }
    .publish(env);
}

pub(crate) fn signer_removed(env: &Env, signer: &Address) {
    SignerRemoved {
        signer: signer.clone(),
    }
    .publish(env);
}

pub(crate) fn quorum_updated(env: &Env, quorum: u32) {
    QuorumUpdated { quorum }.publish(env);
}

pub(crate) fn transaction_initiated(
    env: &Env,
    tx_id: u64,
    amount: i128,
    destination: &Address,
    initiator: &Address,
) {
    TransactionInitiated {
        tx_id,
        amount,
        destination: destination.clone(),
        initiator: initiator.clone(),
    }
    .publish(env);
}

pub(crate) fn transaction_approved(env: &Env, tx_id: u64, approver: &Address, approval_count: u32) {
    TransactionApproved {
        tx_id,
        approver: approver.clone(),
        approval_count,
    }
    .publish(env);
}

pub(crate) fn transaction_executed(env: &Env, tx_id: u64, amount: i128, destination: &Address) {
    TransactionExecuted {
        tx_id,
        amount,
        destination: destination.clone(),
    }
    .publish(env);
}

pub(crate) fn ownership_transfer_proposed(env: &Env, next_owner: &Address) {
    OwnershipTransferProposed {
        next_owner: next_owner.clone(),
    }
    .publish(env);
}

pub(crate) fn ownership_claimed(env: &Env, new_owner: &Address) {
    OwnershipClaimed {
        new_owner: new_owner.clone(),
    }
    .publish(env);
}
