//! Append-only transaction ledger.
//!
//! Records are never deleted. Ids start at 1 and are never reused. This module
//! does no caller checks; `contract` layers authorization on top.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::MultisigError;
use crate::types::{
    DataKey, Transaction, TransactionStatus, TRANSACTION_BUMP_AMOUNT,
    TRANSACTION_LIFETIME_THRESHOLD,
};

pub(crate) fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

pub(crate) fn allocate(env: &Env, amount: i128, destination: &Address, initiator: &Address) -> u64 {
    let tx_id = count(env) + 1;
    env.storage().instance().set(&DataKey::TransactionCount, &tx_id);

    let tx = Transaction {
        id: tx_id,
        amount,
        destination: destination.clone(),
        initiator: initiator.clone(),
        approvals: Vec::new(env),
        status: TransactionStatus::Pending,
        created_at: env.ledger().timestamp(),
        executed_at: None,
    };
    save(env, &tx);
    tx_id
}

pub(crate) fn get(env: &Env, tx_id: u64) -> Result<Transaction, MultisigError> {
    let key = DataKey::Transaction(tx_id);
    let tx = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(MultisigError::NotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, TRANSACTION_LIFETIME_THRESHOLD, TRANSACTION_BUMP_AMOUNT);
    Ok(tx)
}

/// Adds `signer` to the approval set and returns the updated record.
pub(crate) fn record_approval(env: &Env, tx_id: u64, signer: &Address) -> Result<Transaction, MultisigError> {
    let mut tx = get(env, tx_id)?;
    if tx.status == TransactionStatus::Executed {
        return Err(MultisigError::TransactionAlreadyExecuted);
    }
    if tx.approvals.contains(signer) {
        return Err(MultisigError::CantSignTwice);
    }

    tx.approvals.push_back(signer.clone());
    save(env, &tx);
    Ok(tx)
}

/// Moves a record to `Executed`. The only path to that state, so a second
/// call for the same id always fails.
pub(crate) fn mark_executed(env: &Env, tx_id: u64) -> Result<Transaction, MultisigError> {
    let mut tx = get(env, tx_id)?;
    if tx.status == TransactionStatus::Executed {
        return Err(MultisigError::TransactionAlreadyExecuted);
    }

    tx.status = TransactionStatus::Executed;
    tx.executed_at = Some(env.ledger().timestamp());
    save(env, &tx);
    Ok(tx)
}

fn save(env: &Env, tx: &Transaction) {
    let key = DataKey::Transaction(tx.id);
    env.storage().persistent().set(&key, tx);
    env.storage()
        .persistent()
        .extend_ttl(&key, TRANSACTION_LIFETIME_THRESHOLD, TRANSACTION_BUMP_AMOUNT);
}
