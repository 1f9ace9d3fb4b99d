#![no_std]

mod authority;
mod contract;
mod errors;
mod events;
mod ledger;
mod ownership;
mod treasury;
mod types;

pub use crate::contract::{QuorumVault, QuorumVaultClient};
pub use crate::errors::MultisigError;
pub use crate::events::{
    OwnershipClaimed, OwnershipTransferProposed, QuorumUpdated, SignerAdded, SignerRemoved,
    TransactionApproved, TransactionExecuted, TransactionInitiated,
};
pub use crate::types::{MultisigConfig, Transaction, TransactionStatus};
