use soroban_sdk::{contracttype, Address, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const TRANSACTION_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const TRANSACTION_LIFETIME_THRESHOLD: u32 = TRANSACTION_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owner,
    NextOwner,
    Signers,
    Quorum,
    Token,
    TransactionCount,
    Transaction(u64),
}

/// Parameters accepted by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultisigConfig {
    /// Initial signer set; must be non-empty and free of duplicates.
    pub signers: Vec<Address>,
    /// Number of distinct approvals required to execute a transaction.
    pub quorum: u32,
    /// Asset contract holding the pool.
    pub token: Address,
    /// Amount pulled from the owner into the pool at initialization.
    pub funding: Option<i128>,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TransactionStatus {
    Pending = 0,
    Executed = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub amount: i128,
    pub destination: Address,
    pub initiator: Address,
    /// Signers that approved, in approval order. Never holds duplicates.
    pub approvals: Vec<Address>,
    pub status: TransactionStatus,
    pub created_at: u64,
    pub executed_at: Option<u64>,
}
