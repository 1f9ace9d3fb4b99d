use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfiguration = 3,
    // Authorization
    Unauthorized = 4,
    NotValidSigner = 5,
    NotNextOwner = 6,
    // Transaction state
    NotFound = 7,
    TransactionAlreadyExecuted = 8,
    CantSignTwice = 9,
    // Signer set / quorum
    InvalidQuorum = 10,
    QuorumViolation = 11,
    AlreadySigner = 12,
    NotSigner = 13,
    InvalidAmount = 14,
    // Value transfer collaborator
    TransferFailed = 15,
}
