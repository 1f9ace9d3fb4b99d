use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::types::{MultisigConfig, Transaction, TransactionStatus};
use crate::{authority, events, ledger, ownership, treasury};

/// A pool of tokens controlled by a signer set: outbound transfers execute
/// once `quorum` distinct current signers have approved them.
///
/// Every call runs to completion or, on error, is rolled back entirely by the
/// host, so no entrypoint can leave partial state behind.
#[contract]
pub struct QuorumVault;

#[contractimpl]
impl QuorumVault {
    pub fn initialize(env: Env, owner: Address, config: MultisigConfig) -> Result<(), MultisigError> {
        if authority::is_initialized(&env) {
            return Err(MultisigError::AlreadyInitialized);
        }
        authority::validate_config(&config)?;
        owner.require_auth();

        authority::store_initial(&env, &owner, &config);
        if let Some(funding) = config.funding {
            treasury::fund(&env, &owner, funding)?;
        }

        log!(
            &env,
            "initialized with {} signers, quorum {}",
            config.signers.len(),
            config.quorum
        );
        Ok(())
    }

    // ---- signer registry / quorum policy ----

    pub fn is_signer(env: Env, id: Address) -> Result<bool, MultisigError> {
        authority::require_initialized(&env)?;
        authority::is_signer(&env, &id)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, MultisigError> {
        authority::require_initialized(&env)?;
        authority::signers(&env)
    }

    pub fn signer_count(env: Env) -> Result<u32, MultisigError> {
        authority::require_initialized(&env)?;
        Ok(authority::signers(&env)?.len())
    }

    pub fn add_signer(env: Env, caller: Address, signer: Address) -> Result<(), MultisigError> {
        authority::require_initialized(&env)?;
        caller.require_auth();
        authority::add_signer(&env, &caller, &signer)
    }

    /// Removes `signer` by address. Fails with `QuorumViolation` rather than
    /// let the set shrink below the quorum.
    pub fn remove_signer(env: Env, caller: Address, signer: Address) -> Result<(), MultisigError> {
        authority::require_initialized(&env)?;
        caller.require_auth();
        authority::remove_signer(&env, &caller, &signer)
    }

    pub fn quorum(env: Env) -> Result<u32, MultisigError> {
        authority::require_initialized(&env)?;
        authority::quorum(&env)
    }

    pub fn set_quorum(env: Env, caller: Address, quorum: u32) -> Result<(), MultisigError> {
        authority::require_initialized(&env)?;
        caller.require_auth();
        authority::set_quorum(&env, &caller, quorum)
    }

    // ---- transactions ----

    pub fn initiate_transaction(
        env: Env,
        caller: Address,
        amount: i128,
        destination: Address,
    ) -> Result<u64, MultisigError> {
        authority::require_initialized(&env)?;
        caller.require_auth();
        authority::require_signer(&env, &caller)?;
        if amount <= 0 {
            return Err(MultisigError::InvalidAmount);
        }

        let tx_id = ledger::allocate(&env, amount, &destination, &caller);

        log!(&env, "transaction {} initiated by {}", tx_id, caller.clone());
        events::transaction_initiated(&env, tx_id, amount, &destination, &caller);
        Ok(tx_id)
    }

    /// Records the caller's approval and, if that brings the count of
    /// approvals from current signers up to the current quorum, executes the
    /// transfer. The record is marked executed before the token is called; a
    /// failed transfer returns `TransferFailed` and the host discards the
    /// approval and the status change together.
    pub fn approve_transaction(
        env: Env,
        caller: Address,
        tx_id: u64,
    ) -> Result<TransactionStatus, MultisigError> {
        authority::require_initialized(&env)?;
        caller.require_auth();
        authority::require_signer(&env, &caller)?;

        let tx = ledger::record_approval(&env, tx_id, &caller)?;
        let approvals = authority::counted_approvals(&env, &tx.approvals)?;
        let quorum = authority::quorum(&env)?;

        log!(&env, "transaction {} approved by {} ({}/{})", tx_id, caller.clone(), approvals, quorum);
        events::transaction_approved(&env, tx_id, &caller, approvals);

        if approvals < quorum {
            return Ok(TransactionStatus::Pending);
        }

        let tx = ledger::mark_executed(&env, tx_id)?;
        treasury::pay(&env, &tx.destination, tx.amount)?;

        log!(&env, "transaction {} executed", tx_id);
        events::transaction_executed(&env, tx_id, tx.amount, &tx.destination);
        Ok(TransactionStatus::Executed)
    }

    pub fn get_transaction(env: Env, tx_id: u64) -> Result<Transaction, MultisigError> {
        authority::require_initialized(&env)?;
        ledger::get(&env, tx_id)
    }

    /// Id of the most recently initiated transaction, 0 if none.
    pub fn get_transaction_count(env: Env) -> Result<u64, MultisigError> {
        authority::require_initialized(&env)?;
        Ok(ledger::count(&env))
    }

    pub fn has_approved(env: Env, tx_id: u64, signer: Address) -> Result<bool, MultisigError> {
        authority::require_initialized(&env)?;
        Ok(ledger::get(&env, tx_id)?.approvals.contains(&signer))
    }

    // ---- pool ----

    pub fn token(env: Env) -> Result<Address, MultisigError> {
        authority::require_initialized(&env)?;
        authority::token(&env)
    }

    pub fn balance(env: Env) -> Result<i128, MultisigError> {
        authority::require_initialized(&env)?;
        treasury::balance(&env)
    }

    // ---- ownership ----

    pub fn owner(env: Env) -> Result<Address, MultisigError> {
        authority::require_initialized(&env)?;
        authority::owner(&env)
    }

    pub fn next_owner(env: Env) -> Result<Option<Address>, MultisigError> {
        authority::require_initialized(&env)?;
        Ok(ownership::next_owner(&env))
    }

    pub fn transfer_ownership(env: Env, caller: Address, next_owner: Address) -> Result<(), MultisigError> {
        authority::require_initialized(&env)?;
        caller.require_auth();
        ownership::propose(&env, &caller, &next_owner)
    }

    pub fn claim_ownership(env: Env, caller: Address) -> Result<(), MultisigError> {
        authority::require_initialized(&env)?;
        caller.require_auth();
        ownership::claim(&env, &caller)
    }
}
