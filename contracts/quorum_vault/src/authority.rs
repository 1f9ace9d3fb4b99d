//! Signer registry, quorum policy and the administrator gate.
//!
//! All reads and writes of the signer set, the quorum and the owner go
//! through this module so that `1 <= quorum <= signers.len()` is checked in
//! one place. Every mutation validates first and writes last.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::events;
use crate::types::{DataKey, MultisigConfig, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub(crate) fn require_initialized(env: &Env) -> Result<(), MultisigError> {
    if !is_initialized(env) {
        return Err(MultisigError::NotInitialized);
    }
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    Ok(())
}

/// Checks a constructor configuration without touching storage.
pub(crate) fn validate_config(config: &MultisigConfig) -> Result<(), MultisigError> {
    let signers = &config.signers;
    if signers.is_empty() {
        return Err(MultisigError::InvalidConfiguration);
    }
    if !quorum_fits(config.quorum, signers.len()) {
        return Err(MultisigError::InvalidConfiguration);
    }
    for i in 0..signers.len() {
        for j in (i + 1)..signers.len() {
            if signers.get_unchecked(i) == signers.get_unchecked(j) {
                return Err(MultisigError::InvalidConfiguration);
            }
        }
    }
    if let Some(funding) = config.funding {
        if funding <= 0 {
            return Err(MultisigError::InvalidConfiguration);
        }
    }
    Ok(())
}

/// Writes the initial authority state. `config` must already be validated.
pub(crate) fn store_initial(env: &Env, owner: &Address, config: &MultisigConfig) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Owner, owner);
    storage.set(&DataKey::Signers, &config.signers);
    storage.set(&DataKey::Quorum, &config.quorum);
    storage.set(&DataKey::Token, &config.token);
    storage.set(&DataKey::Initialized, &true);
    storage.extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn quorum_fits(quorum: u32, signer_count: u32) -> bool {
    quorum >= 1 && quorum <= signer_count
}

pub(crate) fn owner(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(MultisigError::NotInitialized)
}

pub(crate) fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub(crate) fn require_owner(env: &Env, caller: &Address) -> Result<(), MultisigError> {
    if *caller != owner(env)? {
        return Err(MultisigError::Unauthorized);
    }
    Ok(())
}

pub(crate) fn signers(env: &Env) -> Result<Vec<Address>, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .ok_or(MultisigError::NotInitialized)
}

pub(crate) fn is_signer(env: &Env, id: &Address) -> Result<bool, MultisigError> {
    Ok(signers(env)?.contains(id))
}

pub(crate) fn require_signer(env: &Env, caller: &Address) -> Result<(), MultisigError> {
    if !is_signer(env, caller)? {
        return Err(MultisigError::NotValidSigner);
    }
    Ok(())
}

pub(crate) fn quorum(env: &Env) -> Result<u32, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Quorum)
        .ok_or(MultisigError::NotInitialized)
}

pub(crate) fn token(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(MultisigError::NotInitialized)
}

/// Number of `approvals` cast by addresses that are still signers.
pub(crate) fn counted_approvals(env: &Env, approvals: &Vec<Address>) -> Result<u32, MultisigError> {
    let signers = signers(env)?;
    Ok(approvals.iter().filter(|a| signers.contains(a)).count() as u32)
}

pub(crate) fn add_signer(env: &Env, caller: &Address, signer: &Address) -> Result<(), MultisigError> {
    require_owner(env, caller)?;
    let mut signers = signers(env)?;
    if signers.contains(signer) {
        return Err(MultisigError::AlreadySigner);
    }

    signers.push_back(signer.clone());
    env.storage().instance().set(&DataKey::Signers, &signers);

    log!(env, "signer added: {}, signer count {}", signer.clone(), signers.len());
    events::signer_added(env, signer);
    Ok(())
}

pub(crate) fn remove_signer(env: &Env, caller: &Address, signer: &Address) -> Result<(), MultisigError> {
    require_owner(env, caller)?;
    let mut signers = signers(env)?;
    let index = signers
        .first_index_of(signer)
        .ok_or(MultisigError::NotSigner)?;
    if signers.len() - 1 < quorum(env)? {
        return Err(MultisigError::QuorumViolation);
    }

    signers.remove(index);
    env.storage().instance().set(&DataKey::Signers, &signers);

    log!(env, "signer removed: {}, signer count {}", signer.clone(), signers.len());
    events::signer_removed(env, signer);
    Ok(())
}

pub(crate) fn set_quorum(env: &Env, caller: &Address, quorum: u32) -> Result<(), MultisigError> {
    require_owner(env, caller)?;
    if !quorum_fits(quorum, signers(env)?.len()) {
        return Err(MultisigError::InvalidQuorum);
    }

    env.storage().instance().set(&DataKey::Quorum, &quorum);

    log!(env, "quorum set to {}", quorum);
    events::quorum_updated(env, quorum);
    Ok(())
}
