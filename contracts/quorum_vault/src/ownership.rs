//! Two-phase administrator handover: the owner proposes, the proposed
//! address claims. A new proposal replaces an unclaimed one.

use soroban_sdk::{log, Address, Env};

use crate::authority;
use crate::errors::MultisigError;
use crate::events;
use crate::types::DataKey;

pub(crate) fn next_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::NextOwner)
}

pub(crate) fn propose(env: &Env, caller: &Address, next: &Address) -> Result<(), MultisigError> {
    authority::require_owner(env, caller)?;

    env.storage().instance().set(&DataKey::NextOwner, next);

    log!(env, "ownership transfer proposed to {}", next.clone());
    events::ownership_transfer_proposed(env, next);
    Ok(())
}

pub(crate) fn claim(env: &Env, caller: &Address) -> Result<(), MultisigError> {
    match next_owner(env) {
        Some(next) if next == *caller => {}
        _ => return Err(MultisigError::NotNextOwner),
    }

    authority::set_owner(env, caller);
    env.storage().instance().remove(&DataKey::NextOwner);

    log!(env, "ownership claimed by {}", caller.clone());
    events::ownership_claimed(env, caller);
    Ok(())
}
