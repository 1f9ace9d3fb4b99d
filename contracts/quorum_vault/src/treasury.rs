//! The pool itself: token balance held by this contract and the transfer
//! primitive invoked once a transaction reaches quorum.

use soroban_sdk::{token, Address, Env};

use crate::authority;
use crate::errors::MultisigError;

pub(crate) fn balance(env: &Env) -> Result<i128, MultisigError> {
    let client = token::Client::new(env, &authority::token(env)?);
    Ok(client.balance(&env.current_contract_address()))
}

/// Pays `amount` out of the pool. Any failure of the token contract is
/// reported as `TransferFailed`; the caller must propagate it so the host
/// rolls back the whole invocation.
pub(crate) fn pay(env: &Env, destination: &Address, amount: i128) -> Result<(), MultisigError> {
    let client = token::Client::new(env, &authority::token(env)?);
    let pool = env.current_contract_address();
    match client.try_transfer(&pool, destination, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(MultisigError::TransferFailed),
    }
}

/// Pulls the initial funding from `from` into the pool.
pub(crate) fn fund(env: &Env, from: &Address, amount: i128) -> Result<(), MultisigError> {
    let client = token::Client::new(env, &authority::token(env)?);
    let pool = env.current_contract_address();
    match client.try_transfer(from, &pool, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(MultisigError::TransferFailed),
    }
}
