use soroban_sdk::{log, Address, Env};

use crate::{
    errors::TokenError,
    storage::{get_owner, get_paused, is_initialized},
};

/// Rejects every call made before `initialize` has run.
pub fn require_initialized(env: &Env) -> Result<(), TokenError> {
    if !is_initialized(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(())
}

/// Owner gate. Must be called at the top of every owner-only entry point,
/// after `caller.require_auth()`.
///
/// Once ownership is renounced there is no owner to match, so every caller
/// (the former owner included) is rejected.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    require_initialized(env)?;
    match get_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => {
            log!(env, "owner check rejected caller", caller.clone());
            Err(TokenError::NotOwner)
        }
    }
}

/// Pause gate for balance-moving operations.
pub fn require_not_paused(env: &Env) -> Result<(), TokenError> {
    if get_paused(env) {
        return Err(TokenError::Paused);
    }
    Ok(())
}
