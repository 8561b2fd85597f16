//! Balance, allowance and supply bookkeeping.
//!
//! Every helper validates first and writes last, so an `Err` never leaves a
//! half-applied update behind even before the host rolls the call back.

use soroban_sdk::{Address, Env};

use crate::{
    errors::TokenError,
    storage::{
        get_allowance, get_balance, get_total_supply, set_balance, set_total_supply, Account,
    },
};

pub fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// Resolves a recipient or spender, rejecting the zero sentinel.
pub fn require_account(account: &Account) -> Result<&Address, TokenError> {
    account.address().ok_or(TokenError::ZeroAddress)
}

/// Moves `amount` from `from` to `to`. Total supply is untouched.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    set_balance(env, from, from_balance - amount);
    set_balance(env, to, to_balance);
    Ok(())
}

/// Credits `to` with freshly created supply.
pub fn mint_balance(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    // Bounded by supply, which did not overflow.
    let to_balance = get_balance(env, to) + amount;

    set_total_supply(env, supply);
    set_balance(env, to, to_balance);
    Ok(())
}

/// Destroys `amount` of `from`'s balance.
pub fn burn_balance(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    let supply = get_total_supply(env);

    set_balance(env, from, from_balance - amount);
    set_total_supply(env, supply - amount);
    Ok(())
}

/// Checks that `spender` may move `amount` out of `from` and returns the
/// allowance left afterwards. Nothing is written.
pub fn remaining_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, TokenError> {
    let allowance = get_allowance(env, from, spender);
    if allowance < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(allowance - amount)
}

pub fn increased_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, TokenError> {
    get_allowance(env, from, spender)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)
}

pub fn decreased_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, TokenError> {
    let allowance = get_allowance(env, from, spender);
    if amount > allowance {
        return Err(TokenError::AllowanceUnderflow);
    }
    Ok(allowance - amount)
}
