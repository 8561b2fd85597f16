#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod access;
mod errors;
mod events;
mod ledger;
mod storage;


pub use errors::TokenError;
pub use storage::Account;

use access::{require_initialized, require_not_paused, require_owner};
use events::TokenEvents;
use ledger::{check_nonnegative_amount, require_account};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

pub const NAME: &str = "Volary";
pub const SYMBOL: &str = "VLRY";
pub const DECIMALS: u32 = 18;

/// 1,000,000,000 whole tokens in base units.
pub const INITIAL_SUPPLY: i128 = 1_000_000_000 * 10_i128.pow(DECIMALS);

#[contract]
pub struct VolaryToken;

#[contractimpl]
impl VolaryToken {
    /// Deploys the ledger: `owner` becomes the owner and receives the whole
    /// initial supply.
    pub fn initialize(env: Env, owner: Address) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: DECIMALS,
            name: String::from_str(&env, NAME),
            symbol: String::from_str(&env, SYMBOL),
        });
        storage::set_owner(&env, &owner);
        storage::set_paused(&env, false);
        ledger::mint_balance(&env, &owner, INITIAL_SUPPLY)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::mint(&env, &owner, &owner, INITIAL_SUPPLY);
        Ok(())
    }

    // ---------- Reads ----------

    // Metadata is fixed at compile time; `initialize` only publishes it to
    // the SEP-41 metadata entry.
    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender)
    }

    /// The current owner, or `Account::Zero` once ownership is renounced.
    pub fn owner(env: Env) -> Account {
        match storage::get_owner(&env) {
            Some(owner) => Account::Id(owner),
            None => Account::Zero,
        }
    }

    pub fn paused(env: Env) -> bool {
        storage::get_paused(&env)
    }

    // ---------- Transfers ----------

    pub fn transfer(env: Env, from: Address, to: Account, amount: i128) -> Result<bool, TokenError> {
        from.require_auth();
        require_initialized(&env)?;
        check_nonnegative_amount(amount)?;
        let to = require_account(&to)?;
        require_not_paused(&env)?;

        ledger::move_balance(&env, &from, to, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &from, to, amount);
        Ok(true)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Account,
        amount: i128,
    ) -> Result<bool, TokenError> {
        spender.require_auth();
        require_initialized(&env)?;
        check_nonnegative_amount(amount)?;
        let to = require_account(&to)?;
        require_not_paused(&env)?;

        let remaining = ledger::remaining_allowance(&env, &from, &spender, amount)?;
        ledger::move_balance(&env, &from, to, amount)?;
        storage::set_allowance(&env, &from, &spender, remaining);
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &from, to, amount);
        Ok(true)
    }

    // ---------- Allowances ----------

    /// Sets the allowance to exactly `amount`, replacing any previous value.
    pub fn approve(env: Env, from: Address, spender: Account, amount: i128) -> Result<bool, TokenError> {
        from.require_auth();
        require_initialized(&env)?;
        check_nonnegative_amount(amount)?;
        let spender = require_account(&spender)?;

        storage::set_allowance(&env, &from, spender, amount);
        storage::extend_instance_ttl(&env);

        TokenEvents::approve(&env, &from, spender, amount);
        Ok(true)
    }

    pub fn increase_allowance(
        env: Env,
        from: Address,
        spender: Account,
        amount: i128,
    ) -> Result<bool, TokenError> {
        from.require_auth();
        require_initialized(&env)?;
        check_nonnegative_amount(amount)?;
        let spender = require_account(&spender)?;

        let allowance = ledger::increased_allowance(&env, &from, spender, amount)?;
        storage::set_allowance(&env, &from, spender, allowance);
        storage::extend_instance_ttl(&env);

        TokenEvents::approve(&env, &from, spender, allowance);
        Ok(true)
    }

    pub fn decrease_allowance(
        env: Env,
        from: Address,
        spender: Account,
        amount: i128,
    ) -> Result<bool, TokenError> {
        from.require_auth();
        require_initialized(&env)?;
        check_nonnegative_amount(amount)?;
        let spender = require_account(&spender)?;

        let allowance = ledger::decreased_allowance(&env, &from, spender, amount)?;
        storage::set_allowance(&env, &from, spender, allowance);
        storage::extend_instance_ttl(&env);

        TokenEvents::approve(&env, &from, spender, allowance);
        Ok(true)
    }

    // ---------- Supply ----------

    pub fn mint(env: Env, caller: Address, to: Account, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;
        check_nonnegative_amount(amount)?;
        let to = require_account(&to)?;
        require_not_paused(&env)?;

        ledger::mint_balance(&env, to, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::mint(&env, &caller, to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        require_initialized(&env)?;
        check_nonnegative_amount(amount)?;
        require_not_paused(&env)?;

        ledger::burn_balance(&env, &from, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::burn(&env, &from, amount);
        Ok(())
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), TokenError> {
        spender.require_auth();
        require_initialized(&env)?;
        check_nonnegative_amount(amount)?;
        require_not_paused(&env)?;

        let remaining = ledger::remaining_allowance(&env, &from, &spender, amount)?;
        ledger::burn_balance(&env, &from, amount)?;
        storage::set_allowance(&env, &from, &spender, remaining);
        storage::extend_instance_ttl(&env);

        TokenEvents::burn(&env, &from, amount);
        Ok(())
    }

    // ---------- Administration ----------

    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        storage::set_paused(&env, true);
        storage::extend_instance_ttl(&env);
        TokenEvents::paused(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        storage::set_paused(&env, false);
        storage::extend_instance_ttl(&env);
        TokenEvents::unpaused(&env, &caller);
        Ok(())
    }

    /// Hands ownership to `new_owner`. The zero sentinel is rejected:
    /// `renounce_ownership` is the only way to give ownership up.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Account) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;
        let next = require_account(&new_owner)?;

        storage::set_owner(&env, next);
        storage::extend_instance_ttl(&env);
        TokenEvents::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    /// Irreversibly leaves the token without an owner. Minting, pausing and
    /// unpausing are disabled from then on.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        storage::remove_owner(&env);
        storage::extend_instance_ttl(&env);
        TokenEvents::ownership_transferred(&env, &caller, &Account::Zero);
        Ok(())
    }
}
