use soroban_sdk::{symbol_short, Address, Env, Symbol};
use soroban_token_sdk::TokenUtils;

use crate::storage::Account;

pub struct TokenEvents;

impl TokenEvents {
    /// Topics: `("transfer", from, to)`, data: `amount`.
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().transfer(from.clone(), to.clone(), amount);
    }

    /// Topics: `("mint", owner, to)`, data: `amount`.
    pub fn mint(env: &Env, owner: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().mint(owner.clone(), to.clone(), amount);
    }

    /// Topics: `("burn", from)`, data: `amount`.
    pub fn burn(env: &Env, from: &Address, amount: i128) {
        TokenUtils::new(env).events().burn(from.clone(), amount);
    }

    /// Emits an `approve` event whenever an allowance is written, including
    /// through `increase_allowance` / `decrease_allowance`.
    ///
    /// Topics: `("approve", from, spender)`
    /// Data:   `amount` (the new absolute allowance)
    ///
    /// The SEP-41 helper in `soroban-token-sdk` carries an expiration ledger;
    /// allowances here never expire, so the event is published directly.
    pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128) {
        env.events().publish((symbol_short!("approve"), from.clone(), spender.clone()), amount);
    }

    pub fn paused(env: &Env, caller: &Address) {
        env.events().publish((symbol_short!("paused"),), caller.clone());
    }

    pub fn unpaused(env: &Env, caller: &Address) {
        env.events().publish((symbol_short!("unpaused"),), caller.clone());
    }

    /// Topics: `("ownership_transferred", previous_owner)`
    /// Data:   `new_owner`, `Account::Zero` on renouncement.
    ///
    /// "ownership_transferred" exceeds the 9-char symbol_short! limit.
    pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Account) {
        env.events().publish(
            (Symbol::new(env, "ownership_transferred"), previous_owner.clone()),
            new_owner.clone(),
        );
    }
}
