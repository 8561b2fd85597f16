use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

const BALANCE_LIFETIME_THRESHOLD: u32 = 518400;
const BALANCE_BUMP_AMOUNT: u32 = 1036800; // ~60 days in 5s ledgers

/// An account as seen by the ledger's entry points.
///
/// `Zero` is the reserved "no account" identity: it is what `owner()` reports
/// after renouncement and it can never hold or receive a balance. No
/// `Address` maps onto it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Account {
    Zero,
    Id(Address),
}

impl Account {
    pub fn address(&self) -> Option<&Address> {
        match self {
            Account::Zero => None,
            Account::Id(id) => Some(id),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Owner,
    Paused,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::TotalSupply)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn remove_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::Owner);
}

pub fn get_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    read_persistent(env, &key)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    write_persistent(env, &key, amount);
}

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    read_persistent(env, &key)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    write_persistent(env, &key, amount);
}

fn read_persistent(env: &Env, key: &DataKey) -> i128 {
    let storage = env.storage().persistent();
    match storage.get::<DataKey, i128>(key) {
        Some(amount) => {
            storage.extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            amount
        }
        None => 0,
    }
}

fn write_persistent(env: &Env, key: &DataKey, amount: i128) {
    let storage = env.storage().persistent();
    storage.set(key, &amount);
    storage.extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
