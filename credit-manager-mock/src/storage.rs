use common::credit::types::{CreditLine, DataKey, POOL_OWNER};
use soroban_sdk::{Address, Env};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// INSTANCE STORAGE
pub fn has_pool_owner(env: &Env) -> bool {
    env.storage().instance().has(&POOL_OWNER)
}

pub fn get_pool_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&POOL_OWNER)
}

pub fn set_pool_owner(env: &Env, pool_owner: &Address) {
    env.storage().instance().set(&POOL_OWNER, pool_owner);
    extend_instance(env);
}

pub fn get_borrower_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::BorrowerCount)
        .unwrap_or(0)
}

pub fn set_borrower_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::BorrowerCount, &count);
    extend_instance(env);
}

// PERSISTENT STORAGE
pub fn has_credit_line(env: &Env, borrower: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::CreditLine(borrower.clone()))
}

pub fn get_credit_line(env: &Env, borrower: &Address) -> Option<CreditLine> {
    env.storage()
        .persistent()
        .get(&DataKey::CreditLine(borrower.clone()))
}

/// Stores the line under its borrower and keeps it alive for the max TTL.
pub fn set_credit_line(env: &Env, credit_line: &CreditLine) {
    let key = DataKey::CreditLine(credit_line.borrower.clone());
    let max_ttl: u32 = env.storage().max_ttl();

    env.storage().persistent().set(&key, credit_line);
    env.storage()
        .persistent()
        .extend_ttl(&key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}
