use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CreditLineNotFound = 3,
    CreditLineAlreadyExists = 4,
    InvalidCreditLimit = 5,
    InvalidNumberOfPeriods = 6,
    CommittedAmountExceedsLimit = 7,
    InvalidStatusTransition = 8,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    CreditLine(Address),
    BorrowerCount,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CreditLine {
    pub borrower: Address,
    pub credit_limit: u128,
    pub num_periods: u32,
    pub yield_bps: u32,
    pub committed_amount: u128,
    pub designated_start_date: u64,
    pub revolving: bool,
    pub status: CreditStatus,
    pub approved_at: u64,
}

// Unit variants only: each one travels as a one-element vec holding its symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CreditStatus {
    Approved,
    Active,
    Delayed,
    Defaulted,
    Closed,
}

impl CreditStatus {
    pub fn can_transition_to(&self, next: CreditStatus) -> bool {
        match (self, next) {
            (CreditStatus::Approved, CreditStatus::Active | CreditStatus::Closed) => true,
            (
                CreditStatus::Active,
                CreditStatus::Delayed | CreditStatus::Defaulted | CreditStatus::Closed,
            ) => true,
            (CreditStatus::Delayed, CreditStatus::Active | CreditStatus::Defaulted) => true,
            (CreditStatus::Defaulted, CreditStatus::Closed) => true,
            _ => false,
        }
    }
}

pub const POOL_OWNER: Symbol = symbol_short!("POOL_OWN");
