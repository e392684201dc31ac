use soroban_sdk::{contractclient, Address, Env};
use super::types::{CreditLine, CreditStatus, Error};

#[contractclient(name = "CreditManagerContractClient")]
pub trait CreditManagerContractTrait {
    fn initialize(env: Env, pool_owner: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn approve_borrower(
        env: Env,
        borrower: Address,
        credit_limit: u128,
        num_periods: u32,
        yield_bps: u32,
        committed_amount: u128,
        designated_start_date: u64,
        revolving: bool,
    ) -> Result<(), Error>;
    fn get_credit_line(env: Env, borrower: Address) -> Result<CreditLine, Error>;
    fn get_credit_status(env: Env, borrower: Address) -> Result<CreditStatus, Error>;
    fn update_status(env: Env, borrower: Address, status: CreditStatus) -> Result<(), Error>;
    fn get_borrower_count(env: Env) -> u64;
}
