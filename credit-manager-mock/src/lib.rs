#![no_std]

mod events;
mod storage;

use common::credit::{
    interface::CreditManagerContractTrait,
    types::{CreditLine, CreditStatus, Error},
};
use events::CreditEvent;
use soroban_sdk::{contract, contractimpl, Address, Env};

fn require_pool_owner(env: &Env) -> Result<(), Error> {
    let pool_owner: Address = storage::get_pool_owner(env).ok_or(Error::NotInitialized)?;
    pool_owner.require_auth();
    Ok(())
}

/// Stand-in for the pool's credit manager: records approved credit lines
/// and their status, without any lending logic behind them.
#[contract]
pub struct CreditManagerMock;

#[contractimpl]
impl CreditManagerContractTrait for CreditManagerMock {
    fn initialize(env: Env, pool_owner: Address) -> Result<(), Error> {
        pool_owner.require_auth();
        if storage::has_pool_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_pool_owner(&env, &pool_owner);
        storage::set_borrower_count(&env, 0);
        CreditEvent::Initialized(pool_owner).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn approve_borrower(
        env: Env,
        borrower: Address,
        credit_limit: u128,
        num_periods: u32,
        yield_bps: u32,
        committed_amount: u128,
        designated_start_date: u64,
        revolving: bool,
    ) -> Result<(), Error> {
        require_pool_owner(&env)?;

        if credit_limit == 0 {
            return Err(Error::InvalidCreditLimit);
        }
        if num_periods == 0 {
            return Err(Error::InvalidNumberOfPeriods);
        }
        if committed_amount > credit_limit {
            return Err(Error::CommittedAmountExceedsLimit);
        }
        if storage::has_credit_line(&env, &borrower) {
            return Err(Error::CreditLineAlreadyExists);
        }

        let credit_line = CreditLine {
            borrower: borrower.clone(),
            credit_limit,
            num_periods,
            yield_bps,
            committed_amount,
            designated_start_date,
            revolving,
            status: CreditStatus::Approved,
            approved_at: env.ledger().timestamp(),
        };
        storage::set_credit_line(&env, &credit_line);
        storage::set_borrower_count(&env, storage::get_borrower_count(&env) + 1);

        CreditEvent::BorrowerApproved(borrower, credit_limit, num_periods).publish(&env);
        Ok(())
    }

    fn get_credit_line(env: Env, borrower: Address) -> Result<CreditLine, Error> {
        storage::get_credit_line(&env, &borrower).ok_or(Error::CreditLineNotFound)
    }

    fn get_credit_status(env: Env, borrower: Address) -> Result<CreditStatus, Error> {
        let credit_line: CreditLine = Self::get_credit_line(env, borrower)?;
        Ok(credit_line.status)
    }

    fn update_status(env: Env, borrower: Address, status: CreditStatus) -> Result<(), Error> {
        require_pool_owner(&env)?;

        let mut credit_line: CreditLine = Self::get_credit_line(env.clone(), borrower.clone())?;
        let previous = credit_line.status;
        if !previous.can_transition_to(status) {
            return Err(Error::InvalidStatusTransition);
        }

        credit_line.status = status;
        storage::set_credit_line(&env, &credit_line);

        CreditEvent::StatusUpdated(borrower, previous, status).publish(&env);
        Ok(())
    }

    fn get_borrower_count(env: Env) -> u64 {
        storage::get_borrower_count(&env)
    }
}

mod test;
