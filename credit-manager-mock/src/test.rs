#![cfg(test)]
extern crate std;

use super::*;
use common::credit::interface::CreditManagerContractClient;
use soroban_sdk::testutils::{Address as _, Events, Ledger};

pub struct CreditManagerTest {
    env: Env,
    client: CreditManagerContractClient<'static>,
    pool_owner: Address,
    borrower: Address,
}

impl CreditManagerTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let contract_id: Address = env.register(CreditManagerMock, ());
        let client: CreditManagerContractClient<'static> =
            CreditManagerContractClient::new(&env, &contract_id);

        let pool_owner: Address = Address::generate(&env);
        let borrower: Address = Address::generate(&env);
        assert_ne!(pool_owner, borrower);

        client.initialize(&pool_owner);

        CreditManagerTest {
            env,
            client,
            pool_owner,
            borrower,
        }
    }

    fn approve(&self, credit_limit: u128, committed_amount: u128) {
        self.client.approve_borrower(
            &self.borrower,
            &credit_limit,
            &5u32,
            &1200u32,
            &committed_amount,
            &0u64,
            &true,
        );
    }
}

#[test]
fn test_initialize_twice_fails() {
    let test = CreditManagerTest::setup();
    let result = test.client.try_initialize(&test.pool_owner);
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_approve_borrower_stores_credit_line() {
    let test = CreditManagerTest::setup();
    test.env.ledger().set_timestamp(1_700_000_000);

    test.approve(1000_0000000, 0);

    let credit_line: CreditLine = test.client.get_credit_line(&test.borrower);
    assert_eq!(credit_line.borrower, test.borrower);
    assert_eq!(credit_line.credit_limit, 1000_0000000u128);
    assert_eq!(credit_line.num_periods, 5);
    assert_eq!(credit_line.yield_bps, 1200);
    assert_eq!(credit_line.committed_amount, 0);
    assert_eq!(credit_line.designated_start_date, 0);
    assert!(credit_line.revolving);
    assert_eq!(credit_line.status, CreditStatus::Approved);
    assert_eq!(credit_line.approved_at, 1_700_000_000);
    assert_eq!(test.client.get_borrower_count(), 1);
    assert!(!test.env.events().all().is_empty());
}

#[test]
fn test_approve_borrower_requires_pool_owner_auth() {
    let test = CreditManagerTest::setup();
    test.approve(1000_0000000, 0);

    let auths = test.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, test.pool_owner);
}

#[test]
fn test_approve_borrower_rejects_invalid_terms() {
    let test = CreditManagerTest::setup();

    let zero_limit = test.client.try_approve_borrower(
        &test.borrower,
        &0u128,
        &5u32,
        &1200u32,
        &0u128,
        &0u64,
        &true,
    );
    assert_eq!(zero_limit, Err(Ok(Error::InvalidCreditLimit)));

    let zero_periods = test.client.try_approve_borrower(
        &test.borrower,
        &100u128,
        &0u32,
        &1200u32,
        &0u128,
        &0u64,
        &true,
    );
    assert_eq!(zero_periods, Err(Ok(Error::InvalidNumberOfPeriods)));

    let over_committed = test.client.try_approve_borrower(
        &test.borrower,
        &100u128,
        &5u32,
        &1200u32,
        &101u128,
        &0u64,
        &false,
    );
    assert_eq!(over_committed, Err(Ok(Error::CommittedAmountExceedsLimit)));
    assert_eq!(test.client.get_borrower_count(), 0);
}

#[test]
fn test_approve_borrower_twice_fails() {
    let test = CreditManagerTest::setup();
    test.approve(100, 0);

    let result = test.client.try_approve_borrower(
        &test.borrower,
        &100u128,
        &5u32,
        &1200u32,
        &0u128,
        &0u64,
        &true,
    );
    assert_eq!(result, Err(Ok(Error::CreditLineAlreadyExists)));
}

#[test]
fn test_update_status_follows_transitions() {
    let test = CreditManagerTest::setup();
    test.approve(100, 50);

    test.client.update_status(&test.borrower, &CreditStatus::Active);
    assert_eq!(
        test.client.get_credit_status(&test.borrower),
        CreditStatus::Active
    );

    let back_to_approved = test
        .client
        .try_update_status(&test.borrower, &CreditStatus::Approved);
    assert_eq!(back_to_approved, Err(Ok(Error::InvalidStatusTransition)));

    test.client.update_status(&test.borrower, &CreditStatus::Closed);
    assert_eq!(
        test.client.get_credit_status(&test.borrower),
        CreditStatus::Closed
    );
}

#[test]
fn test_unknown_borrower_not_found() {
    let test = CreditManagerTest::setup();
    let stranger: Address = Address::generate(&test.env);
    let result = test.client.try_get_credit_line(&stranger);
    assert_eq!(result, Err(Ok(Error::CreditLineNotFound)));
}
