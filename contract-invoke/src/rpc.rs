//! Network-owned operations, consumed through narrow traits.
//!
//! Implementations wrap an RPC client; the crate only depends on the
//! behavior described here. Calls may be slow and may fail, and callers
//! propagate those failures unchanged.

use soroban_sdk::xdr::{ScVal, TransactionEnvelope};

use crate::error::InvokeError;

/// Ledger state of a source account as reported by the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountState {
    pub account_id: String,
    /// Current sequence number; the next transaction uses `sequence + 1`.
    pub sequence: i64,
}

impl AccountState {
    pub fn new(account_id: impl Into<String>, sequence: i64) -> Self {
        AccountState {
            account_id: account_id.into(),
            sequence,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    pub return_value: ScVal,
    pub min_resource_fee: i64,
    pub latest_ledger: u32,
}

pub trait AccountFetcher {
    fn get_account(&self, account_id: &str) -> Result<AccountState, InvokeError>;
}

pub trait TransactionSimulator {
    fn simulate(&self, envelope: &TransactionEnvelope) -> Result<Simulation, InvokeError>;
}
