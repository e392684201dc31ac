//! Client-side helpers for invoking Soroban contracts.
//!
//! [`value::TaggedValue`] maps plain host values onto the `ScVal` arguments a
//! contract call expects. [`invocation`] assembles those arguments into an
//! unsigned `InvokeHostFunction` transaction, and [`simulate`] runs the
//! fetch-account / build / simulate sequence against the collaborators in
//! [`rpc`]. Nothing in this crate talks to the network itself.

pub mod config;
pub mod error;
pub mod invocation;
pub mod rpc;
pub mod safe;
pub mod simulate;
pub mod value;

pub use config::{InvokeConfig, NetworkConfig};
pub use error::{ConvertError, InvokeError};
pub use invocation::{ContractCall, TransactionBuilder, UnsignedTransaction};
pub use rpc::{AccountFetcher, AccountState, Simulation, TransactionSimulator};
pub use value::{TaggedValue, ValueKind, WireKind};

mod test;
