use std::time::Duration;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use soroban_sdk::xdr::Hash;

use crate::error::InvokeError;

pub const TESTNET_RPC_URL: &str = "https://soroban-testnet.stellar.org";
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const MAINNET_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Minimum per-operation fee, in stroops.
pub const BASE_FEE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub network_passphrase: String,
}

impl NetworkConfig {
    pub fn new(rpc_url: impl Into<String>, network_passphrase: impl Into<String>) -> Self {
        NetworkConfig {
            rpc_url: rpc_url.into(),
            network_passphrase: network_passphrase.into(),
        }
    }

    pub fn testnet() -> Self {
        NetworkConfig::new(TESTNET_RPC_URL, TESTNET_PASSPHRASE)
    }

    /// SHA-256 of the passphrase; every signature payload on the network commits to it.
    pub fn network_id(&self) -> Hash {
        Hash(Sha256::digest(self.network_passphrase.as_bytes()).into())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::testnet()
    }
}

/// Settings for building and simulating an invocation.
///
/// ```toml
/// fee = 100
/// timeout_secs = 30
///
/// [network]
/// rpc_url = "https://soroban-testnet.stellar.org"
/// network_passphrase = "Test SDF Network ; September 2015"
/// ```
///
/// Every key is optional and falls back to the testnet defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvokeConfig {
    pub network: NetworkConfig,
    /// Per-operation fee, in stroops.
    pub fee: u32,
    pub timeout_secs: u64,
}

impl InvokeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, InvokeError> {
        Ok(toml::from_str(s)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for InvokeConfig {
    fn default() -> Self {
        InvokeConfig {
            network: NetworkConfig::default(),
            fee: BASE_FEE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
