//! Off-chain message signing through a Safe multi-signature wallet.
//!
//! A message is signed on-chain by delegate-calling the Safe's
//! `SignMessageLib.signMessage(bytes)` with the message hash, which the
//! wallet submits through [`SafeTransactionExecutor`]. Whether a signature
//! is valid is answered by the wallet through [`SignatureValidator`].

use log::debug;
use sha3::{Digest, Keccak256};

use crate::error::InvokeError;

const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";
const SIGN_MESSAGE_SIGNATURE: &str = "signMessage(bytes)";
const WORD: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OperationType {
    Call = 0,
    DelegateCall = 1,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafeTransactionData {
    pub to: String,
    /// Wei, as a decimal string.
    pub value: String,
    pub data: Vec<u8>,
    pub operation: OperationType,
}

/// Result of [`sign_safe_message`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedSafeMessage {
    pub message_hash: [u8; 32],
    pub transaction_hash: String,
}

/// Signs a Safe transaction with the connected owner and executes it.
pub trait SafeTransactionExecutor {
    /// Returns the hash of the executed transaction.
    fn execute(&self, tx: &SafeTransactionData) -> Result<String, InvokeError>;
}

pub trait SignatureValidator {
    fn is_valid_signature(
        &self,
        message_hash: &[u8; 32],
        signature: &[u8],
    ) -> Result<bool, InvokeError>;
}

/// Personal-message hash of `message` (EIP-191, version `0x45`).
pub fn hash_safe_message(message: &str) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message.as_bytes());
    hasher.finalize().into()
}

pub fn sign_message_selector() -> [u8; 4] {
    let digest = Keccak256::digest(SIGN_MESSAGE_SIGNATURE.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// ABI-encoded `signMessage(bytes)` call carrying `message_hash`.
pub fn sign_message_calldata(message_hash: &[u8; 32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 3 * WORD);
    data.extend_from_slice(&sign_message_selector());
    data.extend_from_slice(&abi_word(WORD as u64));
    data.extend_from_slice(&abi_word(message_hash.len() as u64));
    data.extend_from_slice(message_hash);
    data
}

/// Delegate call into `sign_message_lib` that marks `message` as signed by the Safe.
pub fn sign_message_transaction(sign_message_lib: &str, message: &str) -> SafeTransactionData {
    let message_hash = hash_safe_message(message);
    SafeTransactionData {
        to: sign_message_lib.to_string(),
        value: "0".to_string(),
        data: sign_message_calldata(&message_hash),
        operation: OperationType::DelegateCall,
    }
}

/// Marks `message` as signed by the Safe by executing the `signMessage`
/// delegate call through `executor`.
pub fn sign_safe_message<E>(
    executor: &E,
    sign_message_lib: &str,
    message: &str,
) -> Result<SignedSafeMessage, InvokeError>
where
    E: SafeTransactionExecutor + ?Sized,
{
    let message_hash = hash_safe_message(message);
    let tx = sign_message_transaction(sign_message_lib, message);
    debug!(
        "executing signMessage for hash {} via {}",
        hex::encode(message_hash),
        tx.to
    );

    let transaction_hash = executor.execute(&tx)?;
    debug!("signMessage executed in {}", transaction_hash);

    Ok(SignedSafeMessage {
        message_hash,
        transaction_hash,
    })
}

/// Checks whether the Safe considers `message` signed.
///
/// An empty signature asks the wallet to consult its own record of signed
/// messages rather than verify owner signatures.
pub fn validate_safe_signature<V>(validator: &V, message: &str) -> Result<bool, InvokeError>
where
    V: SignatureValidator + ?Sized,
{
    let message_hash = hash_safe_message(message);
    let valid = validator.is_valid_signature(&message_hash, &[])?;
    debug!(
        "safe signature for message hash {} valid: {}",
        hex::encode(message_hash),
        valid
    );
    Ok(valid)
}

fn abi_word(value: u64) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&value.to_be_bytes());
    word
}
