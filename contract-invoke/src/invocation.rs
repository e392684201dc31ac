use std::time::Duration;

use log::debug;
use sha2::{Digest, Sha256};
use soroban_sdk::xdr::{
    Hash, HostFunction, InvokeContractArgs, InvokeHostFunctionOp, Limits, Memo, MuxedAccount,
    Operation, OperationBody, Preconditions, ScAddress, SequenceNumber, TimeBounds, TimePoint,
    Transaction, TransactionEnvelope, TransactionExt, TransactionSignaturePayload,
    TransactionSignaturePayloadTaggedTransaction, TransactionV1Envelope, Uint256, VecM, WriteXdr,
};
use stellar_strkey::Strkey;

use crate::{
    config::{NetworkConfig, BASE_FEE, DEFAULT_TIMEOUT_SECS},
    error::{ConvertError, InvokeError},
    rpc::AccountState,
    value::{parse_address, parse_symbol, to_sc_vals, TaggedValue},
};

/// A single contract method call with typed arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractCall {
    pub contract_id: String,
    pub method: String,
    pub args: Vec<TaggedValue>,
}

impl ContractCall {
    pub fn new(contract_id: impl Into<String>, method: impl Into<String>) -> Self {
        ContractCall {
            contract_id: contract_id.into(),
            method: method.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<TaggedValue>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn to_invoke_args(&self) -> Result<InvokeContractArgs, InvokeError> {
        let contract_address = match parse_address(&self.contract_id)? {
            address @ ScAddress::Contract(_) => address,
            _ => return Err(InvokeError::NotAContract(self.contract_id.clone())),
        };
        let function_name = parse_symbol(&self.method)?;
        let args = to_sc_vals(&self.args)?;

        Ok(InvokeContractArgs {
            contract_address,
            function_name,
            args: args.try_into()?,
        })
    }

    pub fn to_operation(&self) -> Result<Operation, InvokeError> {
        Ok(Operation {
            source_account: None,
            body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
                host_function: HostFunction::InvokeContract(self.to_invoke_args()?),
                auth: VecM::default(),
            }),
        })
    }
}

/// Assembles an unsigned transaction from a source account and operations.
///
/// Mirrors the usual SDK builder: fee is per operation, the sequence number
/// is the account's current one plus one, and the transaction is valid from
/// the epoch until `now + timeout`. A zero timeout means no upper bound.
pub struct TransactionBuilder {
    source: AccountState,
    network_id: Hash,
    fee: u32,
    timeout: Duration,
    operations: Vec<Operation>,
}

impl TransactionBuilder {
    pub fn new(source: AccountState, network: &NetworkConfig) -> Self {
        TransactionBuilder {
            source,
            network_id: network.network_id(),
            fee: BASE_FEE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            operations: Vec::new(),
        }
    }

    pub fn fee(mut self, fee: u32) -> Self {
        self.fee = fee;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn invoke_contract(self, call: &ContractCall) -> Result<Self, InvokeError> {
        let operation = call.to_operation()?;
        Ok(self.add_operation(operation))
    }

    pub fn build(self, now: u64) -> Result<UnsignedTransaction, InvokeError> {
        if self.operations.is_empty() {
            return Err(InvokeError::MissingOperation);
        }

        let source_account = muxed_account(&self.source.account_id)?;
        let fee = u32::try_from(self.operations.len())
            .ok()
            .and_then(|count| self.fee.checked_mul(count))
            .ok_or(InvokeError::Overflow("fee"))?;
        let seq_num = self
            .source
            .sequence
            .checked_add(1)
            .ok_or(InvokeError::Overflow("sequence number"))?;
        // A zero timeout leaves the transaction without an upper time bound.
        let max_time = if self.timeout.is_zero() {
            0
        } else {
            now.checked_add(self.timeout.as_secs())
                .ok_or(InvokeError::Overflow("time bound"))?
        };

        let tx = Transaction {
            source_account,
            fee,
            seq_num: SequenceNumber(seq_num),
            cond: Preconditions::Time(TimeBounds {
                min_time: TimePoint(0),
                max_time: TimePoint(max_time),
            }),
            memo: Memo::None,
            operations: self.operations.try_into()?,
            ext: TransactionExt::V0,
        };

        debug!(
            "built transaction for {} with seq {} fee {} valid until {}",
            self.source.account_id, seq_num, fee, max_time
        );

        Ok(UnsignedTransaction {
            tx,
            network_id: self.network_id,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnsignedTransaction {
    pub tx: Transaction,
    pub network_id: Hash,
}

impl UnsignedTransaction {
    /// Hash that signers sign: SHA-256 of the XDR signature payload.
    pub fn hash(&self) -> Result<[u8; 32], InvokeError> {
        let payload = TransactionSignaturePayload {
            network_id: self.network_id.clone(),
            tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(self.tx.clone()),
        };
        Ok(Sha256::digest(payload.to_xdr(Limits::none())?).into())
    }

    pub fn envelope(&self) -> TransactionEnvelope {
        TransactionEnvelope::Tx(TransactionV1Envelope {
            tx: self.tx.clone(),
            signatures: VecM::default(),
        })
    }
}

fn muxed_account(account_id: &str) -> Result<MuxedAccount, InvokeError> {
    match Strkey::from_string(account_id) {
        Ok(Strkey::PublicKeyEd25519(key)) => Ok(MuxedAccount::Ed25519(Uint256(key.0))),
        Ok(_) => Err(InvokeError::NotAnAccount(account_id.to_string())),
        Err(e) => Err(ConvertError::InvalidAddress {
            value: account_id.to_string(),
            reason: e.to_string(),
        }
        .into()),
    }
}
