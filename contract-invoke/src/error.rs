use soroban_sdk::xdr;

use crate::value::ValueKind;

/// Failure to interpret a payload under its declared kind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("invalid address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },
    #[error("invalid symbol '{0}': expected 1 to 32 characters from [A-Za-z0-9_]")]
    InvalidSymbol(String),
    #[error("'{value}' is not a valid {kind} integer")]
    InvalidInteger { kind: ValueKind, value: String },
    #[error("{value} does not fit in {kind}")]
    OutOfRange { kind: ValueKind, value: String },
    #[error("'{0}' is not a boolean")]
    InvalidBool(String),
    #[error("unknown value kind '{0}'")]
    UnknownKind(String),
    #[error("argument {index}: {source}")]
    Argument {
        index: usize,
        source: Box<ConvertError>,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum InvokeError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Xdr(#[from] xdr::Error),
    #[error(transparent)]
    Config(#[from] toml::de::Error),
    #[error("'{0}' is not a contract address")]
    NotAContract(String),
    #[error("'{0}' is not an account address")]
    NotAnAccount(String),
    #[error("transaction has no operation")]
    MissingOperation,
    #[error("{0} overflowed")]
    Overflow(&'static str),
    #[error("system clock is set before the unix epoch")]
    Clock,
    #[error("rpc request failed: {0}")]
    Rpc(String),
    #[error("simulation failed: {0}")]
    Simulation(String),
    #[error("signature validation failed: {0}")]
    Signature(String),
}
