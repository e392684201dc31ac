//! Conversion of tagged host values into contract-call arguments.

use std::fmt;
use std::str::FromStr;

use log::trace;
use soroban_sdk::xdr::{
    AccountId, Hash, PublicKey, ScAddress, ScSymbol, ScVal, ScVec, UInt128Parts, Uint256,
};
use stellar_strkey::Strkey;

use crate::error::ConvertError;

/// Longest symbol the contract environment accepts.
pub const SYMBOL_MAX_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Address,
    U128,
    U64,
    U32,
    Bool,
    Enum,
}

impl ValueKind {
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Address,
        ValueKind::U128,
        ValueKind::U64,
        ValueKind::U32,
        ValueKind::Bool,
        ValueKind::Enum,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Address => "address",
            ValueKind::U128 => "u128",
            ValueKind::U64 => "u64",
            ValueKind::U32 => "u32",
            ValueKind::Bool => "bool",
            ValueKind::Enum => "enum",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConvertError::UnknownKind(s.to_string()))
    }
}

/// A host value paired with the wire kind it must be sent as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaggedValue {
    /// `G...` account or `C...` contract strkey, validated on conversion.
    Address(String),
    U128(u128),
    U64(u64),
    U32(u32),
    Bool(bool),
    /// Name of a unit variant of a contract enum.
    Enum(String),
}

impl TaggedValue {
    pub fn address(strkey: impl Into<String>) -> Self {
        TaggedValue::Address(strkey.into())
    }

    pub fn enum_variant(name: impl Into<String>) -> Self {
        TaggedValue::Enum(name.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            TaggedValue::Address(_) => ValueKind::Address,
            TaggedValue::U128(_) => ValueKind::U128,
            TaggedValue::U64(_) => ValueKind::U64,
            TaggedValue::U32(_) => ValueKind::U32,
            TaggedValue::Bool(_) => ValueKind::Bool,
            TaggedValue::Enum(_) => ValueKind::Enum,
        }
    }

    /// Builds a value from its textual form.
    ///
    /// Integers are plain decimal and may use `_` between digits
    /// (`1000_0000000`). Anything that does not fit the kind's width is
    /// rejected rather than truncated. Address and enum payloads are kept as
    /// given and checked by [`TaggedValue::to_sc_val`].
    pub fn parse(kind: ValueKind, raw: &str) -> Result<Self, ConvertError> {
        let value = match kind {
            ValueKind::Address => TaggedValue::Address(raw.to_string()),
            ValueKind::U128 => TaggedValue::U128(parse_integer(kind, raw)?),
            ValueKind::U64 => TaggedValue::U64(narrow(kind, raw, parse_integer(kind, raw)?)?),
            ValueKind::U32 => TaggedValue::U32(narrow(kind, raw, parse_integer(kind, raw)?)?),
            ValueKind::Bool => match raw {
                "true" => TaggedValue::Bool(true),
                "false" => TaggedValue::Bool(false),
                _ => return Err(ConvertError::InvalidBool(raw.to_string())),
            },
            ValueKind::Enum => TaggedValue::Enum(raw.to_string()),
        };
        Ok(value)
    }

    pub fn to_sc_val(&self) -> Result<ScVal, ConvertError> {
        let val = match self {
            TaggedValue::Address(strkey) => ScVal::Address(parse_address(strkey)?),
            TaggedValue::U128(v) => ScVal::U128(UInt128Parts {
                hi: (*v >> 64) as u64,
                lo: *v as u64,
            }),
            TaggedValue::U64(v) => ScVal::U64(*v),
            TaggedValue::U32(v) => ScVal::U32(*v),
            TaggedValue::Bool(v) => ScVal::Bool(*v),
            TaggedValue::Enum(variant) => {
                let symbol = ScVal::Symbol(parse_symbol(variant)?);
                let vec = ScVec::try_from(vec![symbol])
                    .map_err(|_| ConvertError::InvalidSymbol(variant.clone()))?;
                ScVal::Vec(Some(vec))
            }
        };
        trace!("converted {} argument to {:?}", self.kind(), WireKind::of(&val));
        Ok(val)
    }
}

impl From<u128> for TaggedValue {
    fn from(v: u128) -> Self {
        TaggedValue::U128(v)
    }
}

impl From<u64> for TaggedValue {
    fn from(v: u64) -> Self {
        TaggedValue::U64(v)
    }
}

impl From<u32> for TaggedValue {
    fn from(v: u32) -> Self {
        TaggedValue::U32(v)
    }
}

impl From<bool> for TaggedValue {
    fn from(v: bool) -> Self {
        TaggedValue::Bool(v)
    }
}

/// Converts an argument list, stopping at the first value that fails.
pub fn to_sc_vals(values: &[TaggedValue]) -> Result<Vec<ScVal>, ConvertError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.to_sc_val().map_err(|e| ConvertError::Argument {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

pub fn parse_address(strkey: &str) -> Result<ScAddress, ConvertError> {
    match Strkey::from_string(strkey) {
        Ok(Strkey::PublicKeyEd25519(key)) => Ok(ScAddress::Account(AccountId(
            PublicKey::PublicKeyTypeEd25519(Uint256(key.0)),
        ))),
        Ok(Strkey::Contract(contract)) => Ok(ScAddress::Contract(Hash(contract.0))),
        Ok(_) => Err(ConvertError::InvalidAddress {
            value: strkey.to_string(),
            reason: "not an account or contract identifier".to_string(),
        }),
        Err(e) => Err(ConvertError::InvalidAddress {
            value: strkey.to_string(),
            reason: e.to_string(),
        }),
    }
}

pub fn parse_symbol(name: &str) -> Result<ScSymbol, ConvertError> {
    let valid = !name.is_empty()
        && name.len() <= SYMBOL_MAX_LEN
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if !valid {
        return Err(ConvertError::InvalidSymbol(name.to_string()));
    }
    name.try_into()
        .map(ScSymbol)
        .map_err(|_| ConvertError::InvalidSymbol(name.to_string()))
}

fn parse_integer(kind: ValueKind, raw: &str) -> Result<u128, ConvertError> {
    let invalid = || ConvertError::InvalidInteger {
        kind,
        value: raw.to_string(),
    };
    if raw.starts_with('_') || raw.ends_with('_') {
        return Err(invalid());
    }
    let digits: String = raw.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Only digits remain, so a parse failure can only mean overflow.
    digits.parse::<u128>().map_err(|_| ConvertError::OutOfRange {
        kind,
        value: raw.to_string(),
    })
}

fn narrow<T: TryFrom<u128>>(kind: ValueKind, raw: &str, value: u128) -> Result<T, ConvertError> {
    T::try_from(value).map_err(|_| ConvertError::OutOfRange {
        kind,
        value: raw.to_string(),
    })
}

/// Coarse classification of a wire value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireKind {
    Address,
    U128,
    U64,
    U32,
    Bool,
    Vec,
    Symbol,
    Other,
}

impl WireKind {
    pub fn of(val: &ScVal) -> Self {
        match val {
            ScVal::Address(_) => WireKind::Address,
            ScVal::U128(_) => WireKind::U128,
            ScVal::U64(_) => WireKind::U64,
            ScVal::U32(_) => WireKind::U32,
            ScVal::Bool(_) => WireKind::Bool,
            ScVal::Vec(_) => WireKind::Vec,
            ScVal::Symbol(_) => WireKind::Symbol,
            _ => WireKind::Other,
        }
    }
}

impl From<ValueKind> for WireKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Address => WireKind::Address,
            ValueKind::U128 => WireKind::U128,
            ValueKind::U64 => WireKind::U64,
            ValueKind::U32 => WireKind::U32,
            ValueKind::Bool => WireKind::Bool,
            ValueKind::Enum => WireKind::Vec,
        }
    }
}
