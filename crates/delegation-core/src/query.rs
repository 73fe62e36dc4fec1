//! Read-only contract queries.
//!
//! A [`Query`] is what the proxy's `vm-values/query` endpoint expects; a
//! [`QueryResponse`] is what comes back, with base64 return values already
//! decoded into [`ReturnData`].

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{DashboardError, DashboardResult};

/// Return code of a successful contract call.
pub const RETURN_CODE_OK: &str = "ok";

/// Name of a contract endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractFunction(String);

impl ContractFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A hex-encoded contract argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argument(String);

impl Argument {
    /// Public key of an address.
    pub fn from_pubkey(address: &Address) -> Self {
        Self(address.hex())
    }

    /// Big-endian unsigned integer with no leading zero bytes; zero is `00`.
    pub fn from_big_uint(value: u128) -> Self {
        Self(big_uint_hex(value))
    }

    /// UTF-8 text.
    pub fn from_utf8(value: &str) -> Self {
        Self(hex::encode(value.as_bytes()))
    }

    pub fn from_bytes(value: &[u8]) -> Self {
        Self(hex::encode(value))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// Even-length hex of an unsigned integer.
pub fn big_uint_hex(value: u128) -> String {
    let hex = format!("{:x}", value);
    if hex.len() % 2 == 1 {
        format!("0{}", hex)
    } else {
        hex
    }
}

/// Request body for `vm-values/query`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Query {
    #[serde(rename = "scAddress")]
    pub address: Address,
    #[serde(rename = "funcName")]
    pub func: ContractFunction,
    pub args: Vec<Argument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<Address>,
}

impl Query {
    pub fn new(address: Address, func: impl Into<String>) -> Self {
        Self {
            address,
            func: ContractFunction::new(func),
            args: Vec::new(),
            caller: None,
        }
    }

    pub fn with_arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_caller(mut self, caller: Address) -> Self {
        self.caller = Some(caller);
        self
    }
}

/// One decoded return value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReturnData(Vec<u8>);

impl ReturnData {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode a base64 value as the proxy sends it.
    pub fn from_base64(encoded: &str) -> DashboardResult<Self> {
        STANDARD
            .decode(encoded)
            .map(Self)
            .map_err(|e| DashboardError::MalformedResponse(format!("return data: {}", e)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Big-endian unsigned integer. Empty data is zero.
    pub fn as_big_uint(&self) -> DashboardResult<u128> {
        let significant = strip_leading_zeros(&self.0);
        if significant.len() > 16 {
            return Err(DashboardError::AmountOverflow(self.as_hex()));
        }
        Ok(significant
            .iter()
            .fold(0u128, |acc, b| (acc << 8) | u128::from(*b)))
    }

    /// Big-endian unsigned integer that must fit in 64 bits.
    pub fn as_number(&self) -> DashboardResult<u64> {
        let value = self.as_big_uint()?;
        u64::try_from(value).map_err(|_| DashboardError::AmountOverflow(self.as_hex()))
    }

    pub fn as_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    /// Contracts encode booleans either as a single `0x01` byte or as the
    /// text `true`.
    pub fn as_bool(&self) -> bool {
        match self.0.as_slice() {
            [1] => true,
            bytes => bytes.eq_ignore_ascii_case(b"true"),
        }
    }

    pub fn as_address(&self) -> DashboardResult<Address> {
        Address::from_bytes(&self.0)
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Result of a contract query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResponse {
    pub return_data: Vec<ReturnData>,
    pub return_code: String,
    pub return_message: String,
}

impl QueryResponse {
    pub fn is_success(&self) -> bool {
        self.return_code == RETURN_CODE_OK
    }

    /// Return value at `index`, or a malformed-response error naming it.
    pub fn get(&self, index: usize) -> DashboardResult<&ReturnData> {
        self.return_data.get(index).ok_or_else(|| {
            DashboardError::MalformedResponse(format!(
                "expected return value {} but got {}",
                index,
                self.return_data.len()
            ))
        })
    }
}

/// The `data.data` object of a proxy answer.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawQueryResponse {
    #[serde(default)]
    pub return_data: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub return_code: String,
    #[serde(default)]
    pub return_message: String,
}

impl TryFrom<RawQueryResponse> for QueryResponse {
    type Error = DashboardError;

    fn try_from(raw: RawQueryResponse) -> Result<Self, Self::Error> {
        let return_data = raw
            .return_data
            .unwrap_or_default()
            .into_iter()
            .map(|item| match item {
                Some(encoded) => ReturnData::from_base64(&encoded),
                None => Ok(ReturnData::default()),
            })
            .collect::<DashboardResult<Vec<_>>>()?;

        Ok(Self {
            return_data,
            return_code: raw.return_code,
            return_message: raw.return_message,
        })
    }
}
