//! Account and contract addresses.
//!
//! Addresses are 32-byte public keys shown to users as `erd1…` bech32
//! strings and sent to contracts as hex arguments.

use std::fmt;
use std::str::FromStr;

use bech32::{Bech32, Hrp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DashboardError, DashboardResult};

/// Human-readable part of every address on the network.
const HRP: Hrp = Hrp::parse_unchecked("erd");

/// Length of a public key in bytes.
pub const PUBKEY_LEN: usize = 32;

/// Number of leading zero bytes that mark a smart contract address.
const CONTRACT_PREFIX_ZEROS: usize = 8;

/// A 32-byte account or contract public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; PUBKEY_LEN]);

impl Address {
    /// Build from raw public key bytes.
    pub fn from_bytes(bytes: &[u8]) -> DashboardResult<Self> {
        let key: [u8; PUBKEY_LEN] = bytes.try_into().map_err(|_| {
            DashboardError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                PUBKEY_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    /// Decode an `erd1…` string.
    pub fn from_bech32(value: &str) -> DashboardResult<Self> {
        let (hrp, data) = bech32::decode(value.trim())
            .map_err(|e| DashboardError::InvalidAddress(format!("{}: {}", value, e)))?;
        if hrp != HRP {
            return Err(DashboardError::InvalidAddress(format!(
                "{}: unexpected prefix {}",
                value, hrp
            )));
        }
        Self::from_bytes(&data)
    }

    /// Decode a 64-character hex public key.
    pub fn from_hex(value: &str) -> DashboardResult<Self> {
        let bytes = hex::decode(value)
            .map_err(|e| DashboardError::InvalidAddress(format!("{}: {}", value, e)))?;
        Self::from_bytes(&bytes)
    }

    /// Bech32 form.
    pub fn to_bech32(&self) -> String {
        self.to_string()
    }

    /// Lowercase hex of the public key.
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// Contract addresses start with eight zero bytes.
    pub fn is_smart_contract(&self) -> bool {
        self.0[..CONTRACT_PREFIX_ZEROS].iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bech32::encode_to_fmt::<Bech32, _>(f, HRP, &self.0).map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_bech32(&s).map_err(serde::de::Error::custom)
    }
}
