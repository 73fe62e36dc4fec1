//! Snapshot types shown by the dashboard.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Network-wide staking statistics from the API `/stake` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStake {
    #[serde(default)]
    pub total_validators: u64,
    #[serde(default)]
    pub active_validators: u64,
    #[serde(default)]
    pub queue_size: u64,
    /// Raw integer, not denominated
    #[serde(default, deserialize_with = "amount_from_string_or_number")]
    pub total_staked: u128,
}

/// The API has sent `totalStaked` both as a JSON string and a number.
fn amount_from_string_or_number<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(u64),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Text(text) if text.is_empty() => Ok(0),
        Amount::Text(text) => text.parse().map_err(serde::de::Error::custom),
        Amount::Number(n) => Ok(u128::from(n)),
    }
}

/// Delegation contract configuration as shown on the cards.
///
/// Amount fields hold denominated display strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractOverview {
    pub owner_address: String,
    /// Percent, e.g. `"12.5"`
    pub service_fee: String,
    pub max_delegation_cap: String,
    pub initial_owner_funds: String,
    pub automatic_activation: bool,
    pub with_delegation_cap: bool,
    pub changeable_service_fee: bool,
    pub check_cap_on_redelegate: bool,
    pub created_nonce: Option<u64>,
    pub unbond_period: Option<u64>,
}

/// Seconds per block round.
pub const ROUND_DURATION_SECS: u64 = 6;

impl ContractOverview {
    /// Seconds from genesis to the contract's creation block.
    pub fn created_after_secs(&self) -> Option<u64> {
        self.created_nonce.and_then(|n| n.checked_mul(ROUND_DURATION_SECS))
    }

    /// `"ON"` or `"OFF"` for the automatic activation card.
    pub fn automatic_activation_label(&self) -> &'static str {
        if self.automatic_activation {
            "ON"
        } else {
            "OFF"
        }
    }
}

/// Status of a validator key as reported by the auction contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    Staked,
    Jailed,
    Queued,
    NotStaked,
    UnStaked,
    Other(String),
}

impl NodeStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "staked" => NodeStatus::Staked,
            "jailed" => NodeStatus::Jailed,
            "queued" => NodeStatus::Queued,
            "notStaked" => NodeStatus::NotStaked,
            "unStaked" => NodeStatus::UnStaked,
            other => NodeStatus::Other(other.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, NodeStatus::Staked)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeStatus::Staked => write!(f, "staked"),
            NodeStatus::Jailed => write!(f, "jailed"),
            NodeStatus::Queued => write!(f, "queued"),
            NodeStatus::NotStaked => write!(f, "notStaked"),
            NodeStatus::UnStaked => write!(f, "unStaked"),
            NodeStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A validator BLS key and its status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlsKey {
    pub key_hex: String,
    pub status: NodeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_stake_from_api_string() {
        let stake: NetworkStake = serde_json::from_str(
            r#"{"totalValidators":3200,"activeValidators":3190,"queueSize":4,"totalStaked":"12500000000000000000000000"}"#,
        )
        .unwrap();
        assert_eq!(stake.total_validators, 3200);
        assert_eq!(stake.active_validators, 3190);
        assert_eq!(stake.queue_size, 4);
        assert_eq!(stake.total_staked, 12_500_000_000_000_000_000_000_000);
    }

    #[test]
    fn test_network_stake_from_api_number() {
        let stake: NetworkStake =
            serde_json::from_str(r#"{"totalValidators":1,"totalStaked":2500}"#).unwrap();
        assert_eq!(stake.total_staked, 2500);
        assert_eq!(stake.queue_size, 0);
    }

    #[test]
    fn test_network_stake_default_is_zero() {
        let stake = NetworkStake::default();
        assert_eq!(stake.total_validators, 0);
        assert_eq!(stake.total_staked, 0);
    }

    #[test]
    fn test_automatic_activation_label() {
        let mut overview = ContractOverview::default();
        assert_eq!(overview.automatic_activation_label(), "OFF");
        overview.automatic_activation = true;
        assert_eq!(overview.automatic_activation_label(), "ON");
    }

    #[test]
    fn test_created_after_secs() {
        let overview = ContractOverview {
            created_nonce: Some(100),
            ..Default::default()
        };
        assert_eq!(overview.created_after_secs(), Some(600));
    }

    #[test]
    fn test_created_after_secs_out_of_range() {
        let overview = ContractOverview {
            created_nonce: Some(u64::MAX / 2),
            ..Default::default()
        };
        assert_eq!(overview.created_after_secs(), None);
    }

    #[test]
    fn test_node_status_roundtrip_names() {
        for name in ["staked", "jailed", "queued", "notStaked", "unStaked", "leaving"] {
            assert_eq!(NodeStatus::parse(name).to_string(), name);
        }
        assert!(NodeStatus::parse("staked").is_active());
        assert!(!NodeStatus::parse("queued").is_active());
    }
}
