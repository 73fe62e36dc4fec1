//! Dashboard configuration.
//!
//! Loaded from a JSON file; every field has a mainnet default so a partial
//! file (or none at all) still yields a usable config.
//!
//! ```json
//! {
//!   "network": { "id": "devnet", "gateway_address": "https://devnet-gateway.elrond.com" },
//!   "delegation_contract": "erd1qqqqqqqqqqqqqqqpqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqxlllshevkwc"
//! }
//! ```

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::denominate::DenominateOptions;
use crate::error::{DashboardError, DashboardResult};

/// System auction contract holding validator key status.
pub const AUCTION_CONTRACT: &str = "erd1qqqqqqqqqqqqqqqpqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqplllst77y4l";

/// Delegation contract shown when none is configured.
pub const DEFAULT_DELEGATION_CONTRACT: &str =
    "erd1qqqqqqqqqqqqqqqpqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqxlllshevkwc";

pub const DEFAULT_DENOMINATION: u32 = 18;
pub const DEFAULT_DECIMALS: u32 = 2;
pub const DEFAULT_GAS_LIMIT: u64 = 12_000_000;

/// File name inside the config directory.
const CONFIG_FILE: &str = "config.json";

/// Endpoints and labels of the network the contract lives on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub id: String,
    pub name: String,
    pub egld_label: String,
    pub gateway_address: String,
    pub api_address: String,
    pub wallet_address: String,
    pub explorer_address: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            id: "mainnet".to_string(),
            name: "Mainnet".to_string(),
            egld_label: "EGLD".to_string(),
            gateway_address: "https://gateway.elrond.com".to_string(),
            api_address: "https://api.elrond.com".to_string(),
            wallet_address: "https://wallet.elrond.com".to_string(),
            explorer_address: "https://explorer.elrond.com".to_string(),
        }
    }
}

/// Full dashboard configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub network: NetworkConfig,
    pub delegation_contract: String,
    pub auction_contract: String,
    pub denomination: u32,
    pub decimals: u32,
    pub gas_limit: u64,
    /// Render owner actions on the owner route
    pub owner_actions: bool,
    pub request_timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            delegation_contract: DEFAULT_DELEGATION_CONTRACT.to_string(),
            auction_contract: AUCTION_CONTRACT.to_string(),
            denomination: DEFAULT_DENOMINATION,
            decimals: DEFAULT_DECIMALS,
            gas_limit: DEFAULT_GAS_LIMIT,
            owner_actions: true,
            request_timeout_secs: 10,
        }
    }
}

impl DashboardConfig {
    /// Default config location: `<config dir>/delegation-dashboard/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("delegation-dashboard")
            .join(CONFIG_FILE)
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load) but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> DashboardResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.delegation_address()?;
        self.auction_address()?;

        for (name, url) in [
            ("gateway_address", &self.network.gateway_address),
            ("api_address", &self.network.api_address),
            ("wallet_address", &self.network.wallet_address),
        ] {
            Url::parse(url)
                .map_err(|e| DashboardError::InvalidConfig(format!("{}: {}", name, e)))?;
        }

        if self.decimals > self.denomination {
            return Err(DashboardError::InvalidConfig(format!(
                "decimals ({}) exceeds denomination ({})",
                self.decimals, self.denomination
            )));
        }
        Ok(())
    }

    pub fn delegation_address(&self) -> DashboardResult<Address> {
        Address::from_bech32(&self.delegation_contract)
    }

    pub fn auction_address(&self) -> DashboardResult<Address> {
        Address::from_bech32(&self.auction_contract)
    }

    /// Options for cap and owner-funds style amounts.
    pub fn denominate_options(&self) -> DenominateOptions {
        DenominateOptions::new(self.denomination, self.decimals)
    }

    /// Options for stake totals, which keep their last non-zero decimal.
    pub fn stake_denominate_options(&self) -> DenominateOptions {
        self.denominate_options().show_last_non_zero_decimal(true)
    }

    pub fn egld_label(&self) -> &str {
        &self.network.egld_label
    }

    /// Explorer page of the delegation contract, used as the wallet callback.
    pub fn contract_explorer_url(&self) -> String {
        format!(
            "{}/accounts/{}",
            self.network.explorer_address.trim_end_matches('/'),
            self.delegation_contract
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_valid() {
        let config = DashboardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.denomination, 18);
        assert_eq!(config.decimals, 2);
        assert!(config.owner_actions);
        assert!(config.auction_address().unwrap().is_smart_contract());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"network": {"id": "devnet", "egld_label": "xEGLD"}, "decimals": 4}"#,
        )
        .unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.network.id, "devnet");
        assert_eq!(config.egld_label(), "xEGLD");
        assert_eq!(config.network.gateway_address, "https://gateway.elrond.com");
        assert_eq!(config.decimals, 4);
        assert_eq!(config.delegation_contract, DEFAULT_DELEGATION_CONTRACT);
    }

    #[test]
    fn test_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = DashboardConfig::load_or_default(temp.path().join("nope.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");
        let mut config = DashboardConfig::default();
        config.owner_actions = false;
        config.save(&path).unwrap();

        assert_eq!(DashboardConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_contract() {
        let config = DashboardConfig {
            delegation_contract: "erd1notanaddress".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_rejects_decimals_over_denomination() {
        let config = DashboardConfig {
            decimals: 20,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_contract_explorer_url() {
        let mut config = DashboardConfig::default();
        config.network.explorer_address = "https://explorer.example/".to_string();
        assert_eq!(
            config.contract_explorer_url(),
            format!("https://explorer.example/accounts/{}", DEFAULT_DELEGATION_CONTRACT)
        );
    }

    #[test]
    fn test_rejects_bad_url() {
        let mut config = DashboardConfig::default();
        config.network.gateway_address = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
