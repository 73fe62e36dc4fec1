//! Overview view model.
//!
//! The overview is five stat cards fed by four independent fetches. Each
//! fetch fills one field of [`OverviewState`]; until it resolves the field
//! keeps its placeholder. [`OverviewState::cards`] turns whatever is known
//! into card models for rendering.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::denominate::{denominate_amount, DenominateOptions};
use crate::provider::NetworkProvider;
use crate::stats::{percentage, PLACEHOLDER};
use crate::types::{ContractOverview, NetworkStake};
use crate::views::ContractViews;

/// Accent color of a stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardColor {
    Orange,
    Purple,
    Red,
    Green,
}

impl CardColor {
    pub fn class(&self) -> &'static str {
        match self {
            CardColor::Orange => "orange",
            CardColor::Purple => "purple",
            CardColor::Red => "red",
            CardColor::Green => "green",
        }
    }
}

/// Icon drawn in a stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardIcon {
    Contract,
    Nodes,
    Service,
    Delegation,
}

/// Owner-only action attached to a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OwnerAction {
    SetServiceFee,
    UpdateDelegationCap,
    /// Carries the flag currently set on the contract
    ToggleAutomaticActivation { current: bool },
}

/// Everything one card needs to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatCardModel {
    pub title: String,
    pub value: String,
    pub value_unit: String,
    pub color: CardColor,
    pub icon: CardIcon,
    pub percentage: Option<String>,
    pub action: Option<OwnerAction>,
}

/// Data behind the overview cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewState {
    /// Denominated total active stake, `"..."` until loaded
    pub total_active_stake: String,
    /// Node count, `"..."` until loaded
    pub node_count: String,
    pub contract: Option<ContractOverview>,
    pub network_stake: NetworkStake,
}

impl Default for OverviewState {
    fn default() -> Self {
        Self {
            total_active_stake: PLACEHOLDER.to_string(),
            node_count: PLACEHOLDER.to_string(),
            contract: None,
            network_stake: NetworkStake::default(),
        }
    }
}

impl OverviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total_active_stake(&mut self, raw: u128, options: &DenominateOptions) {
        self.total_active_stake = denominate_amount(raw, options);
    }

    pub fn set_node_count(&mut self, count: usize) {
        self.node_count = count.to_string();
    }

    pub fn set_contract(&mut self, contract: ContractOverview) {
        self.contract = Some(contract);
    }

    pub fn set_network_stake(&mut self, stake: NetworkStake) {
        self.network_stake = stake;
    }

    /// Fire the four fetches concurrently and keep whatever succeeds.
    ///
    /// Failures are logged and leave the field at its placeholder.
    pub async fn load<P: NetworkProvider>(
        views: &ContractViews<P>,
        config: &DashboardConfig,
    ) -> Self {
        let (network_stake, total_stake, node_count, contract) = futures::join!(
            views.network_stake(),
            views.total_active_stake(),
            views.node_count(),
            views.contract_config(),
        );

        let mut state = Self::new();

        match network_stake {
            Ok(stake) => state.set_network_stake(stake),
            Err(e) => tracing::error!(error = %e, "Failed to fetch network stake"),
        }
        match total_stake {
            Ok(raw) => state.set_total_active_stake(raw, &config.stake_denominate_options()),
            Err(e) => tracing::error!(error = %e, "Failed to fetch total active stake"),
        }
        match node_count {
            Ok(count) => state.set_node_count(count),
            Err(e) => tracing::error!(error = %e, "Failed to fetch BLS keys status"),
        }
        match contract {
            Ok(overview) => state.set_contract(overview),
            Err(e) => tracing::error!(error = %e, "Failed to fetch contract config"),
        }

        state
    }

    /// Card models in display order.
    pub fn cards(&self, config: &DashboardConfig) -> Vec<StatCardModel> {
        let label = config.egld_label().to_string();
        let network_total =
            denominate_amount(self.network_stake.total_staked, &config.stake_denominate_options());
        let contract = self.contract.clone().unwrap_or_default();

        vec![
            StatCardModel {
                title: "Contract Stake".to_string(),
                value: self.total_active_stake.clone(),
                value_unit: label.clone(),
                color: CardColor::Orange,
                icon: CardIcon::Contract,
                percentage: Some(format!(
                    "{}% of total stake",
                    percentage(&self.total_active_stake, &network_total)
                )),
                action: None,
            },
            StatCardModel {
                title: "Number of Nodes".to_string(),
                value: self.node_count.clone(),
                value_unit: String::new(),
                color: CardColor::Purple,
                icon: CardIcon::Nodes,
                percentage: Some(format!(
                    "{}% of total nodes",
                    percentage(
                        &self.node_count,
                        &self.network_stake.total_validators.to_string()
                    )
                )),
                action: None,
            },
            StatCardModel {
                title: "Service Fee".to_string(),
                value: contract.service_fee.clone(),
                value_unit: "%".to_string(),
                color: CardColor::Red,
                icon: CardIcon::Service,
                percentage: None,
                action: Some(OwnerAction::SetServiceFee),
            },
            StatCardModel {
                title: "Delegation cap".to_string(),
                value: contract.max_delegation_cap.clone(),
                value_unit: label,
                color: CardColor::Green,
                icon: CardIcon::Delegation,
                percentage: Some(format!(
                    "{}% filled",
                    percentage(&self.total_active_stake, &contract.max_delegation_cap)
                )),
                action: Some(OwnerAction::UpdateDelegationCap),
            },
            StatCardModel {
                title: "Automatic activation".to_string(),
                value: contract.automatic_activation_label().to_string(),
                value_unit: String::new(),
                color: CardColor::Green,
                icon: CardIcon::Delegation,
                percentage: None,
                action: Some(OwnerAction::ToggleAutomaticActivation {
                    current: contract.automatic_activation,
                }),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egld(amount: u128) -> u128 {
        amount * 1_000_000_000_000_000_000
    }

    #[test]
    fn test_placeholders_before_data() {
        let config = DashboardConfig::default();
        let cards = OverviewState::new().cards(&config);

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].value, "...");
        assert_eq!(cards[0].percentage.as_deref(), Some("...% of total stake"));
        assert_eq!(cards[1].value, "...");
        assert_eq!(cards[1].percentage.as_deref(), Some("...% of total nodes"));
        assert_eq!(cards[2].value, "");
        assert_eq!(cards[3].percentage.as_deref(), Some("...% filled"));
        assert_eq!(cards[4].value, "OFF");
    }

    #[test]
    fn test_cards_after_data() {
        let config = DashboardConfig::default();
        let options = config.stake_denominate_options();
        let mut state = OverviewState::new();
        state.set_total_active_stake(egld(2500), &options);
        state.set_node_count(4);
        state.set_network_stake(NetworkStake {
            total_validators: 200,
            active_validators: 190,
            queue_size: 0,
            total_staked: egld(10_000),
        });
        state.set_contract(ContractOverview {
            service_fee: "12.5".to_string(),
            max_delegation_cap: "5,000".to_string(),
            automatic_activation: true,
            ..Default::default()
        });

        let cards = state.cards(&config);
        assert_eq!(cards[0].value, "2,500");
        assert_eq!(cards[0].value_unit, "EGLD");
        assert_eq!(cards[0].percentage.as_deref(), Some("25.00% of total stake"));
        assert_eq!(cards[1].percentage.as_deref(), Some("2.00% of total nodes"));
        assert_eq!(cards[2].value, "12.5");
        assert_eq!(cards[2].value_unit, "%");
        assert_eq!(cards[3].percentage.as_deref(), Some("50.00% filled"));
        assert_eq!(cards[4].value, "ON");
        assert_eq!(
            cards[4].action,
            Some(OwnerAction::ToggleAutomaticActivation { current: true })
        );
    }

    #[test]
    fn test_small_share_collapses() {
        let config = DashboardConfig::default();
        let mut state = OverviewState::new();
        state.set_node_count(1);
        state.set_network_stake(NetworkStake {
            total_validators: 3200,
            ..Default::default()
        });
        assert_eq!(
            state.cards(&config)[1].percentage.as_deref(),
            Some("<1% of total nodes")
        );
    }

    #[test]
    fn test_zero_stake_shows_zero() {
        let config = DashboardConfig::default();
        let mut state = OverviewState::new();
        state.set_total_active_stake(0, &config.stake_denominate_options());
        assert_eq!(state.total_active_stake, "0");
    }

    #[test]
    fn test_card_order_and_colors() {
        let cards = OverviewState::new().cards(&DashboardConfig::default());
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Contract Stake",
                "Number of Nodes",
                "Service Fee",
                "Delegation cap",
                "Automatic activation"
            ]
        );
        let colors: Vec<_> = cards.iter().map(|c| c.color.class()).collect();
        assert_eq!(colors, ["orange", "purple", "red", "green", "green"]);
    }
}
