//! Overview Component
//!
//! The five stat cards. Each value is fetched on its own task so a slow or
//! failing query only holds back its own card.

use delegation_core::{OverviewState, StatCardModel};
use delegation_ui::{Button, ButtonVariant, StatCard};
use dioxus::prelude::*;

use crate::components::actions::OwnerActionPanel;
use crate::components::ContractDetails;
use crate::context::use_dashboard;

/// Results of a fetch started before the latest Refresh are dropped.
fn is_stale(started: u32, latest: u32) -> bool {
    started != latest
}

#[derive(Props, Clone, PartialEq)]
pub struct OverviewProps {
    /// Render owner actions and contract details
    #[props(default = false)]
    pub owner_view: bool,
}

#[component]
pub fn Overview(props: OverviewProps) -> Element {
    let ctx = use_dashboard();

    let mut state = use_signal(OverviewState::new);
    // Raw stake for validating a new delegation cap
    let mut active_stake = use_signal(|| None::<u128>);
    let mut reload = use_signal(|| 0u32);

    let views = ctx.views.clone();
    let stake_options = ctx.config.stake_denominate_options();

    use_effect(move || {
        let generation = reload();
        tracing::debug!(generation, "Loading contract overview");

        let v = views.clone();
        spawn(async move {
            let result = v.network_stake().await;
            if is_stale(generation, *reload.peek()) {
                return;
            }
            match result {
                Ok(stake) => state.with_mut(|s| s.set_network_stake(stake)),
                Err(e) => tracing::error!(error = %e, "Failed to fetch network stake"),
            }
        });

        let v = views.clone();
        spawn(async move {
            let result = v.total_active_stake().await;
            if is_stale(generation, *reload.peek()) {
                return;
            }
            match result {
                Ok(raw) => {
                    active_stake.set(Some(raw));
                    state.with_mut(|s| s.set_total_active_stake(raw, &stake_options));
                }
                Err(e) => tracing::error!(error = %e, "Failed to fetch total active stake"),
            }
        });

        let v = views.clone();
        spawn(async move {
            let result = v.node_count().await;
            if is_stale(generation, *reload.peek()) {
                return;
            }
            match result {
                Ok(count) => state.with_mut(|s| s.set_node_count(count)),
                Err(e) => tracing::error!(error = %e, "Failed to fetch BLS keys status"),
            }
        });

        let v = views.clone();
        spawn(async move {
            let result = v.contract_config().await;
            if is_stale(generation, *reload.peek()) {
                return;
            }
            match result {
                Ok(contract) => state.with_mut(|s| s.set_contract(contract)),
                Err(e) => tracing::error!(error = %e, "Failed to fetch contract config"),
            }
        });
    });

    let current = state.read().clone();
    let cards: Vec<StatCardModel> = current.cards(&ctx.config);
    let show_actions = props.owner_view && ctx.config.owner_actions;
    let stake = active_stake();

    rsx! {
        section { class: "overview",
            div { class: "overview__toolbar",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| reload += 1,
                    "Refresh"
                }
            }

            div { class: "stat-cards",
                for card in cards {
                    StatCard {
                        key: "{card.title}",
                        title: card.title.clone(),
                        value: card.value.clone(),
                        value_unit: card.value_unit.clone(),
                        color: card.color,
                        icon: card.icon,
                        percentage: card.percentage.clone(),
                        if let (true, Some(action)) = (show_actions, card.action) {
                            OwnerActionPanel { action, active_stake: stake }
                        }
                    }
                }
            }

            if props.owner_view {
                if let Some(contract) = current.contract.clone() {
                    ContractDetails { contract }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::offline_context;
    use crate::context::DashboardContext;
    use delegation_core::DashboardConfig;

    fn render(ctx: DashboardContext, owner_view: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Overview, OverviewProps { owner_view })
            .with_root_context(ctx);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn fetches_from_an_earlier_refresh_are_dropped() {
        assert!(!is_stale(0, 0));
        assert!(!is_stale(3, 3));
        assert!(is_stale(0, 1));
        assert!(is_stale(2, 5));
    }

    #[test]
    fn cards_show_placeholders_before_any_fetch() {
        let html = render(offline_context(DashboardConfig::default()), false);

        assert!(html.contains("Contract Stake"));
        assert!(html.contains("Number of Nodes"));
        assert!(html.contains("Service Fee"));
        assert!(html.contains("Delegation cap"));
        assert!(html.contains("Automatic activation"));
        assert!(html.contains("...% of total stake"));
        assert!(!html.contains("action-panel"));
    }

    #[test]
    fn owner_view_shows_actions() {
        let html = render(offline_context(DashboardConfig::default()), true);

        assert!(html.contains("action-panel"));
        assert!(html.contains("Change service fee"));
        assert!(html.contains("Update delegation cap"));
    }

    #[test]
    fn owner_actions_can_be_disabled() {
        let config = DashboardConfig {
            owner_actions: false,
            ..Default::default()
        };
        let html = render(offline_context(config), true);

        assert!(!html.contains("action-panel"));
    }
}
