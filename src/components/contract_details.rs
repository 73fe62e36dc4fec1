//! Contract config as a definition list on the owner page.

use delegation_core::ContractOverview;
use dioxus::prelude::*;

use crate::context::use_dashboard;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Rows shown for a loaded contract config.
pub fn detail_rows(contract: &ContractOverview, egld_label: &str) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Owner", contract.owner_address.clone()),
        (
            "Initial owner funds",
            format!("{} {}", contract.initial_owner_funds, egld_label),
        ),
        ("Delegation cap enabled", yes_no(contract.with_delegation_cap).to_string()),
        ("Changeable service fee", yes_no(contract.changeable_service_fee).to_string()),
        (
            "Check cap on redelegate",
            yes_no(contract.check_cap_on_redelegate).to_string(),
        ),
    ];
    if let Some(secs) = contract.created_after_secs() {
        rows.push(("Created after", format!("{} s", secs)));
    }
    if let Some(period) = contract.unbond_period {
        rows.push(("Unbond period", period.to_string()));
    }
    rows
}

#[component]
pub fn ContractDetails(contract: ContractOverview) -> Element {
    let ctx = use_dashboard();
    let rows = detail_rows(&contract, ctx.config.egld_label());

    rsx! {
        section { class: "contract-details",
            h2 { class: "contract-details__title", "Contract configuration" }
            dl { class: "contract-details__list",
                for (label, value) in rows {
                    div { key: "{label}", class: "contract-details__row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}
