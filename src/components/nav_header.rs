//! Navigation Header Component
//!
//! App title, the contract being shown and links between the public
//! overview and the owner panel.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_dashboard;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Overview,
    Owner,
}

impl NavLocation {
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Overview => "Overview",
            NavLocation::Owner => "Owner",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Overview => Route::Dashboard {},
            NavLocation::Owner => Route::Owner {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Header with the contract address and the page links.
///
/// The owner link is hidden when owner actions are disabled in config.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let ctx = use_dashboard();
    let contract = ctx.views.delegation_contract().to_string();
    let network = ctx.config.network.name.clone();

    let locations: Vec<(NavLocation, &'static str)> = [NavLocation::Overview, NavLocation::Owner]
        .into_iter()
        .filter(|location| ctx.config.owner_actions || *location != NavLocation::Owner)
        .map(|location| {
            let class = if location == props.current {
                "nav-link active"
            } else {
                "nav-link"
            };
            (location, class)
        })
        .collect();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header__brand",
                h1 { class: "nav-header__title", "Delegation Dashboard" }
                span { class: "nav-header__network", "{network}" }
            }

            nav { class: "nav-header__links",
                for (location, class) in locations {
                    Link {
                        key: "{location.display_name()}",
                        to: location.route(),
                        class: class.to_string(),
                        "{location.display_name()}"
                    }
                }
            }

            code { class: "nav-header__contract", title: "Delegation contract", "{contract}" }
        }
    }
}
