//! Owner panel: the overview plus admin actions and contract details.

use dioxus::prelude::*;

use crate::components::{NavHeader, NavLocation, Overview};
use crate::context::use_dashboard;

#[component]
pub fn Owner() -> Element {
    let ctx = use_dashboard();
    let wallet = ctx.config.network.wallet_address.clone();

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Owner }
            main { class: "page__content",
                if ctx.config.owner_actions {
                    p { class: "page__notice",
                        "Actions open {wallet} to sign. Only the contract owner's transactions succeed."
                    }
                    Overview { owner_view: true }
                } else {
                    p { class: "page__notice", "Owner actions are disabled in the configuration." }
                    Overview {}
                }
            }
        }
    }
}
