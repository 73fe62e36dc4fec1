//! Public overview of the delegation contract.

use dioxus::prelude::*;

use crate::components::{NavHeader, NavLocation, Overview};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Overview }
            main { class: "page__content",
                Overview {}
            }
        }
    }
}
