use dioxus::prelude::*;

use crate::pages::{Dashboard, Owner};
use crate::theme::GLOBAL_STYLES;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/owner")]
    Owner {},
}

/// Root component. The dashboard context is provided by the launcher.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
