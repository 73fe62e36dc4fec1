use delegation_core::AdminAction;
use delegation_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use super::SignTransaction;
use crate::context::{use_dashboard, PreparedTransaction};

/// Flips `setAutomaticActivation` relative to the loaded flag.
#[component]
pub fn AutomaticActivationAction(current: bool) -> Element {
    let ctx = use_dashboard();
    let mut error = use_signal(|| None::<String>);
    let mut prepared = use_signal(|| None::<PreparedTransaction>);

    let toggle = move |_: ()| {
        match ctx.prepare(&AdminAction::set_automatic_activation(!current)) {
            Ok(tx) => {
                error.set(None);
                prepared.set(Some(tx));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to prepare automatic activation change");
                error.set(Some(e.to_string()));
            }
        }
    };

    if let Some(tx) = prepared() {
        return rsx! {
            SignTransaction {
                prepared: tx,
                on_cancel: move |_| prepared.set(None),
            }
        };
    }

    let text = if current {
        "Turn automatic activation off"
    } else {
        "Turn automatic activation on"
    };

    rsx! {
        Button {
            variant: ButtonVariant::Link,
            onclick: toggle,
            "{text}"
        }
        if let Some(message) = error() {
            p { class: "input-error", role: "alert", "{message}" }
        }
    }
}
