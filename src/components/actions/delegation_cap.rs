use delegation_core::AdminAction;
use delegation_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;

use super::SignTransaction;
use crate::context::{use_dashboard, PreparedTransaction};

/// Form for `modifyTotalDelegationCap`. Zero removes the cap.
#[component]
pub fn DelegationCapAction(active_stake: Option<u128>) -> Element {
    let ctx = use_dashboard();
    let label = ctx.config.egld_label().to_string();
    let denomination = ctx.config.denomination;
    let mut open = use_signal(|| false);
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut prepared = use_signal(|| None::<PreparedTransaction>);

    let submit = move |_: ()| {
        let built = AdminAction::modify_delegation_cap(amount().trim(), denomination, active_stake)
            .and_then(|action| ctx.prepare(&action));
        match built {
            Ok(tx) => {
                error.set(None);
                prepared.set(Some(tx));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected delegation cap");
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

    rsx! {
        if open() {
            div { class: "action-form",
                Input {
                    id: "delegation-cap".to_string(),
                    value: amount(),
                    oninput: move |value| amount.set(value),
                    label: "New delegation cap".to_string(),
                    placeholder: "0 for no cap".to_string(),
                    suffix: label,
                    error: error(),
                }
                div { class: "action-form__buttons",
                    Button { onclick: submit, "Continue" }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| {
                            open.set(false);
                            error.set(None);
                        },
                        "Cancel"
                    }
                }
            }
        } else {
            Button {
                variant: ButtonVariant::Link,
                onclick: move |_| open.set(true),
                "Update delegation cap"
            }
        }
    }
}
