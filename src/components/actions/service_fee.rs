use delegation_core::AdminAction;
use delegation_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;

use super::SignTransaction;
use crate::context::{use_dashboard, PreparedTransaction};

/// Form for `changeServiceFee`, fee typed as a percentage.
#[component]
pub fn ServiceFeeAction() -> Element {
    let ctx = use_dashboard();
    let mut open = use_signal(|| false);
    let mut fee = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut prepared = use_signal(|| None::<PreparedTransaction>);

    let submit = move |_: ()| {
        match AdminAction::change_service_fee(fee().trim()).and_then(|action| ctx.prepare(&action))
        {
            Ok(tx) => {
                error.set(None);
                prepared.set(Some(tx));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected service fee");
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
                    id: "service-fee".to_string(),
                    value: fee(),
                    oninput: move |value| fee.set(value),
                    label: "New service fee".to_string(),
                    placeholder: "12.5".to_string(),
                    suffix: "%".to_string(),
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
                "Change service fee"
            }
        }
    }
}
