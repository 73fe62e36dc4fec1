//! Owner Actions
//!
//! Forms that turn owner input into an unsigned contract call. Nothing is
//! signed here: the owner finishes in the web wallet.

mod automatic_activation;
mod delegation_cap;
mod service_fee;

pub use automatic_activation::AutomaticActivationAction;
pub use delegation_cap::DelegationCapAction;
pub use service_fee::ServiceFeeAction;

use delegation_core::OwnerAction;
use delegation_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::PreparedTransaction;

/// Picks the form for a card's owner action.
#[component]
pub fn OwnerActionPanel(action: OwnerAction, active_stake: Option<u128>) -> Element {
    rsx! {
        div { class: "action-panel",
            {match action {
                OwnerAction::SetServiceFee => rsx! { ServiceFeeAction {} },
                OwnerAction::UpdateDelegationCap => rsx! { DelegationCapAction { active_stake } },
                OwnerAction::ToggleAutomaticActivation { current } => rsx! {
                    AutomaticActivationAction { current }
                },
            }}
        }
    }
}

/// Transaction summary with the link that opens the wallet.
#[component]
pub fn SignTransaction(prepared: PreparedTransaction, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div { class: "sign-tx",
            code { class: "sign-tx__data", "{prepared.request.data}" }
            p { class: "sign-tx__meta",
                "Gas limit {prepared.request.gas_limit}, value {prepared.request.value}"
            }
            div { class: "sign-tx__buttons",
                a {
                    class: "btn btn-primary",
                    href: "{prepared.wallet_url}",
                    target: "_blank",
                    "Sign in wallet"
                }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
