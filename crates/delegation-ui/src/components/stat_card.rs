//! Stat Card Component
//!
//! One number about the contract: icon, title, value with unit, an optional
//! share-of-total footer and a slot for owner actions.

use delegation_core::{CardColor, CardIcon, StatCardModel};
use dioxus::prelude::*;

use super::icons::CardIconView;

/// Properties for the StatCard component
#[derive(Clone, PartialEq, Props)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    /// Shown after the value; empty for unitless values
    #[props(default)]
    pub value_unit: String,
    pub color: CardColor,
    pub icon: CardIcon,
    /// Footer such as `"12.50% of total stake"`
    #[props(default)]
    pub percentage: Option<String>,
    /// Owner actions rendered under the value
    pub children: Element,
}

impl StatCardProps {
    /// Props for a card model, with `children` in the action slot.
    pub fn from_model(model: &StatCardModel, children: Element) -> Self {
        Self {
            title: model.title.clone(),
            value: model.value.clone(),
            value_unit: model.value_unit.clone(),
            color: model.color,
            icon: model.icon,
            percentage: model.percentage.clone(),
            children,
        }
    }
}

/// Presentational stat card.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatCard {
///         title: "Service Fee".to_string(),
///         value: "12.5".to_string(),
///         value_unit: "%".to_string(),
///         color: CardColor::Red,
///         icon: CardIcon::Service,
///     }
/// }
/// ```
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let color_class = props.color.class();

    rsx! {
        div { class: "stat-card stat-card--{color_class}",
            div { class: "stat-card__header",
                CardIconView { icon: props.icon }
                span { class: "stat-card__title", "{props.title}" }
            }

            div { class: "stat-card__value",
                "{props.value}"
                if !props.value_unit.is_empty() {
                    span { class: "stat-card__unit", " {props.value_unit}" }
                }
            }

            if let Some(percentage) = &props.percentage {
                div { class: "stat-card__percentage", "{percentage}" }
            }

            div { class: "stat-card__actions",
                {props.children}
            }
        }
    }
}
