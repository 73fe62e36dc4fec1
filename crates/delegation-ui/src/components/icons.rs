//! Inline SVG icons for stat cards.

use delegation_core::CardIcon;
use dioxus::prelude::*;

/// Markup for an icon, sized by the surrounding `.stat-card__icon`.
pub fn icon_svg(icon: CardIcon) -> &'static str {
    match icon {
        CardIcon::Contract => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M7 3h7l5 5v13H7z"/><path d="M14 3v5h5"/><path d="M10 13h6M10 17h6"/></svg>"#
        }
        CardIcon::Nodes => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><rect x="3" y="4" width="18" height="6" rx="1"/><rect x="3" y="14" width="18" height="6" rx="1"/><path d="M7 7h.01M7 17h.01"/></svg>"#
        }
        CardIcon::Service => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M19 5L5 19"/><circle cx="7" cy="7" r="2.5"/><circle cx="17" cy="17" r="2.5"/></svg>"#
        }
        CardIcon::Delegation => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><circle cx="12" cy="12" r="8"/><path d="M12 8v8M8 12h8"/></svg>"#
        }
    }
}

/// Icon container for a stat card.
#[component]
pub fn CardIconView(icon: CardIcon) -> Element {
    rsx! {
        div {
            class: "stat-card__icon",
            "aria-hidden": "true",
            dangerous_inner_html: icon_svg(icon),
        }
    }
}
