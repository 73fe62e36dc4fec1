//! Reusable UI components.

mod button;
mod icons;
mod input;
mod stat_card;

pub use button::*;
pub use icons::*;
pub use input::*;
pub use stat_card::*;
