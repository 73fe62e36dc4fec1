//! Dashboard components.

pub mod actions;
mod contract_details;
mod nav_header;
mod overview;

pub use contract_details::ContractDetails;
pub use nav_header::{NavHeader, NavLocation};
pub use overview::Overview;
