//! Delegation Dashboard UI Components
//!
//! Presentational Dioxus components shared by the dashboard pages. They
//! take plain props and hold no network state; fetching lives in the app.
//!
//! ## Card colors
//!
//! - **Orange**: contract stake
//! - **Purple**: node count
//! - **Red**: service fee
//! - **Green**: delegation cap and automatic activation

pub mod components;

pub use components::*;
