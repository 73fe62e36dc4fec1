//! Delegation Dashboard Core Library
//!
//! Everything the dashboard knows about a delegation contract, minus the
//! pixels.
//!
//! ## Overview
//!
//! A delegation contract pools stake from many users and stakes it through
//! validator nodes. The dashboard shows five numbers about one contract
//! (total active stake, node count, service fee, delegation cap, automatic
//! activation) and lets the owner prepare administrative transactions.
//!
//! - [`views`] runs the read-only contract queries through a
//!   [`NetworkProvider`]
//! - [`denominate`] turns raw on-chain integers into display strings
//! - [`overview`] builds the card view model from independently fetched
//!   pieces of state
//! - [`transactions`] validates owner input and builds unsigned
//!   transactions for the web wallet
//!
//! ## Quick Start
//!
//! ```ignore
//! use delegation_core::{ContractViews, DashboardConfig, OverviewState, ProxyProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::default();
//!     let views = ContractViews::new(ProxyProvider::new(&config)?, &config)?;
//!
//!     let state = OverviewState::load(&views, &config).await;
//!     for card in state.cards(&config) {
//!         println!("{}: {} {}", card.title, card.value, card.value_unit);
//!     }
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod config;
pub mod denominate;
pub mod error;
pub mod logging;
pub mod overview;
pub mod provider;
pub mod query;
pub mod stats;
pub mod transactions;
pub mod types;
pub mod views;

// Re-exports
pub use address::Address;
pub use config::{DashboardConfig, NetworkConfig};
pub use denominate::{denominate, denominate_amount, nominate, DenominateOptions};
pub use error::{DashboardError, DashboardResult};
pub use overview::{CardColor, CardIcon, OverviewState, OwnerAction, StatCardModel};
pub use provider::{NetworkProvider, ProxyProvider};
pub use query::{Argument, ContractFunction, Query, QueryResponse, ReturnData};
pub use stats::{percentage, PLACEHOLDER};
pub use transactions::{AdminAction, TransactionRequest};
pub use types::{BlsKey, ContractOverview, NetworkStake, NodeStatus};
pub use views::ContractViews;
