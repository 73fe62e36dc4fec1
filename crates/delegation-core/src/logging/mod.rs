//! Structured logging for the dashboard and CLI.
//!
//! Console output goes through `tracing_subscriber::fmt`; optionally every
//! event is also appended to a JSONL file so failed fetches can be looked at
//! after the window is closed.
//!
//! ```text
//! logs/
//! └── 2026-10-19_dashboard.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use delegation_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("dashboard")
//!     .with_filter("delegation_core=debug")
//!     .with_logs_dir("./logs")
//!     .init()?;
//! ```
//!
//! Query the file with jq:
//!
//! ```bash
//! jq 'select(.level == "error")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;

pub use entry::JsonLogEntry;
pub use layer::{read_entries, JsonlLayer, LoggingBuilder};
