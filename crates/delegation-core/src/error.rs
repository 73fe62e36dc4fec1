//! Error types for the Delegation Dashboard

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Raw amount string contained something other than digits
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount does not fit in 128 bits
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    /// Bech32 or hex address could not be decoded
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The proxy answered but the contract call failed
    #[error("Contract query {func} failed ({code}): {message}")]
    ContractQuery {
        func: String,
        code: String,
        message: String,
    },

    /// Response shape did not match what the view expects
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is present but unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Admin action input rejected before building a transaction
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;
