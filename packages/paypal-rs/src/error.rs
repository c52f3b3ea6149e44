//! Error types for the PayPal client.

use thiserror::Error;

/// Result type for PayPal client operations.
pub type Result<T> = std::result::Result<T, PayPalError>;

/// PayPal client errors.
#[derive(Debug, Error)]
pub enum PayPalError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, declined token grant, invalid request)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
