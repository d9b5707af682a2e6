//! # Checkout Error Types
//!
//! Typed error handling for the checkout service.
//! Every fallible step returns `Result<T, CheckoutError>` so the handler can
//! stop at the first failure.

use thiserror::Error;

/// Core error type for checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing keys, unreadable price table)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request body was not a valid checkout request
    #[error("{0}")]
    InvalidBody(String),

    /// Intent endpoint called with something other than POST
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Product id has no price (or prices at zero)
    #[error("Unknown product: {product_id:?}")]
    UnknownProduct { product_id: String },

    /// Payment provider rejected the call
    #[error("{message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error talking to the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::InvalidBody(_) => 400,
            CheckoutError::MethodNotAllowed => 405,
            CheckoutError::UnknownProduct { .. } => 400,
            CheckoutError::Provider { .. } => 500,
            CheckoutError::Network(_) => 500,
            CheckoutError::Serialization(_) => 500,
        }
    }

    /// True for failures that originate at the payment provider
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CheckoutError::Provider { .. } | CheckoutError::Network(_)
        )
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        CheckoutError::InvalidBody(err.to_string())
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
