//! # Checkout Error Types
//!
//! Typed error handling for the checkout-rs order engine.
//! All fallible checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Payment kind string not recognized by the factory
    #[error("Unknown payment kind: {kind}")]
    UnknownPaymentKind { kind: String },

    /// Order finalized before a payment method was chosen
    #[error("No payment method selected for order {order_id}")]
    NoPaymentMethodSelected { order_id: String },

    /// Card number too short to derive a masked suffix
    #[error("Malformed card number: expected at least {expected} digits, got {actual}")]
    MalformedCardNumber { expected: usize, actual: usize },

    /// Configuration errors (unparseable config file, bad values)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CheckoutError {
    /// Returns true if the caller can recover by re-invoking with
    /// corrected input, as opposed to an operator-side configuration
    /// problem.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, CheckoutError::Configuration(_))
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
