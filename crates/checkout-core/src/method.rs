//! # Payment Method Trait
//!
//! Core Strategy trait for payment behaviors.
//! Implementations: card, PIX, boleto.
//!
//! ## Design Pattern
//!
//! This uses the Strategy design pattern so an order can swap its payment
//! behavior at runtime without changing the checkout code. Each method
//! implements the `PaymentMethod` trait.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │            PaymentMethod (trait)           │
//! │  ├── process(amount) -> PaymentOutcome     │
//! │  └── method_name()                         │
//! └────────────────────────────────────────────┘
//!                       ▲
//!        ┌──────────────┼──────────────┐
//!        │              │              │
//!  ┌─────┴─────┐  ┌─────┴─────┐  ┌─────┴──────┐
//!  │CardPayment│  │ PixPayment│  │BoletoPayment│
//!  └───────────┘  └───────────┘  └────────────┘
//! ```

use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Core trait for payment behavior implementations.
///
/// `process` is synchronous and deterministic: the outcome is derived only
/// from the method's own identifying data and the amount. The caller
/// guarantees the amount is non-negative.
pub trait PaymentMethod: fmt::Debug + Send + Sync {
    /// Perform the payment action for `amount` and report the outcome.
    fn process(&self, amount: Price) -> PaymentOutcome;

    /// Get the method name (for logging and display).
    fn method_name(&self) -> &'static str;
}

/// Type alias for a boxed payment method (dynamic dispatch).
/// An order owns its method exclusively.
pub type BoxedPaymentMethod = Box<dyn PaymentMethod>;

/// Structured result of attempting a payment.
///
/// Replaces print side effects: the core hands this back and the
/// presentation layer decides how to render it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// Whether the payment went through
    pub succeeded: bool,

    /// Name of the method that produced this outcome
    pub method: String,

    /// Human-readable confirmation text
    pub description: String,
}

impl PaymentOutcome {
    /// Outcome for a payment that went through
    pub fn approved(method: &str, description: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            method: method.to_string(),
            description: description.into(),
        }
    }

    /// Outcome for a payment that did not go through
    pub fn declined(method: &str, description: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            method: method.to_string(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[derive(Debug)]
    struct NoopMethod;

    impl PaymentMethod for NoopMethod {
        fn process(&self, amount: Price) -> PaymentOutcome {
            PaymentOutcome::approved(self.method_name(), amount.display())
        }

        fn method_name(&self) -> &'static str {
            "noop"
        }
    }

    #[test]
    fn test_boxed_dispatch() {
        let method: BoxedPaymentMethod = Box::new(NoopMethod);
        let outcome = method.process(Price::new(10.0, Currency::BRL));

        assert!(outcome.succeeded);
        assert_eq!(outcome.method, "noop");
        assert_eq!(outcome.description, "R$ 10.00");
    }

    #[test]
    fn test_outcome_constructors() {
        let ok = PaymentOutcome::approved("pix", "done");
        assert!(ok.succeeded);

        let failed = PaymentOutcome::declined("cartao", "insufficient funds");
        assert!(!failed.succeeded);
        assert_eq!(failed.method, "cartao");
    }
}
