//! # PIX Payment
//!
//! PIX transfer payment method. PIX settles instantly, so the outcome
//! confirms settlement in the same breath.

use checkout_core::{PaymentMethod, PaymentOutcome, Price};
use tracing::{debug, instrument};

/// PIX payment method
#[derive(Debug, Clone)]
pub struct PixPayment {
    key: String,
}

impl PixPayment {
    /// Create a PIX payment against `key` (email, phone, or random key)
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The PIX key the transfer targets
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PaymentMethod for PixPayment {
    #[instrument(skip(self), fields(key = %self.key))]
    fn process(&self, amount: Price) -> PaymentOutcome {
        debug!("settling pix transfer of {}", amount.display());

        PaymentOutcome::approved(
            self.method_name(),
            format!(
                "PIX de {} para a chave {} liquidado na hora",
                amount.display(),
                self.key
            ),
        )
    }

    fn method_name(&self) -> &'static str {
        "pix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::Currency;

    #[test]
    fn test_process_settles_instantly() {
        let pix = PixPayment::new("maria@email.com");
        let outcome = pix.process(Price::new(169.90, Currency::BRL));

        assert!(outcome.succeeded);
        assert_eq!(outcome.method, "pix");
        assert!(outcome.description.contains("maria@email.com"));
        assert!(outcome.description.contains("R$ 169.90"));
        assert!(outcome.description.contains("liquidado na hora"));
    }
}
