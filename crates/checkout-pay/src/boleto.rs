//! # Boleto Payment
//!
//! Boleto bancário payment method. Generating the slip is the whole
//! action; the customer has a fixed window to pay it at their bank.

use checkout_core::{PaymentMethod, PaymentOutcome, Price};
use tracing::{debug, instrument};

/// Example settlement line printed on every demo boleto
pub const BOLETO_SETTLEMENT_CODE: &str = "34191.79001 01043.510047 91020.150008";

/// Days the customer has to pay the slip
pub const BOLETO_DUE_DAYS: u32 = 3;

/// Boleto payment method
#[derive(Debug, Clone)]
pub struct BoletoPayment {
    tax_id: String,
}

impl BoletoPayment {
    /// Create a boleto payment billed to `tax_id` (the payer's CPF)
    pub fn new(tax_id: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
        }
    }

    /// The payer's tax ID
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }
}

impl PaymentMethod for BoletoPayment {
    #[instrument(skip(self), fields(tax_id = %self.tax_id))]
    fn process(&self, amount: Price) -> PaymentOutcome {
        debug!("issuing boleto for {}", amount.display());

        PaymentOutcome::approved(
            self.method_name(),
            format!(
                "Boleto de {} gerado para o CPF {}, código {}, vence em {} dias",
                amount.display(),
                self.tax_id,
                BOLETO_SETTLEMENT_CODE,
                BOLETO_DUE_DAYS
            ),
        )
    }

    fn method_name(&self) -> &'static str {
        "boleto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::Currency;

    #[test]
    fn test_process_issues_slip() {
        let boleto = BoletoPayment::new("123.456.789-00");
        let outcome = boleto.process(Price::new(439.80, Currency::BRL));

        assert!(outcome.succeeded);
        assert_eq!(outcome.method, "boleto");
        assert!(outcome.description.contains("123.456.789-00"));
        assert!(outcome.description.contains(BOLETO_SETTLEMENT_CODE));
        assert!(outcome.description.contains("vence em 3 dias"));
    }
}
