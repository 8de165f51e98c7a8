//! # Card Payment
//!
//! Credit card payment method. Confirmation text shows only the last four
//! digits of the card; the full number never leaves the struct.

use checkout_core::{CheckoutError, CheckoutResult, PaymentMethod, PaymentOutcome, Price};
use tracing::{debug, instrument};

/// Minimum number of digits a card number must carry for the masked
/// suffix to be well-defined.
pub const MIN_CARD_DIGITS: usize = 16;

/// Credit card payment method
#[derive(Debug, Clone)]
pub struct CardPayment {
    number: String,
    holder: String,
}

impl CardPayment {
    /// Create a card payment for `number` held by `holder`.
    ///
    /// Fails with `MalformedCardNumber` when the number carries fewer than
    /// [`MIN_CARD_DIGITS`] digits, so masking is always well-defined on a
    /// constructed card.
    pub fn new(number: impl Into<String>, holder: impl Into<String>) -> CheckoutResult<Self> {
        let number = number.into();
        let digits = number.chars().filter(char::is_ascii_digit).count();

        if digits < MIN_CARD_DIGITS {
            return Err(CheckoutError::MalformedCardNumber {
                expected: MIN_CARD_DIGITS,
                actual: digits,
            });
        }

        Ok(Self {
            number,
            holder: holder.into(),
        })
    }

    /// Cardholder name
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Card number with everything but the last four digits hidden,
    /// e.g. `**** **** **** 3456`.
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let last_four: String = digits[digits.len() - 4..].iter().collect();
        format!("**** **** **** {last_four}")
    }
}

impl PaymentMethod for CardPayment {
    #[instrument(skip(self), fields(holder = %self.holder))]
    fn process(&self, amount: Price) -> PaymentOutcome {
        debug!("charging {} to card {}", amount.display(), self.masked_number());

        PaymentOutcome::approved(
            self.method_name(),
            format!(
                "Pagamento de {} aprovado no cartão {} ({})",
                amount.display(),
                self.masked_number(),
                self.holder
            ),
        )
    }

    fn method_name(&self) -> &'static str {
        "cartao"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::Currency;

    #[test]
    fn test_masking_shows_last_four_only() {
        let card = CardPayment::new("1234567890123456", "Maria Silva").unwrap();
        assert_eq!(card.masked_number(), "**** **** **** 3456");
    }

    #[test]
    fn test_masking_ignores_separators() {
        let card = CardPayment::new("1234 5678 9012 3456", "Maria Silva").unwrap();
        assert_eq!(card.masked_number(), "**** **** **** 3456");
    }

    #[test]
    fn test_short_number_rejected() {
        let err = CardPayment::new("123456789012", "Maria Silva").unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::MalformedCardNumber {
                expected: 16,
                actual: 12
            }
        ));
    }

    #[test]
    fn test_process_approves_and_masks() {
        let card = CardPayment::new("1234567890123456", "Maria Silva").unwrap();
        let outcome = card.process(Price::new(399.80, Currency::BRL));

        assert!(outcome.succeeded);
        assert_eq!(outcome.method, "cartao");
        assert!(outcome.description.contains("**** **** **** 3456"));
        assert!(outcome.description.contains("Maria Silva"));
        assert!(outcome.description.contains("R$ 399.80"));
        assert!(!outcome.description.contains("1234567890123456"));
    }
}
