//! # Payment Method Factory
//!
//! Builds payment methods from a kind string (`"cartao"`, `"pix"`,
//! `"boleto"`, case-insensitive) or from caller-supplied credentials.
//! Unknown kinds are a typed error, never a silent absence.

use crate::boleto::BoletoPayment;
use crate::card::CardPayment;
use crate::pix::PixPayment;
use checkout_core::{BoxedPaymentMethod, CheckoutError, CheckoutResult};
use std::str::FromStr;
use tracing::debug;

/// Demo card number used by [`PaymentMethodFactory::create`]
pub const DEMO_CARD_NUMBER: &str = "1234567890123456";

/// Demo cardholder used by [`PaymentMethodFactory::create`]
pub const DEMO_CARD_HOLDER: &str = "Maria Silva";

/// Demo PIX key used by [`PaymentMethodFactory::create`]
pub const DEMO_PIX_KEY: &str = "maria@email.com";

/// Demo payer CPF used by [`PaymentMethodFactory::create`]
pub const DEMO_BOLETO_TAX_ID: &str = "123.456.789-00";

/// The closed set of payment kinds the store accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Card,
    Pix,
    Boleto,
}

impl PaymentKind {
    /// The kind string the factory recognizes for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Card => "cartao",
            PaymentKind::Pix => "pix",
            PaymentKind::Boleto => "boleto",
        }
    }

    /// All recognized kinds (for error help and listings)
    pub fn all() -> [PaymentKind; 3] {
        [PaymentKind::Card, PaymentKind::Pix, PaymentKind::Boleto]
    }
}

impl FromStr for PaymentKind {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cartao" => Ok(PaymentKind::Card),
            "pix" => Ok(PaymentKind::Pix),
            "boleto" => Ok(PaymentKind::Boleto),
            _ => Err(CheckoutError::UnknownPaymentKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Credentials for building a payment method with caller-supplied data
/// instead of the demo defaults
#[derive(Debug, Clone)]
pub enum PaymentCredentials {
    Card { number: String, holder: String },
    Pix { key: String },
    Boleto { tax_id: String },
}

impl PaymentCredentials {
    /// The kind these credentials belong to
    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentCredentials::Card { .. } => PaymentKind::Card,
            PaymentCredentials::Pix { .. } => PaymentKind::Pix,
            PaymentCredentials::Boleto { .. } => PaymentKind::Boleto,
        }
    }
}

/// Maps a kind string to a constructed payment method
pub struct PaymentMethodFactory;

impl PaymentMethodFactory {
    /// Build the payment method for `kind` (case-insensitive) with the
    /// demo credentials.
    ///
    /// Fails with `UnknownPaymentKind` for anything outside
    /// [`PaymentKind::all`], and with `MalformedCardNumber` if the card
    /// credentials cannot produce a valid card (not reachable with the
    /// demo constants).
    pub fn create(kind: &str) -> CheckoutResult<BoxedPaymentMethod> {
        let credentials = match kind.parse::<PaymentKind>()? {
            PaymentKind::Card => PaymentCredentials::Card {
                number: DEMO_CARD_NUMBER.to_string(),
                holder: DEMO_CARD_HOLDER.to_string(),
            },
            PaymentKind::Pix => PaymentCredentials::Pix {
                key: DEMO_PIX_KEY.to_string(),
            },
            PaymentKind::Boleto => PaymentCredentials::Boleto {
                tax_id: DEMO_BOLETO_TAX_ID.to_string(),
            },
        };

        Self::build(credentials)
    }

    /// Build a payment method from caller-supplied credentials
    pub fn build(credentials: PaymentCredentials) -> CheckoutResult<BoxedPaymentMethod> {
        let method: BoxedPaymentMethod = match credentials {
            PaymentCredentials::Card { number, holder } => {
                Box::new(CardPayment::new(number, holder)?)
            }
            PaymentCredentials::Pix { key } => Box::new(PixPayment::new(key)),
            PaymentCredentials::Boleto { tax_id } => Box::new(BoletoPayment::new(tax_id)),
        };

        debug!(method = method.method_name(), "payment method constructed");
        Ok(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        for input in ["PIX", "pix", "Pix"] {
            assert_eq!(input.parse::<PaymentKind>().unwrap(), PaymentKind::Pix);
        }
        assert_eq!("CarTao".parse::<PaymentKind>().unwrap(), PaymentKind::Card);
        assert_eq!("BOLETO".parse::<PaymentKind>().unwrap(), PaymentKind::Boleto);
    }

    #[test]
    fn test_create_is_case_insensitive() {
        for input in ["PIX", "pix", "Pix"] {
            let method = PaymentMethodFactory::create(input).unwrap();
            assert_eq!(method.method_name(), "pix");
        }
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = PaymentMethodFactory::create("cheque").unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::UnknownPaymentKind { ref kind } if kind == "cheque"
        ));
    }

    #[test]
    fn test_create_builds_each_kind() {
        for kind in PaymentKind::all() {
            let method = PaymentMethodFactory::create(kind.as_str()).unwrap();
            assert_eq!(method.method_name(), kind.as_str());
        }
    }

    #[test]
    fn test_build_with_own_credentials() {
        let method = PaymentMethodFactory::build(PaymentCredentials::Pix {
            key: "+55 11 91234-5678".into(),
        })
        .unwrap();

        assert_eq!(method.method_name(), "pix");
    }

    #[test]
    fn test_build_rejects_bad_card() {
        let err = PaymentMethodFactory::build(PaymentCredentials::Card {
            number: "4242".into(),
            holder: "Maria Silva".into(),
        })
        .unwrap_err();

        assert!(matches!(err, CheckoutError::MalformedCardNumber { .. }));
    }

    #[test]
    fn test_credentials_know_their_kind() {
        let creds = PaymentCredentials::Boleto {
            tax_id: DEMO_BOLETO_TAX_ID.into(),
        };
        assert_eq!(creds.kind(), PaymentKind::Boleto);
    }
}
