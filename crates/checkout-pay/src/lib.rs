//! # checkout-pay
//!
//! Payment method implementations for checkout-rs.
//!
//! This crate provides the three payment behaviors the store accepts and
//! the factory that builds them:
//!
//! 1. **CardPayment** - credit card with a masked confirmation
//! 2. **PixPayment** - instant settlement against a PIX key
//! 3. **BoletoPayment** - bank slip with a 3-day due window
//!
//! Every method is an always-approve stub: there is no gateway behind
//! them, and the `succeeded` flag on the outcome is the seam where real
//! authorization logic would go.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_pay::PaymentMethodFactory;
//!
//! // By kind, with the demo credentials
//! let method = PaymentMethodFactory::create("pix")?;
//!
//! // Or with your own credentials
//! use checkout_pay::PaymentCredentials;
//! let method = PaymentMethodFactory::build(PaymentCredentials::Pix {
//!     key: "maria@email.com".into(),
//! })?;
//!
//! let outcome = method.process(total);
//! ```

pub mod boleto;
pub mod card;
pub mod factory;
pub mod pix;

// Re-exports
pub use boleto::{BoletoPayment, BOLETO_DUE_DAYS, BOLETO_SETTLEMENT_CODE};
pub use card::{CardPayment, MIN_CARD_DIGITS};
pub use factory::{
    PaymentCredentials, PaymentKind, PaymentMethodFactory, DEMO_BOLETO_TAX_ID, DEMO_CARD_HOLDER,
    DEMO_CARD_NUMBER, DEMO_PIX_KEY,
};
pub use pix::PixPayment;
