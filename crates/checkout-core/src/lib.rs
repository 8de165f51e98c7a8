//! # checkout-core
//!
//! Core types and traits for the checkout-rs order engine.
//!
//! This crate provides:
//! - `PaymentMethod` trait for implementing payment behaviors
//! - `Order`, `LineItem`, and `Receipt` for the checkout flow
//! - `StoreConfig` for store-level settings (name, delivery fee)
//! - `Currency` and `Price` for exact minor-unit money arithmetic
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{Currency, Order, StoreConfig};
//! use checkout_pay::PaymentMethodFactory;
//!
//! // Store settings, injected into finalization
//! let store = StoreConfig::new("Loja do João", Currency::BRL, 10.0);
//!
//! // Build an order
//! let mut order = Order::new(store.currency());
//! order.add_item("Mouse Gamer", 89.90);
//!
//! // Pick a payment method by kind
//! order.select_payment_method(PaymentMethodFactory::create("pix")?);
//!
//! // Finalize: items + delivery fee, delegated to the chosen method
//! let receipt = order.finalize_with(&store)?;
//! assert!(receipt.outcome.succeeded);
//! ```

pub mod error;
pub mod method;
pub mod money;
pub mod order;
pub mod store;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use method::{BoxedPaymentMethod, PaymentMethod, PaymentOutcome};
pub use money::{Currency, Price};
pub use order::{LineItem, Order, Receipt};
pub use store::StoreConfig;
