//! # Order Types
//!
//! Order accumulation and finalization for checkout-rs.
//!
//! An order collects line items, holds at most one selected payment
//! method, and on finalization computes items + delivery fee and delegates
//! the charge to the method. The result is a `Receipt`: the itemized
//! breakdown plus the payment outcome, for the presentation layer to
//! render.

use crate::error::{CheckoutError, CheckoutResult};
use crate::method::{BoxedPaymentMethod, PaymentOutcome};
use crate::money::{Currency, Price};
use crate::store::StoreConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name
    pub name: String,

    /// Unit price
    pub unit_price: Price,

    /// Quantity
    pub quantity: u32,
}

impl LineItem {
    /// Create a quantity-1 line item
    pub fn new(name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Builder: set quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Calculate the total price for this line item
    pub fn total(&self) -> Price {
        Price {
            amount: self.unit_price.amount * i64::from(self.quantity),
            currency: self.unit_price.currency,
        }
    }
}

/// An in-progress purchase accumulating items and a payment selection
#[derive(Debug)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Line items, in insertion order
    line_items: Vec<LineItem>,

    /// Currency for every item in this order
    currency: Currency,

    /// Chosen payment method, unset until selected
    payment_method: Option<BoxedPaymentMethod>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new empty order with a generated ID
    pub fn new(currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            line_items: Vec::new(),
            currency,
            payment_method: None,
            created_at: Utc::now(),
        }
    }

    /// Append a quantity-1 line item. `price` is a decimal amount in the
    /// order's currency; the caller is expected to pass a non-negative
    /// value.
    pub fn add_item(&mut self, name: impl Into<String>, price: f64) {
        self.add_line_item(LineItem::new(name, Price::new(price, self.currency)));
    }

    /// Append a line item
    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    /// Set or replace the payment method. May be called multiple times;
    /// the last selection wins.
    pub fn select_payment_method(&mut self, method: BoxedPaymentMethod) {
        self.payment_method = Some(method);
    }

    /// Check if a payment method has been selected
    pub fn has_payment_method(&self) -> bool {
        self.payment_method.is_some()
    }

    /// The accumulated line items
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Order currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of all line item totals, before the delivery fee
    pub fn subtotal(&self) -> Price {
        let amount = self.line_items.iter().map(|item| item.total().amount).sum();
        Price {
            amount,
            currency: self.currency,
        }
    }

    /// Check if the order has no items
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Get item count
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Finalize against the process-wide store configuration.
    ///
    /// See [`Order::finalize_with`].
    pub fn finalize(&self) -> CheckoutResult<Receipt> {
        self.finalize_with(StoreConfig::global())
    }

    /// Finalize the order: compute `subtotal + delivery fee` and delegate
    /// the charge to the selected payment method.
    ///
    /// Fails with `NoPaymentMethodSelected` before any payment action if
    /// no method has been chosen. Totals are computed from current state
    /// at call time, never cached; calling again recomputes.
    pub fn finalize_with(&self, config: &StoreConfig) -> CheckoutResult<Receipt> {
        let method = self
            .payment_method
            .as_deref()
            .ok_or_else(|| CheckoutError::NoPaymentMethodSelected {
                order_id: self.id.clone(),
            })?;

        let subtotal = self.subtotal();
        let delivery_fee = config.delivery_fee();
        let total = Price {
            amount: subtotal.amount + delivery_fee.amount,
            currency: self.currency,
        };

        let outcome = method.process(total.clone());

        Ok(Receipt {
            order_id: self.id.clone(),
            store_name: config.name().to_string(),
            items: self.line_items.clone(),
            subtotal,
            delivery_fee,
            total,
            outcome,
            created_at: Utc::now(),
        })
    }
}

/// The structured result of finalizing an order: the itemized breakdown
/// (products subtotal, delivery fee, total) plus the payment outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Our internal order ID
    pub order_id: String,

    /// Store the order was charged through
    pub store_name: String,

    /// The items as charged
    pub items: Vec<LineItem>,

    /// Sum of item totals
    pub subtotal: Price,

    /// Delivery fee from the store configuration
    pub delivery_fee: Price,

    /// subtotal + delivery fee
    pub total: Price,

    /// What the payment method reported
    pub outcome: PaymentOutcome,

    /// Finalization timestamp
    pub created_at: DateTime<Utc>,
}
