//! # checkout-cli
//!
//! Demo driver for checkout-rs.
//!
//! This crate is the presentation layer the core deliberately does not
//! have: it loads the store configuration, walks three demonstration
//! purchases (card, PIX, boleto), and renders the receipts the core
//! returns. All printing happens here.

pub mod config;
pub mod presentation;

pub use config::load_store_config;
