//! # Store Configuration
//!
//! Store-level settings for checkout-rs: display name, currency, and the
//! delivery fee applied to every order. Immutable after creation.
//!
//! Construction is explicit (`new`, `from_env`, `from_toml`) so callers can
//! inject the configuration they want. `StoreConfig::global()` additionally
//! exposes one process-wide instance, lazily built from the defaults on
//! first access, for callers that do not thread a configuration through.

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::{Currency, Price};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

/// Store name used when nothing else is configured
pub const DEFAULT_STORE_NAME: &str = "Loja do João";

/// Delivery fee (in decimal units) used when nothing else is configured
pub const DEFAULT_DELIVERY_FEE: f64 = 10.0;

static GLOBAL: OnceLock<StoreConfig> = OnceLock::new();

/// Store-level configuration
///
/// Fields are private: once a `StoreConfig` exists its values are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    name: String,
    currency: Currency,
    delivery_fee: Price,
}

impl StoreConfig {
    /// Create a config with explicit values. `delivery_fee` is a decimal
    /// amount in `currency`.
    pub fn new(name: impl Into<String>, currency: Currency, delivery_fee: f64) -> Self {
        Self {
            name: name.into(),
            currency,
            delivery_fee: Price::new(delivery_fee, currency),
        }
    }

    /// The process-wide configuration, built with the store defaults on
    /// first access. Every call, from anywhere, returns the identical
    /// instance; `OnceLock` guards the first construction against races.
    pub fn global() -> &'static StoreConfig {
        GLOBAL.get_or_init(StoreConfig::default)
    }

    /// Load configuration from environment variables.
    ///
    /// Optional env vars (defaults apply when missing or unparseable):
    /// - `STORE_NAME`
    /// - `STORE_CURRENCY`
    /// - `STORE_DELIVERY_FEE`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let name = env::var("STORE_NAME").unwrap_or_else(|_| DEFAULT_STORE_NAME.to_string());
        let currency = env::var("STORE_CURRENCY")
            .ok()
            .and_then(|c| c.parse().ok())
            .unwrap_or_default();
        let delivery_fee = env::var("STORE_DELIVERY_FEE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DELIVERY_FEE);

        Self::new(name, currency, delivery_fee)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(toml_str: &str) -> CheckoutResult<Self> {
        let raw: RawStoreConfig = toml::from_str(toml_str)
            .map_err(|e| CheckoutError::Configuration(format!("invalid store config: {e}")))?;
        Ok(Self::new(raw.name, raw.currency, raw.delivery_fee))
    }

    /// Store display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency the store charges in
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Delivery fee added to every order total
    pub fn delivery_fee(&self) -> Price {
        self.delivery_fee.clone()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_NAME, Currency::BRL, DEFAULT_DELIVERY_FEE)
    }
}

/// On-disk shape of the store config file
#[derive(Debug, Serialize, Deserialize)]
struct RawStoreConfig {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    currency: Currency,
    #[serde(default = "default_fee")]
    delivery_fee: f64,
}

fn default_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_fee() -> f64 {
    DEFAULT_DELIVERY_FEE
}
