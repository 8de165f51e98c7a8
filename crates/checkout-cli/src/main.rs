//! # checkout
//!
//! Order checkout demo for checkout-rs.
//!
//! ## Usage
//!
//! ```bash
//! # Optional store overrides
//! export STORE_NAME="Loja do João"
//! export STORE_DELIVERY_FEE=10.0
//!
//! # Run the demo purchases
//! checkout
//! ```

use checkout_cli::{load_store_config, presentation};
use checkout_core::{Order, Price, StoreConfig};
use checkout_pay::PaymentMethodFactory;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Load store configuration
    let config = load_store_config()?;

    info!("Store: {}", config.name());
    info!("Delivery fee: {}", config.delivery_fee().display());

    // The process-wide config is built once and shared
    let first = StoreConfig::global();
    let second = StoreConfig::global();
    info!(
        "Global store config resolves to one instance: {}",
        std::ptr::eq(first, second)
    );

    // The three demo purchases, one per payment kind
    run_purchase(
        &config,
        "cartao",
        &[("Mouse Gamer", 89.90), ("Teclado Mecânico", 299.90)],
    )?;
    run_purchase(&config, "pix", &[("Headset", 159.90)])?;
    run_purchase(
        &config,
        "boleto",
        &[("Webcam HD", 249.90), ("Microfone USB", 179.90)],
    )?;

    Ok(())
}

/// Build an order from `items`, pay it with `kind`, print the receipt.
fn run_purchase(config: &StoreConfig, kind: &str, items: &[(&str, f64)]) -> anyhow::Result<()> {
    println!();

    let mut order = Order::new(config.currency());
    for (name, price) in items {
        order.add_item(*name, *price);
        println!(
            "+ Adicionado: {} ({})",
            name,
            Price::new(*price, config.currency()).display()
        );
    }

    let method = match PaymentMethodFactory::create(kind) {
        Ok(method) => method,
        Err(e) if e.is_caller_error() => {
            // Recoverable: a corrected kind would go through
            warn!("Skipping purchase, payment method unavailable: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    order.select_payment_method(method);

    let receipt = order.finalize_with(config)?;
    print!("{}", presentation::render_receipt(&receipt));

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🛒 checkout-rs
  ━━━━━━━━━━━━━━━━━━━━━━━
  Order checkout demo
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
