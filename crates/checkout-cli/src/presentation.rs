//! # Receipt Rendering
//!
//! Turns the structured values the core returns into the text the demo
//! prints. Rendering is pure so it can be tested without capturing
//! stdout.

use checkout_core::{LineItem, PaymentOutcome, Receipt};
use std::fmt::Write;

const RULE: &str = "========================================";

/// Render the full receipt: store header, items, breakdown, outcome.
pub fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {}", receipt.store_name);
    let _ = writeln!(out, "{RULE}");

    for item in &receipt.items {
        let _ = writeln!(out, "{}", render_line_item(item));
    }

    let _ = writeln!(out, "Produtos: {}", receipt.subtotal.display());
    let _ = writeln!(out, "Entrega:  {}", receipt.delivery_fee.display());
    let _ = writeln!(out, "TOTAL:    {}", receipt.total.display());
    let _ = writeln!(out, "{RULE}");
    out.push_str(&render_outcome(&receipt.outcome));

    out
}

/// One line per item, with the quantity spelled out when it matters.
pub fn render_line_item(item: &LineItem) -> String {
    if item.quantity > 1 {
        format!(
            "  {} x{}  {}",
            item.name,
            item.quantity,
            item.total().display()
        )
    } else {
        format!("  {}  {}", item.name, item.unit_price.display())
    }
}

/// Render the payment confirmation line.
pub fn render_outcome(outcome: &PaymentOutcome) -> String {
    let mark = if outcome.succeeded { "✓" } else { "✗" };
    format!("{} {}\n", mark, outcome.description)
}
