//! # Receipt Rendering
//!
//! ```text
//!   Your Meal:
//!   Item: Veg Burger, Packing: Wrapper, Price: 25.00
//!   Item: Coke, Packing: Bottle, Price: 30.00
//!   Total Cost: 55.00
//! ```

use std::fmt::Write as _;
use std::io::Write;

use meal_core::Receipt;

use crate::config::{KioskConfig, OutputFormat};
use crate::error::KioskResult;

/// Renders the plain text receipt.
pub fn render_text(receipt: &Receipt, config: &KioskConfig) -> String {
    let mut out = String::from("\nYour Meal:\n");
    for line in &receipt.lines {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "Item: {}, Packing: {}, Price: {}",
            line.name,
            line.packaging.label(),
            config.format_currency(line.price)
        );
    }
    let _ = writeln!(out, "Total Cost: {}", config.format_currency(receipt.total));
    out
}

/// Renders the receipt as pretty JSON.
pub fn render_json(receipt: &Receipt) -> serde_json::Result<String> {
    serde_json::to_string_pretty(receipt)
}

/// Writes the receipt in the configured format.
pub fn write_receipt<W: Write>(out: &mut W, receipt: &Receipt, config: &KioskConfig) -> KioskResult<()> {
    match config.output {
        OutputFormat::Text => out.write_all(render_text(receipt, config).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_json(receipt)?)?,
    }
    out.flush()?;
    Ok(())
}
