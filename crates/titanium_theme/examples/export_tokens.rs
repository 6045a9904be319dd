//! Dump the complete token table as JSON
//!
//! Run with: cargo run -p titanium_theme --example export_tokens
//!
//! The output is the interchange form consumed by design tooling and
//! non-Rust platform targets.

use titanium_theme::tokens;

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let json = serde_json::to_string_pretty(tokens())?;
    println!("{json}");
    Ok(())
}
