//! Global token table access
//!
//! The table is immutable once built, so the global is a lazily
//! initialized static rather than mutable state. Every call returns the
//! same `&'static Tokens` and components may hold the reference for as
//! long as they like.

use std::sync::OnceLock;

use crate::tokens::Tokens;

/// Global token table instance
static TOKENS: OnceLock<Tokens> = OnceLock::new();

/// Get the global token table, building it on first use
pub fn tokens() -> &'static Tokens {
    TOKENS.get_or_init(|| {
        tracing::debug!("initializing Titanium token table");
        Tokens::titanium()
    })
}
