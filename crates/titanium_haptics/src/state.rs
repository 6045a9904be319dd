//! Global haptics dispatcher
//!
//! Feedback helpers are called from deep inside component code, so the
//! dispatcher is reachable as a global. Before [`init`] runs, lookups
//! fall back to a disabled dispatcher rather than panicking; a missed
//! buzz during startup is not worth crashing over.

use std::sync::OnceLock;

use crate::dispatcher::Haptics;

/// Global dispatcher instance
static HAPTICS: OnceLock<Haptics> = OnceLock::new();

/// Fallback for lookups that happen before installation
static FALLBACK: Haptics = Haptics::disabled();

/// Install the global dispatcher (call once at app startup)
///
/// The first installation wins; later calls are ignored.
pub fn init(dispatcher: Haptics) {
    tracing::debug!(
        "installing global haptics dispatcher (available: {})",
        dispatcher.is_available()
    );
    let _ = HAPTICS.set(dispatcher);
}

/// Get the global dispatcher
pub fn haptics() -> &'static Haptics {
    HAPTICS.get().unwrap_or(&FALLBACK)
}
