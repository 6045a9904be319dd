//! Observe haptic dispatch as log output
//!
//! Run with: cargo run -p titanium_haptics --example feedback_log
//!
//! Installs a driver that logs instead of vibrating, then walks through
//! the events a contactless payment flow would fire.

use std::sync::Arc;

use titanium_haptics::{haptics, init, HapticEvent, Haptics, VibrationDriver, Waveform};

/// Driver that writes waveforms to the log instead of the motor
struct LogDriver;

impl VibrationDriver for LogDriver {
    fn vibrate(&self, waveform: Waveform) {
        match waveform {
            Waveform::Once(ms) => tracing::info!("vibrate {ms}ms"),
            Waveform::Pattern(segments) => tracing::info!("vibrate pattern {segments:?}"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    init(Haptics::new(Arc::new(LogDriver)));

    // Tap to pay, wait, settle
    let flow = [
        HapticEvent::Navigation,
        HapticEvent::NfcSuccess,
        HapticEvent::Processing,
        HapticEvent::Success,
    ];
    for event in flow {
        tracing::info!("event '{}'", event.id());
        haptics().trigger(event);
    }

    // User backs out of the receipt screen
    haptics().stop();
}
