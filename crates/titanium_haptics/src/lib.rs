//! Titanium Haptic Feedback
//!
//! Semantic haptic events for the Titanium design system, dispatched to
//! a pluggable platform vibration driver.
//!
//! # Overview
//!
//! - **Semantic events**: Components say what happened ([`HapticEvent`]);
//!   the waveform behind each event is part of the design language
//! - **Pluggable drivers**: One [`VibrationDriver`] per platform, with
//!   the dispatcher itself platform-free
//! - **Graceful degradation**: No driver means silent no-ops, never
//!   errors or panics
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use titanium_haptics::{HapticEvent, Haptics, VibrationDriver, Waveform};
//!
//! struct LogDriver;
//!
//! impl VibrationDriver for LogDriver {
//!     fn vibrate(&self, waveform: Waveform) {
//!         println!("vibrate {waveform:?}");
//!     }
//! }
//!
//! let haptics = Haptics::new(Arc::new(LogDriver));
//! haptics.success();
//! haptics.trigger(HapticEvent::NfcSuccess);
//! ```
//!
//! Apps that want feedback from anywhere install a global dispatcher
//! once at startup:
//!
//! ```
//! use titanium_haptics::{haptics, init, Haptics};
//!
//! init(Haptics::disabled());
//! haptics().light();
//! ```

pub mod dispatcher;
pub mod driver;
pub mod pattern;
pub mod state;

// Re-export commonly used items
pub use dispatcher::Haptics;
pub use driver::VibrationDriver;
pub use pattern::{HapticEvent, Waveform};
pub use state::{haptics, init};
