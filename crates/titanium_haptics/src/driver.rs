//! Platform vibration driver interface

use crate::pattern::Waveform;

/// Hardware vibration backend
///
/// One implementation per platform keeps the dispatcher platform-free.
/// Drivers are shared across threads behind an `Arc`, so implementations
/// synchronize internally if they carry state.
pub trait VibrationDriver: Send + Sync {
    /// Play a waveform, replacing whatever is currently playing
    ///
    /// A zero-duration waveform cancels the active vibration, matching
    /// platform vibrate API semantics.
    fn vibrate(&self, waveform: Waveform);
}
