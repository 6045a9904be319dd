//! Vibration waveforms and the semantic events that map to them
//!
//! Events name what happened in the interface; the waveform behind each
//! one is a fixed part of the design language, tuned so that related
//! events feel related under the finger.

/// A vibration waveform
///
/// `Once` is a single buzz. `Pattern` alternates vibrate and pause
/// segments starting with a vibration, which is the convention every
/// platform vibration API shares. All durations are in milliseconds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Waveform {
    Once(u32),
    Pattern(&'static [u32]),
}

impl Waveform {
    /// Total time the waveform occupies, pauses included
    pub fn duration_ms(&self) -> u32 {
        match self {
            Waveform::Once(ms) => *ms,
            Waveform::Pattern(segments) => segments.iter().sum(),
        }
    }
}

/// Semantic haptic events
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum HapticEvent {
    /// Light tap for selections, toggles, and minor interactions
    Light,
    /// Medium tap for button presses and confirmations
    Medium,
    /// Heavy tap for destructive or final actions
    Heavy,
    /// Double pulse on successful completion
    Success,
    /// Triple pulse on rejection or failure
    Error,
    /// Double medium pulse for warnings
    Warning,
    /// Quick ascending pattern when a contactless read lands
    NfcSuccess,
    /// Sustained pulse when a physical card is inserted
    CardInsert,
    /// Quick descending pattern when a card is ejected
    CardEject,
    /// Triple quick pulse when the acceptor takes a bill
    BillAccepted,
    /// Slow ongoing pulse while a transaction is in flight
    Processing,
    /// Single subtle pulse on screen transitions
    Navigation,
    /// Cancels whatever is currently vibrating
    Stop,
}

impl HapticEvent {
    /// The waveform this event plays
    pub const fn waveform(self) -> Waveform {
        match self {
            HapticEvent::Light => Waveform::Once(10),
            HapticEvent::Medium => Waveform::Once(20),
            HapticEvent::Heavy => Waveform::Once(30),
            HapticEvent::Success => Waveform::Pattern(&[10, 50, 10]),
            HapticEvent::Error => Waveform::Pattern(&[30, 50, 30, 50, 30]),
            HapticEvent::Warning => Waveform::Pattern(&[20, 40, 20]),
            HapticEvent::NfcSuccess => Waveform::Pattern(&[10, 30, 20]),
            HapticEvent::CardInsert => Waveform::Pattern(&[15, 30, 25]),
            HapticEvent::CardEject => Waveform::Pattern(&[20, 30, 10]),
            HapticEvent::BillAccepted => Waveform::Pattern(&[15, 20, 15, 20, 15]),
            HapticEvent::Processing => Waveform::Pattern(&[10, 100, 10, 100, 10]),
            HapticEvent::Navigation => Waveform::Once(5),
            HapticEvent::Stop => Waveform::Once(0),
        }
    }

    /// Stable kebab-case identifier, used in logs and tooling
    pub const fn id(self) -> &'static str {
        match self {
            HapticEvent::Light => "light",
            HapticEvent::Medium => "medium",
            HapticEvent::Heavy => "heavy",
            HapticEvent::Success => "success",
            HapticEvent::Error => "error",
            HapticEvent::Warning => "warning",
            HapticEvent::NfcSuccess => "nfc-success",
            HapticEvent::CardInsert => "card-insert",
            HapticEvent::CardEject => "card-eject",
            HapticEvent::BillAccepted => "bill-accepted",
            HapticEvent::Processing => "processing",
            HapticEvent::Navigation => "navigation",
            HapticEvent::Stop => "stop",
        }
    }

    /// Every event, in catalog order
    pub fn all() -> &'static [HapticEvent] {
        const EVENTS: [HapticEvent; 13] = [
            HapticEvent::Light,
            HapticEvent::Medium,
            HapticEvent::Heavy,
            HapticEvent::Success,
            HapticEvent::Error,
            HapticEvent::Warning,
            HapticEvent::NfcSuccess,
            HapticEvent::CardInsert,
            HapticEvent::CardEject,
            HapticEvent::BillAccepted,
            HapticEvent::Processing,
            HapticEvent::Navigation,
            HapticEvent::Stop,
        ];
        &EVENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_single_taps_scale_with_weight() {
        assert_eq!(HapticEvent::Navigation.waveform(), Waveform::Once(5));
        assert_eq!(HapticEvent::Light.waveform(), Waveform::Once(10));
        assert_eq!(HapticEvent::Medium.waveform(), Waveform::Once(20));
        assert_eq!(HapticEvent::Heavy.waveform(), Waveform::Once(30));
    }

    #[test]
    fn test_patterns_start_and_end_with_vibration() {
        for event in HapticEvent::all() {
            if let Waveform::Pattern(segments) = event.waveform() {
                assert!(
                    segments.len() % 2 == 1,
                    "{} pattern should have one more vibration than pauses",
                    event.id()
                );
                assert!(segments.iter().all(|&ms| ms > 0), "{}", event.id());
            }
        }
    }

    #[test]
    fn test_stop_is_the_zero_waveform() {
        assert_eq!(HapticEvent::Stop.waveform(), Waveform::Once(0));
        assert_eq!(HapticEvent::Stop.waveform().duration_ms(), 0);
    }

    #[test]
    fn test_duration_sums_every_segment() {
        assert_eq!(HapticEvent::Light.waveform().duration_ms(), 10);
        assert_eq!(HapticEvent::Success.waveform().duration_ms(), 70);
        assert_eq!(HapticEvent::Error.waveform().duration_ms(), 190);
        assert_eq!(HapticEvent::Processing.waveform().duration_ms(), 230);
    }

    #[test]
    fn test_ids_are_unique_kebab_case() {
        let ids: Vec<&str> = HapticEvent::all().iter().map(|e| e.id()).collect();
        let unique: HashSet<&&str> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        for id in ids {
            assert!(
                id.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{id}"
            );
        }
    }
}
