//! Haptic event dispatcher

use std::sync::Arc;

use crate::driver::VibrationDriver;
use crate::pattern::HapticEvent;

/// Dispatches semantic haptic events to the platform driver
///
/// Built with a driver on devices that can vibrate, or [`disabled`]
/// where the hardware or permission is missing. Triggering on a
/// disabled dispatcher is a silent no-op, so call sites never branch
/// on capability.
///
/// [`disabled`]: Haptics::disabled
#[derive(Clone, Default)]
pub struct Haptics {
    driver: Option<Arc<dyn VibrationDriver>>,
}

impl Haptics {
    /// Dispatcher backed by a platform driver
    pub fn new(driver: Arc<dyn VibrationDriver>) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    /// Dispatcher that drops every event
    pub const fn disabled() -> Self {
        Self { driver: None }
    }

    /// Whether a vibration driver is attached
    pub fn is_available(&self) -> bool {
        self.driver.is_some()
    }

    /// Fire a haptic event
    pub fn trigger(&self, event: HapticEvent) {
        let Some(driver) = &self.driver else {
            tracing::trace!("haptic '{}' dropped, no vibration driver", event.id());
            return;
        };
        tracing::trace!("haptic '{}' -> {:?}", event.id(), event.waveform());
        driver.vibrate(event.waveform());
    }

    /// Light tap - radio buttons, checkboxes, switches
    pub fn light(&self) {
        self.trigger(HapticEvent::Light);
    }

    /// Medium tap - primary buttons, confirmation actions
    pub fn medium(&self) {
        self.trigger(HapticEvent::Medium);
    }

    /// Heavy tap - destructive actions, final confirmations
    pub fn heavy(&self) {
        self.trigger(HapticEvent::Heavy);
    }

    /// Transaction success, payment complete, task done
    pub fn success(&self) {
        self.trigger(HapticEvent::Success);
    }

    /// Payment declined, invalid input, operation failed
    pub fn error(&self) {
        self.trigger(HapticEvent::Error);
    }

    /// Low balance, timeout, anything the user should look at
    pub fn warning(&self) {
        self.trigger(HapticEvent::Warning);
    }

    /// Contactless card or tag read
    pub fn nfc_success(&self) {
        self.trigger(HapticEvent::NfcSuccess);
    }

    /// Physical card insertion detected
    pub fn card_insert(&self) {
        self.trigger(HapticEvent::CardInsert);
    }

    /// Card ejected from the slot
    pub fn card_eject(&self) {
        self.trigger(HapticEvent::CardEject);
    }

    /// Cash bill accepted
    pub fn bill_accepted(&self) {
        self.trigger(HapticEvent::BillAccepted);
    }

    /// Transaction in flight, waiting on a response
    pub fn processing(&self) {
        self.trigger(HapticEvent::Processing);
    }

    /// Page transitions, screen changes
    pub fn navigation(&self) {
        self.trigger(HapticEvent::Navigation);
    }

    /// Cancel whatever is vibrating, e.g. when the user backs out
    pub fn stop(&self) {
        self.trigger(HapticEvent::Stop);
    }
}
