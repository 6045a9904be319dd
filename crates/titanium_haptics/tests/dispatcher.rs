use std::sync::{Arc, Mutex};

use titanium_haptics::{HapticEvent, Haptics, VibrationDriver, Waveform};

/// Driver that records waveforms instead of vibrating
#[derive(Default)]
struct RecordingDriver {
    played: Mutex<Vec<Waveform>>,
}

impl RecordingDriver {
    fn take(&self) -> Vec<Waveform> {
        std::mem::take(&mut *self.played.lock().unwrap())
    }
}

impl VibrationDriver for RecordingDriver {
    fn vibrate(&self, waveform: Waveform) {
        self.played.lock().unwrap().push(waveform);
    }
}

#[test]
fn every_event_reaches_the_driver_exactly_once() {
    let driver = Arc::new(RecordingDriver::default());
    let haptics = Haptics::new(driver.clone());

    for event in HapticEvent::all() {
        haptics.trigger(*event);
        assert_eq!(
            driver.take(),
            vec![event.waveform()],
            "event {}",
            event.id()
        );
    }
}

#[test]
fn named_shortcuts_fire_their_events_in_catalog_order() {
    let driver = Arc::new(RecordingDriver::default());
    let haptics = Haptics::new(driver.clone());

    haptics.light();
    haptics.medium();
    haptics.heavy();
    haptics.success();
    haptics.error();
    haptics.warning();
    haptics.nfc_success();
    haptics.card_insert();
    haptics.card_eject();
    haptics.bill_accepted();
    haptics.processing();
    haptics.navigation();
    haptics.stop();

    let expected: Vec<Waveform> = HapticEvent::all().iter().map(|e| e.waveform()).collect();
    assert_eq!(driver.take(), expected);
}

#[test]
fn success_and_error_play_the_authored_patterns() {
    let driver = Arc::new(RecordingDriver::default());
    let haptics = Haptics::new(driver.clone());

    haptics.success();
    assert_eq!(driver.take(), vec![Waveform::Pattern(&[10, 50, 10])]);

    haptics.error();
    assert_eq!(driver.take(), vec![Waveform::Pattern(&[30, 50, 30, 50, 30])]);
}

#[test]
fn stop_sends_the_zero_cancel() {
    let driver = Arc::new(RecordingDriver::default());
    let haptics = Haptics::new(driver.clone());

    haptics.stop();
    assert_eq!(driver.take(), vec![Waveform::Once(0)]);
}

#[test]
fn disabled_dispatcher_drops_events_silently() {
    let haptics = Haptics::disabled();
    assert!(!haptics.is_available());

    // Nothing to observe; the contract is simply that none of these panic
    for event in HapticEvent::all() {
        haptics.trigger(*event);
    }
    haptics.success();
    haptics.stop();
}

#[test]
fn availability_has_no_side_effects() {
    let driver = Arc::new(RecordingDriver::default());
    let haptics = Haptics::new(driver.clone());

    assert!(haptics.is_available());
    assert!(haptics.is_available());
    assert_eq!(driver.take(), vec![]);
}
