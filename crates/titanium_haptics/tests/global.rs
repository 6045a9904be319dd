use std::sync::{Arc, Mutex};

use titanium_haptics::{haptics, init, HapticEvent, Haptics, VibrationDriver, Waveform};

#[derive(Default)]
struct RecordingDriver {
    played: Mutex<Vec<Waveform>>,
}

impl VibrationDriver for RecordingDriver {
    fn vibrate(&self, waveform: Waveform) {
        self.played.lock().unwrap().push(waveform);
    }
}

// The global installs once per process, so the whole lifecycle lives in
// a single test.
#[test]
fn global_dispatcher_degrades_then_first_install_wins() {
    // Before installation: disabled fallback, calls are no-ops
    assert!(!haptics().is_available());
    haptics().success();
    haptics().trigger(HapticEvent::Error);

    let driver = Arc::new(RecordingDriver::default());
    init(Haptics::new(driver.clone()));
    assert!(haptics().is_available());

    haptics().nfc_success();
    assert_eq!(
        *driver.played.lock().unwrap(),
        vec![Waveform::Pattern(&[10, 30, 20])]
    );

    // A second install is ignored
    init(Haptics::disabled());
    assert!(haptics().is_available());

    haptics().light();
    assert_eq!(driver.played.lock().unwrap().len(), 2);
}
