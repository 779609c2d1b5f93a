//! OS color mode detection with an overridable detector.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::palette::Mode;

type ModeDetector = fn() -> Mode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light
/// or dark mode.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the user's preferred color mode.
///
/// Defaults to asking the OS; [`set_mode_detector`] replaces the source.
pub fn detect_mode() -> Mode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> Mode {
    match detect_os_mode() {
        OsMode::Dark => Mode::Dark,
        OsMode::Light => Mode::Light,
    }
}
