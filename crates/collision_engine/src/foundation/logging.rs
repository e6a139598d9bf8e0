//! Logging utilities and re-exports

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system for a consuming binary.
///
/// The library itself only emits through the `log` facade; whether and
/// where that output lands is the consumer's choice.
pub fn init() {
    env_logger::init();
}

/// Like [`init`], but tolerates a logger that is already installed and
/// routes output through the test harness capture. Meant for tests.
pub fn try_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
