//! Logging setup and macro re-exports

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Delegates to `env_logger`; call once from the binary before running
/// the loop. Library code only emits `log` records and never configures
/// the logger itself.
pub fn init() {
    env_logger::init();
}
