//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::settings::*;

// Domain defaults live next to the components that own them; the
// configuration layer re-exports them as the single surface callers use.
pub use crate::reader::DEFAULT_FRAME_INTERVAL_MS;
pub use crate::route::DEFAULT_CONFIRM_DELAY_MS;

/// Default log file, relative to the working directory.
pub fn default_log_file() -> PathBuf {
    PathBuf::from("logs").join("ecocollect.log")
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            route: RouteSettings::default(),
            scanner: ScannerSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            confirm_delay_ms: DEFAULT_CONFIRM_DELAY_MS,
        }
    }
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}
