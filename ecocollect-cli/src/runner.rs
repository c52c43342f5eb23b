//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading and logging initialization to reduce
//! duplication across command handlers.

use std::time::Duration;

use ecocollect::config::ConfigFile;
use ecocollect::logging::{init_logging, LoggingGuard};
use ecocollect::reader::ScannerConfig;
use ecocollect::route::SimulatedConfirmer;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner with optional debug logging.
    ///
    /// Loads the config file (or defaults if not present) and initializes
    /// logging to the configured file plus stdout.
    ///
    /// # Arguments
    ///
    /// * `debug` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn with_debug(debug: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.file, false, debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Confirmer built from the configured confirmation delay.
    pub fn confirmer(&self, override_delay_ms: Option<u64>) -> SimulatedConfirmer {
        let delay_ms = override_delay_ms.unwrap_or(self.config.route.confirm_delay_ms);
        SimulatedConfirmer::new(Duration::from_millis(delay_ms))
    }

    /// Scanner configuration from the configured frame interval.
    pub fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig {
            frame_interval: Duration::from_millis(self.config.scanner.frame_interval_ms),
        }
    }
}
