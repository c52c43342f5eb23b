//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Route and completion settings
    pub route: RouteSettings,
    /// Live-scan settings
    pub scanner: ScannerSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Route and completion configuration.
#[derive(Debug, Clone)]
pub struct RouteSettings {
    /// Simulated confirmation latency in milliseconds.
    pub confirm_delay_ms: u64,
}

/// Live-scan configuration.
#[derive(Debug, Clone)]
pub struct ScannerSettings {
    /// Interval between decode attempts in milliseconds (minimum 1).
    pub frame_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path.
    pub file: PathBuf,
}
