//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[route]
; Simulated confirmation latency in milliseconds.
; Stands in for the backend round trip while no backend is wired in.
confirm_delay_ms = {}

[scanner]
; Interval between decode attempts during a live scan, in milliseconds.
; Lower values decode faster at the cost of CPU (minimum 1).
frame_interval_ms = {}

[logging]
; Log file path. The file is cleared at the start of each session.
file = {}
"#,
        config.route.confirm_delay_ms,
        config.scanner.frame_interval_ms,
        config.logging.file.display(),
    )
}
