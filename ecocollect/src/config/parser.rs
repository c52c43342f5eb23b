//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the
/// INI. Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [route] section
    if let Some(section) = ini.section(Some("route")) {
        if let Some(v) = section.get("confirm_delay_ms") {
            config.route.confirm_delay_ms =
                parse_millis("route", "confirm_delay_ms", v, 0)?;
        }
    }

    // [scanner] section
    if let Some(section) = ini.section(Some("scanner")) {
        if let Some(v) = section.get("frame_interval_ms") {
            config.scanner.frame_interval_ms =
                parse_millis("scanner", "frame_interval_ms", v, 1)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = PathBuf::from(v);
            }
        }
    }

    Ok(config)
}

/// Parse a millisecond value with a lower bound.
fn parse_millis(section: &str, key: &str, value: &str, min: u64) -> Result<u64, ConfigFileError> {
    let invalid = || ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: format!("expected a whole number of milliseconds (minimum {})", min),
    };
    let parsed: u64 = value.trim().parse().map_err(|_| invalid())?;
    if parsed < min {
        return Err(invalid());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ini_from(content: &str) -> Ini {
        Ini::load_from_str(content).expect("test INI must parse")
    }

    #[test]
    fn test_empty_ini_yields_defaults() {
        let config = parse_ini(&ini_from("")).unwrap();
        assert_eq!(
            config.route.confirm_delay_ms,
            super::super::DEFAULT_CONFIRM_DELAY_MS
        );
    }

    #[test]
    fn test_overlays_known_keys() {
        let config = parse_ini(&ini_from(
            "[route]\nconfirm_delay_ms = 250\n\n[scanner]\nframe_interval_ms = 50\n\n[logging]\nfile = /tmp/eco.log\n",
        ))
        .unwrap();

        assert_eq!(config.route.confirm_delay_ms, 250);
        assert_eq!(config.scanner.frame_interval_ms, 50);
        assert_eq!(config.logging.file, PathBuf::from("/tmp/eco.log"));
    }

    #[test]
    fn test_non_numeric_delay_is_invalid() {
        let err = parse_ini(&ini_from("[route]\nconfirm_delay_ms = soon\n")).unwrap_err();
        match err {
            ConfigFileError::InvalidValue { section, key, value, .. } => {
                assert_eq!(section, "route");
                assert_eq!(key, "confirm_delay_ms");
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_frame_interval_is_invalid() {
        let err = parse_ini(&ini_from("[scanner]\nframe_interval_ms = 0\n")).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
    }

    #[test]
    fn test_zero_confirm_delay_is_allowed() {
        let config = parse_ini(&ini_from("[route]\nconfirm_delay_ms = 0\n")).unwrap();
        assert_eq!(config.route.confirm_delay_ms, 0);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = parse_ini(&ini_from("[route]\nunknown = 1\n[other]\nkey = 2\n")).unwrap();
        assert_eq!(
            config.route.confirm_delay_ms,
            super::super::DEFAULT_CONFIRM_DELAY_MS
        );
    }
}
