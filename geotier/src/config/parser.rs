//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::keys::{ConfigKey, ConfigKeyError};
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the
/// INI. Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    for key in ConfigKey::all() {
        let Some(value) = ini
            .section(Some(key.section()))
            .and_then(|section| section.get(key.key_name()))
        else {
            continue;
        };
        // An empty log file entry means "use the default"
        if *key == ConfigKey::LoggingFile && value.trim().is_empty() {
            continue;
        }
        key.set(&mut config, value).map_err(|err| {
            let reason = match err {
                ConfigKeyError::ValidationFailed { reason, .. } => reason,
                other => other.to_string(),
            };
            invalid(key.section(), key.key_name(), value, &reason)
        })?;
    }

    if config.proximity.default_page_size > config.proximity.max_page_size {
        return Err(invalid(
            "proximity",
            "default_page_size",
            &config.proximity.default_page_size.to_string(),
            "must not exceed max_page_size",
        ));
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use crate::proximity::ProximityTier;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_partial_config() {
        let config = load(
            r#"
[proximity]
max_page_size = 50
"#,
        )
        .unwrap();
        assert_eq!(config.proximity.max_page_size, 50);
        assert_eq!(config.proximity.default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.proximity.coverage_margin, DEFAULT_COVERAGE_MARGIN);
    }

    #[test]
    fn test_tier_radii() {
        let config = load(
            r#"
[tiers]
radius_5km = 4km
city = 25 km
state = 250000
country = 2000km
"#,
        )
        .unwrap();
        let radii = config.tiers.radii;
        assert_eq!(radii.radius(ProximityTier::Radius5Km), 4_000.0);
        assert_eq!(radii.radius(ProximityTier::City), 25_000.0);
        assert_eq!(radii.radius(ProximityTier::State), 250_000.0);
        assert_eq!(radii.radius(ProximityTier::Country), 2_000_000.0);
    }

    #[test]
    fn test_invalid_tier_radius() {
        let err = load(
            r#"
[tiers]
city = nowhere
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("tiers.city"));
        assert!(err.to_string().contains("30km"));
    }

    #[test]
    fn test_empty_log_file_keeps_default() {
        let config = load("[logging]\nfile =\n").unwrap();
        assert_eq!(config.logging.file, default_log_file());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = load("[proximity]\nfavourite_colour = blue\n[cache]\nsize = 1\n").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_invalid_coverage_margin() {
        assert!(load("[proximity]\ncoverage_margin = 2.5\n").is_err());
        assert!(load("[proximity]\ncoverage_margin = -0.1\n").is_err());
        assert!(load("[proximity]\ncoverage_margin = lots\n").is_err());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = load("[proximity]\ndefault_page_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("default_page_size"));
    }

    #[test]
    fn test_default_page_size_above_max_is_rejected() {
        let result = load(
            r#"
[proximity]
default_page_size = 100
max_page_size = 10
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_logging_section() {
        let config = load(
            r#"
[logging]
file = /var/log/geotier.log
debug = yes
"#,
        )
        .unwrap();
        assert_eq!(config.logging.file, PathBuf::from("/var/log/geotier.log"));
        assert!(config.logging.debug);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("ON"));
        assert!(parse_bool(" 1 "));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("nope"));
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test/path");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("test/path"));
        }

        // Non-tilde paths should be unchanged
        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));
    }
}
