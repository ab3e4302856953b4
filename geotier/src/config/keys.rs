//! Configuration key access and validation.
//!
//! Every setting in `config.ini` is addressable as `section.key`. The INI
//! parser and the CLI `config get/set` commands both go through
//! [`ConfigKey`], so a value accepted in one place is accepted in the other.

use std::str::FromStr;

use thiserror::Error;

use super::defaults::MAX_COVERAGE_MARGIN;
use super::distance::{format_distance, parse_distance};
use super::parser::{expand_tilde, parse_bool};
use super::settings::ConfigFile;
use super::writer::path_to_string;
use crate::proximity::ProximityTier;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Proximity settings
    ProximityCoverageMargin,
    ProximityMaxConcurrentLookups,
    ProximityDefaultPageSize,
    ProximityMaxPageSize,

    // Tier radii
    TiersConnected,
    TiersRadius5Km,
    TiersCity,
    TiersState,
    TiersCountry,

    // Logging settings
    LoggingFile,
    LoggingDebug,
}

const ALL_KEYS: [ConfigKey; 11] = [
    ConfigKey::ProximityCoverageMargin,
    ConfigKey::ProximityMaxConcurrentLookups,
    ConfigKey::ProximityDefaultPageSize,
    ConfigKey::ProximityMaxPageSize,
    ConfigKey::TiersConnected,
    ConfigKey::TiersRadius5Km,
    ConfigKey::TiersCity,
    ConfigKey::TiersState,
    ConfigKey::TiersCountry,
    ConfigKey::LoggingFile,
    ConfigKey::LoggingDebug,
];

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_KEYS
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "tiers.city").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ProximityCoverageMargin => "proximity.coverage_margin",
            ConfigKey::ProximityMaxConcurrentLookups => "proximity.max_concurrent_lookups",
            ConfigKey::ProximityDefaultPageSize => "proximity.default_page_size",
            ConfigKey::ProximityMaxPageSize => "proximity.max_page_size",
            ConfigKey::TiersConnected => "tiers.connected",
            ConfigKey::TiersRadius5Km => "tiers.radius_5km",
            ConfigKey::TiersCity => "tiers.city",
            ConfigKey::TiersState => "tiers.state",
            ConfigKey::TiersCountry => "tiers.country",
            ConfigKey::LoggingFile => "logging.file",
            ConfigKey::LoggingDebug => "logging.debug",
        }
    }

    /// Get the section name (e.g., "tiers").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "city").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// The tier whose radius this key sets, if any.
    pub fn tier(&self) -> Option<ProximityTier> {
        match self {
            ConfigKey::TiersConnected => Some(ProximityTier::Connected),
            ConfigKey::TiersRadius5Km => Some(ProximityTier::Radius5Km),
            ConfigKey::TiersCity => Some(ProximityTier::City),
            ConfigKey::TiersState => Some(ProximityTier::State),
            ConfigKey::TiersCountry => Some(ProximityTier::Country),
            _ => None,
        }
    }

    /// The key holding a tier's radius.
    pub fn for_tier(tier: ProximityTier) -> Self {
        match tier {
            ProximityTier::Connected => ConfigKey::TiersConnected,
            ProximityTier::Radius5Km => ConfigKey::TiersRadius5Km,
            ProximityTier::City => ConfigKey::TiersCity,
            ProximityTier::State => ConfigKey::TiersState,
            ProximityTier::Country => ConfigKey::TiersCountry,
        }
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        if let Some(tier) = self.tier() {
            return format_distance(config.tiers.radii.radius(tier));
        }
        match self {
            ConfigKey::ProximityCoverageMargin => config.proximity.coverage_margin.to_string(),
            ConfigKey::ProximityMaxConcurrentLookups => {
                config.proximity.max_concurrent_lookups.to_string()
            }
            ConfigKey::ProximityDefaultPageSize => config.proximity.default_page_size.to_string(),
            ConfigKey::ProximityMaxPageSize => config.proximity.max_page_size.to_string(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
            ConfigKey::LoggingDebug => config.logging.debug.to_string(),
            _ => String::new(),
        }
    }

    /// Parse `value` and store it in `config`.
    ///
    /// The config is left unchanged when the value is rejected.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        if let Some(tier) = self.tier() {
            let meters = parse_distance(value).map_err(|_| {
                self.rejected("expected a positive distance like '30km' or '5000m'")
            })?;
            config.tiers.radii = config.tiers.radii.with_radius(tier, meters);
            return Ok(());
        }

        match self {
            ConfigKey::ProximityCoverageMargin => {
                let margin: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| self.rejected("must be a number"))?;
                if !(0.0..=MAX_COVERAGE_MARGIN).contains(&margin) {
                    return Err(self.rejected("must be between 0.0 and 1.0"));
                }
                config.proximity.coverage_margin = margin;
            }
            ConfigKey::ProximityMaxConcurrentLookups => {
                config.proximity.max_concurrent_lookups = self.positive(value)?;
            }
            ConfigKey::ProximityDefaultPageSize => {
                config.proximity.default_page_size = self.positive(value)?;
            }
            ConfigKey::ProximityMaxPageSize => {
                config.proximity.max_page_size = self.positive(value)?;
            }
            ConfigKey::LoggingFile => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(self.rejected("must not be empty"));
                }
                config.logging.file = expand_tilde(value);
            }
            ConfigKey::LoggingDebug => {
                config.logging.debug = parse_bool(value);
            }
            _ => {}
        }
        Ok(())
    }

    /// Check a value without applying it.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.set(&mut ConfigFile::default(), value)
    }

    /// Get all configuration keys in file order.
    pub fn all() -> &'static [ConfigKey] {
        &ALL_KEYS
    }

    fn positive(&self, value: &str) -> Result<usize, ConfigKeyError> {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| self.rejected("must be a positive integer"))
    }

    fn rejected(&self, reason: &str) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "tiers.city".parse::<ConfigKey>().unwrap(),
            ConfigKey::TiersCity
        );
        assert_eq!(
            "PROXIMITY.Max_Page_Size".parse::<ConfigKey>().unwrap(),
            ConfigKey::ProximityMaxPageSize
        );
        assert!(matches!(
            "cache.directory".parse::<ConfigKey>(),
            Err(ConfigKeyError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_key_name_parts() {
        let key = ConfigKey::TiersRadius5Km;
        assert_eq!(key.section(), "tiers");
        assert_eq!(key.key_name(), "radius_5km");
    }

    #[test]
    fn test_names_round_trip() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_tier_keys_match_tiers() {
        for tier in ProximityTier::ALL {
            assert_eq!(ConfigKey::for_tier(tier).tier(), Some(tier));
        }
        assert_eq!(ConfigKey::LoggingDebug.tier(), None);
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();
        assert_eq!(ConfigKey::TiersCity.get(&config), "30km");
        assert_eq!(ConfigKey::ProximityDefaultPageSize.get(&config), "20");
        assert_eq!(ConfigKey::LoggingDebug.get(&config), "false");
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();

        ConfigKey::TiersState.set(&mut config, "250km").unwrap();
        assert_eq!(config.tiers.radii.radius(ProximityTier::State), 250_000.0);

        ConfigKey::ProximityCoverageMargin
            .set(&mut config, "0.2")
            .unwrap();
        assert_eq!(config.proximity.coverage_margin, 0.2);

        ConfigKey::LoggingFile
            .set(&mut config, "/tmp/geotier.log")
            .unwrap();
        assert_eq!(config.logging.file, PathBuf::from("/tmp/geotier.log"));

        ConfigKey::LoggingDebug.set(&mut config, "yes").unwrap();
        assert!(config.logging.debug);
    }

    #[test]
    fn test_set_invalid_value_leaves_config_unchanged() {
        let mut config = ConfigFile::default();
        let before = config.clone();

        assert!(ConfigKey::TiersCity.set(&mut config, "far").is_err());
        assert!(ConfigKey::ProximityMaxPageSize.set(&mut config, "0").is_err());
        assert!(ConfigKey::ProximityCoverageMargin
            .set(&mut config, "1.5")
            .is_err());
        assert!(ConfigKey::LoggingFile.set(&mut config, "  ").is_err());

        assert_eq!(config, before);
    }

    #[test]
    fn test_validate_reports_key() {
        let err = ConfigKey::ProximityMaxConcurrentLookups
            .validate("-3")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for proximity.max_concurrent_lookups: must be a positive integer"
        );
    }

    #[test]
    fn test_all_keys() {
        let keys = ConfigKey::all();
        assert_eq!(keys.len(), 11);
        assert!(keys.contains(&ConfigKey::TiersConnected));
        assert_eq!(keys.iter().filter(|k| k.section() == "tiers").count(), 5);
    }
}
