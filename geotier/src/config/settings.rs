//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::proximity::TierRadii;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Query behavior
    pub proximity: ProximitySettings,
    /// Tier radii
    pub tiers: TierSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[proximity]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximitySettings {
    /// Fraction added to the radius when sizing coverage cells
    pub coverage_margin: f64,
    /// Maximum store lookups in flight per query
    pub max_concurrent_lookups: usize,
    /// Results per page when not specified
    pub default_page_size: usize,
    /// Largest allowed page size
    pub max_page_size: usize,
}

/// `[tiers]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSettings {
    /// Radius of each proximity tier
    pub radii: TierRadii,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
    /// Enable debug-level logging
    pub debug: bool,
}
