//! Configuration for geotier components.
//!
//! This module provides structured configuration objects:
//!
//! - [`ProximityConfig`]: runtime settings for the proximity index
//! - [`ConfigFile`]: the user's `~/.geotier/config.ini`, loaded with defaults
//! - [`ConfigKey`]: `section.key` access to individual settings
//!
//! # Example
//!
//! ```
//! use geotier::config::{ConfigFile, ProximityConfig};
//!
//! let config = ConfigFile::default().to_proximity_config();
//! assert_eq!(config, ProximityConfig::default());
//! ```

mod defaults;
mod distance;
mod file;
mod keys;
mod parser;
mod proximity;
mod settings;
mod writer;

pub use defaults::{
    default_log_file, DEFAULT_COVERAGE_MARGIN, DEFAULT_LOG_FILE_NAME,
    DEFAULT_MAX_CONCURRENT_LOOKUPS, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE,
    MAX_COVERAGE_MARGIN,
};
pub use distance::{format_distance, parse_distance, DistanceParseError};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use proximity::ProximityConfig;
pub use settings::{ConfigFile, LoggingSettings, ProximitySettings, TierSettings};
