//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::settings::*;
use crate::proximity::TierRadii;

pub use crate::coverage::DEFAULT_COVERAGE_MARGIN;

/// Default number of concurrent store lookups (one per cell of a 3×3 block).
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 9;

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default upper bound on requested page size.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 500;

/// Largest accepted coverage margin.
pub const MAX_COVERAGE_MARGIN: f64 = 1.0;

/// Default log file name.
pub const DEFAULT_LOG_FILE_NAME: &str = "geotier.log";

/// Default log file path (~/.geotier/geotier.log).
pub fn default_log_file() -> PathBuf {
    super::file::config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            proximity: ProximitySettings {
                coverage_margin: DEFAULT_COVERAGE_MARGIN,
                max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
                default_page_size: DEFAULT_PAGE_SIZE,
                max_page_size: DEFAULT_MAX_PAGE_SIZE,
            },
            tiers: TierSettings {
                radii: TierRadii::default(),
            },
            logging: LoggingSettings {
                file: default_log_file(),
                debug: false,
            },
        }
    }
}
