//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and index creation
//! so command handlers stay small.

use tracing::info;

use geotier::config::ConfigFile;
use geotier::index::ProximityIndex;
use geotier::logging::{init_logging, LoggingGuard};
use geotier::store::GeohashStore;

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
    /// Create a runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - Enables debug-level logging regardless of the config file
    /// * `verbose` - Mirrors log output to stderr
    pub fn new(debug_mode: bool, verbose: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| ".".into());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| geotier::config::DEFAULT_LOG_FILE_NAME.to_string());

        let debug = debug_mode || config.logging.debug;
        let logging_guard = init_logging(&log_dir, &log_file, verbose, debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("geotier v{}", geotier::VERSION);
        info!("geotier CLI: {} command", command);
    }

    /// Build a proximity index over `store` using the loaded configuration.
    pub fn create_index<S: GeohashStore>(&self, store: S) -> Result<ProximityIndex<S>, CliError> {
        let index = ProximityIndex::with_config(store, self.config.to_proximity_config())?;
        info!(
            max_concurrent_lookups = index.config().max_concurrent_lookups(),
            coverage_margin = index.config().coverage_margin(),
            "index created"
        );
        Ok(index)
    }

    /// Build a single-threaded tokio runtime for one query.
    pub fn runtime(&self) -> Result<tokio::runtime::Runtime, CliError> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CliError::Runtime)
    }
}
