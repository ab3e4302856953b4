//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use geotier::config::ConfigFileError;
use geotier::coord::CoordError;
use geotier::geohash::GeohashError;
use geotier::index::ProximityError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Coordinate out of range
    Coordinate(CoordError),
    /// Malformed geohash
    Geohash(GeohashError),
    /// Failed to read or parse the entity file
    EntityFile { path: PathBuf, reason: String },
    /// Proximity query failed
    Query(ProximityError),
    /// Failed to start the async runtime
    Runtime(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::EntityFile { .. } => {
                eprintln!();
                eprintln!("The entity file must be a JSON array such as:");
                eprintln!(r#"  [{{"id": "cafe", "lat": -23.55, "lon": -46.63}}]"#);
            }
            CliError::Query(ProximityError::InvalidCursor(_)) => {
                eprintln!();
                eprintln!("Cursors are only valid for the query that produced them.");
                eprintln!("Re-run the first page without --cursor.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Coordinate(e) => write!(f, "{}", e),
            CliError::Geohash(e) => write!(f, "{}", e),
            CliError::EntityFile { path, reason } => {
                write!(f, "Failed to load entities from '{}': {}", path.display(), reason)
            }
            CliError::Query(e) => write!(f, "Query failed: {}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Coordinate(e) => Some(e),
            CliError::Geohash(e) => Some(e),
            CliError::Query(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coordinate(e)
    }
}

impl From<GeohashError> for CliError {
    fn from(e: GeohashError) -> Self {
        CliError::Geohash(e)
    }
}

impl From<ProximityError> for CliError {
    fn from(e: ProximityError) -> Self {
        CliError::Query(e)
    }
}
