//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`coverage`] - Prefixes scanned for a search area
//! - [`geohash`] - Encode, decode and neighbor inspection
//! - [`query`] - Nearby search over a JSON entity file

pub mod common;
pub mod config;
pub mod coverage;
pub mod geohash;
pub mod query;
