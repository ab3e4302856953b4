//! Query input and output types.

use serde::Serialize;
use thiserror::Error;

use super::cursor::CursorParseError;
use crate::coord::CoordError;
use crate::coverage::CoverageError;
use crate::geohash::{GeohashError, MAX_PRECISION};
use crate::proximity::{PrecisionError, ProximityTier};
use crate::store::{IndexedEntity, StoreError};

/// What to search: an explicit radius or a named tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchArea {
    /// Radius in meters
    Radius(f64),
    /// Configured tier radius
    Tier(ProximityTier),
}

impl From<ProximityTier> for SearchArea {
    fn from(tier: ProximityTier) -> Self {
        SearchArea::Tier(tier)
    }
}

impl From<f64> for SearchArea {
    fn from(radius_m: f64) -> Self {
        SearchArea::Radius(radius_m)
    }
}

/// One ranked result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    /// The matching entity
    pub entity: IndexedEntity,
    /// Great-circle distance from the query center, in meters
    pub distance_m: f64,
}

/// A page of results ordered by ascending distance, ties broken by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Results on this page
    pub hits: Vec<Hit>,
    /// Cursor for the next page, `None` on the last page
    pub next_cursor: Option<String>,
    /// Total entities within the radius, across all pages
    pub total: usize,
}

/// Errors returned by [`super::ProximityIndex`].
///
/// None of these are retried internally. A failed prefix lookup fails the
/// whole query; a partial page is never returned.
#[derive(Debug, Error)]
pub enum ProximityError {
    /// Latitude or longitude out of range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordError),

    /// Geohash contains a character outside the alphabet
    #[error("Invalid geohash character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Geohash precision exceeds the supported maximum
    #[error("Invalid geohash precision: {0} (must be at most {})", MAX_PRECISION)]
    InvalidPrecision(usize),

    /// Radius is zero, negative or not finite
    #[error("Invalid radius: {0} m")]
    InvalidRadius(f64),

    /// Page size is zero or above the configured maximum
    #[error("Invalid page size: {requested} (must be between 1 and {max})")]
    InvalidPageSize { requested: usize, max: usize },

    /// Cursor is not one this index produced
    #[error(transparent)]
    InvalidCursor(#[from] CursorParseError),

    /// A store lookup failed
    #[error("Store lookup for prefix '{prefix}' failed: {source}")]
    StoreUnavailable {
        prefix: String,
        #[source]
        source: StoreError,
    },

    /// The caller cancelled the query
    #[error("Query cancelled")]
    Cancelled,
}

impl From<PrecisionError> for ProximityError {
    fn from(err: PrecisionError) -> Self {
        match err {
            PrecisionError::InvalidRadius(radius) => ProximityError::InvalidRadius(radius),
        }
    }
}

impl From<GeohashError> for ProximityError {
    fn from(err: GeohashError) -> Self {
        match err {
            GeohashError::InvalidCharacter { character, position } => {
                ProximityError::InvalidCharacter { character, position }
            }
            GeohashError::InvalidPrecision(precision) => ProximityError::InvalidPrecision(precision),
        }
    }
}

impl From<CoverageError> for ProximityError {
    fn from(err: CoverageError) -> Self {
        match err {
            CoverageError::Precision(err) => err.into(),
            CoverageError::Geohash(err) => err.into(),
        }
    }
}
