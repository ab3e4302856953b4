//! Coverage sets: the geohash prefixes that contain a search disk.
//!
//! A coverage set is the center cell plus its (up to) eight neighbors at a
//! precision coarse enough that every point within the radius falls into one
//! of them. The starting precision comes from the equator cell-size table;
//! the builder then checks the real cell geometry at the center latitude and
//! widens one character at a time until the 3×3 block is large enough.
//!
//! The check is exact on the sphere. For a disk of angular radius δ around a
//! point at latitude φ, latitudes vary by at most δ and longitudes by at most
//! `asin(sin δ / cos φ)`. When that ratio reaches 1 the disk contains a pole,
//! and no block of cells can cover it. The set then falls back to whole rows
//! of precision-1 cells spanning the disk's latitude band: the 8 cells of the
//! polar row for a disk around a pole, and all 32 (the whole globe) only when
//! the band reaches across every row.
//!
//! Coverage never under-covers. Candidates outside the true radius are
//! expected and are removed by the exact distance filter in the index.

mod set;

pub use set::CoverageSet;

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::coord::{GeoPoint, EARTH_RADIUS_M};
use crate::geohash::{decode_bounds, encode, neighbors, GeohashError, ALPHABET};
use crate::proximity::{prefix_length_for_radius, PrecisionError};

/// Default safety margin applied on top of the requested radius.
pub const DEFAULT_COVERAGE_MARGIN: f64 = 0.05;

/// Errors from coverage computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoverageError {
    /// Radius is zero, negative or not finite
    #[error(transparent)]
    Precision(#[from] PrecisionError),

    /// Geohash computation failed
    #[error(transparent)]
    Geohash(#[from] GeohashError),
}

/// Builds coverage sets for a center point and radius.
///
/// # Example
///
/// ```
/// use geotier::coord::GeoPoint;
/// use geotier::coverage::BoundingBoxQuery;
///
/// let query = BoundingBoxQuery::default();
/// let sao_paulo = GeoPoint::new(-23.5505, -46.6333).unwrap();
/// let coverage = query.coverage(&sao_paulo, 5_000.0).unwrap();
///
/// assert_eq!(coverage.precision(), 4);
/// assert_eq!(coverage.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBoxQuery {
    margin: f64,
}

impl BoundingBoxQuery {
    /// Create a builder that inflates radii by `margin` (a fraction, e.g. 0.05).
    ///
    /// Negative or non-finite margins are treated as zero.
    pub fn new(margin: f64) -> Self {
        let margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
        Self { margin }
    }

    /// Safety margin in use.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Compute the prefixes covering every point within `radius_m` of `center`.
    pub fn coverage(&self, center: &GeoPoint, radius_m: f64) -> Result<CoverageSet, CoverageError> {
        let start = prefix_length_for_radius(radius_m)?;
        let required_m = radius_m * (1.0 + self.margin);

        let Some((lat_spread, lon_spread)) = disk_spread_degrees(center, required_m) else {
            debug!(
                lat = center.latitude(),
                lon = center.longitude(),
                radius_m,
                "search disk reaches a pole or spans a hemisphere, covering its latitude band"
            );
            return Ok(latitude_band(*center, radius_m, required_m));
        };

        // Bounded by the starting precision; never more than 12 iterations
        for precision in (1..=start).rev() {
            let code = encode(center, precision)?;
            let bounds = decode_bounds(&code)?;

            if bounds.lat_span() >= lat_spread && bounds.lon_span() >= lon_spread {
                let mut prefixes = neighbors(&code)?;
                prefixes.insert(code);
                debug!(
                    precision,
                    start_precision = start,
                    prefixes = prefixes.len(),
                    radius_m,
                    "coverage computed"
                );
                return Ok(CoverageSet::new(*center, radius_m, precision, prefixes, false));
            }

            debug!(
                precision,
                lat_span = bounds.lat_span(),
                lon_span = bounds.lon_span(),
                lat_spread,
                lon_spread,
                "cell smaller than search disk, widening"
            );
        }

        debug!(radius_m, "no single-character block covers the disk, covering its latitude band");
        Ok(latitude_band(*center, radius_m, required_m))
    }
}

impl Default for BoundingBoxQuery {
    fn default() -> Self {
        Self::new(DEFAULT_COVERAGE_MARGIN)
    }
}

/// Compute coverage with the default margin.
pub fn coverage(center: &GeoPoint, radius_m: f64) -> Result<CoverageSet, CoverageError> {
    BoundingBoxQuery::default().coverage(center, radius_m)
}

/// Maximum latitude and longitude offsets (degrees) of any point in the disk.
///
/// Returns `None` when the disk contains a pole or is at least a hemisphere.
fn disk_spread_degrees(center: &GeoPoint, radius_m: f64) -> Option<(f64, f64)> {
    let angular = radius_m / EARTH_RADIUS_M;
    if angular >= std::f64::consts::FRAC_PI_2 {
        return None;
    }
    let cos_lat = center.latitude().to_radians().cos();
    if cos_lat <= 0.0 {
        return None;
    }
    let ratio = angular.sin() / cos_lat;
    if ratio >= 1.0 {
        return None;
    }
    Some((angular.to_degrees(), ratio.asin().to_degrees()))
}

/// Every precision-1 cell whose latitude range meets `[lat - δ, lat + δ]`.
///
/// Each row spans all longitudes, so the result holds any disk of angular
/// radius δ regardless of poles or longitude spread. A disk around a pole
/// yields the 8 cells of the polar row; the set is global only when all four
/// rows are needed.
fn latitude_band(center: GeoPoint, radius_m: f64, required_m: f64) -> CoverageSet {
    let spread = (required_m / EARTH_RADIUS_M).to_degrees();
    let south = center.latitude() - spread;
    let north = center.latitude() + spread;

    let prefixes: BTreeSet<String> = ALPHABET
        .iter()
        .map(|&c| (c as char).to_string())
        .filter(|code| {
            decode_bounds(code)
                .map(|bounds| bounds.lat_max >= south && bounds.lat_min <= north)
                .unwrap_or(true)
        })
        .collect();

    let global = prefixes.len() == ALPHABET.len();
    debug!(
        south,
        north,
        prefixes = prefixes.len(),
        global,
        "latitude band coverage"
    );
    CoverageSet::new(center, radius_m, 1, prefixes, global)
}
