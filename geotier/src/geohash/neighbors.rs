//! Adjacent-cell expansion.
//!
//! A point near a cell edge can be closer to something in the next cell than
//! to anything in its own, even when the two codes share no prefix at all.
//! Range queries therefore always scan the 3×3 block around the center cell.
//!
//! Neighbors are found by stepping one cell span from the cell center and
//! re-encoding at the same precision. Longitude wraps across ±180°; latitude
//! does not wrap, so cells on the polar edge have no neighbor beyond it.

use std::collections::BTreeSet;

use super::codec::{decode_bounds, encode};
use super::types::{Direction, GeohashError};
use crate::coord::{wrap_longitude, GeoPoint, MAX_LAT, MIN_LAT};

/// The adjacent cell in one compass direction.
///
/// Returns `Ok(None)` when the step would cross a pole, and for the empty
/// geohash (the globe has no neighbors).
pub fn neighbor(code: &str, direction: Direction) -> Result<Option<String>, GeohashError> {
    let bounds = decode_bounds(code)?;
    if code.is_empty() {
        return Ok(None);
    }

    let center = bounds.center();
    let (rows, cols) = direction.offsets();
    let lat = center.latitude() + f64::from(rows) * bounds.lat_span();
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Ok(None);
    }
    let lon = wrap_longitude(center.longitude() + f64::from(cols) * bounds.lon_span());

    let target = GeoPoint::new_unchecked(lat, lon);
    encode(&target, code.len()).map(Some)
}

/// All existing neighbors of a cell, at most eight.
///
/// Directions blocked by a pole are omitted rather than wrapped.
///
/// # Example
///
/// ```
/// use geotier::geohash::neighbors;
///
/// let cells = neighbors("dqcjq").unwrap();
/// assert_eq!(cells.len(), 8);
/// assert!(cells.contains("dqcjw")); // north
/// assert!(cells.contains("dqcjr")); // east
/// ```
pub fn neighbors(code: &str) -> Result<BTreeSet<String>, GeohashError> {
    let mut cells = BTreeSet::new();
    for direction in Direction::ALL {
        if let Some(cell) = neighbor(code, direction)? {
            if cell != code {
                cells.insert(cell);
            }
        }
    }
    Ok(cells)
}
