//! Coordinate type definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Mean Earth radius used for all great-circle computations.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A validated geographic position in decimal degrees.
///
/// Construction goes through [`GeoPoint::new`], so a `GeoPoint` always holds
/// a finite latitude in `[-90, 90]` and a finite longitude in `[-180, 180]`.
/// The geohash codec relies on this and performs no range checks of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint", into = "RawPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting out-of-range or non-finite input.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !latitude.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a point by clamping latitude to `[-90, 90]` and wrapping
    /// longitude into `[-180, 180]`.
    ///
    /// Non-finite input is still rejected.
    pub fn clamped(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !latitude.is_finite() {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude: latitude.clamp(MIN_LAT, MAX_LAT),
            longitude: wrap_longitude(longitude),
        })
    }

    /// Create a point from coordinates already known to be in range.
    #[inline]
    pub(crate) fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        debug_assert!((MIN_LAT..=MAX_LAT).contains(&latitude));
        debug_assert!((MIN_LON..=MAX_LON).contains(&longitude));
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in meters.
    #[inline]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        super::haversine_m(self, other)
    }
}

/// Wrap a longitude into `[-180, 180]`.
///
/// Values already in range are returned unchanged, so both `-180.0` and
/// `180.0` survive as given.
pub fn wrap_longitude(lon: f64) -> f64 {
    if (MIN_LON..=MAX_LON).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can land exactly on 360.0 for tiny negative inputs
    if wrapped >= MAX_LON {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Serde wire shape for [`GeoPoint`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPoint {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    longitude: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = CoordError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl From<GeoPoint> for RawPoint {
    fn from(point: GeoPoint) -> Self {
        RawPoint {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

/// Errors that can occur when building coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside the valid range (-90.0 to 90.0) or not finite
    #[error("Invalid latitude: {0} (must be between {} and {})", MIN_LAT, MAX_LAT)]
    InvalidLatitude(f64),
    /// Longitude is outside the valid range (-180.0 to 180.0) or not finite
    #[error("Invalid longitude: {0} (must be between {} and {})", MIN_LON, MAX_LON)]
    InvalidLongitude(f64),
}
