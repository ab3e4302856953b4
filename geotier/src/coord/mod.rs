//! Coordinate module
//!
//! Provides the validated [`GeoPoint`] type and great-circle distance
//! computations shared by the geohash codec and the proximity index.

mod types;

pub use types::{
    wrap_longitude, CoordError, GeoPoint, EARTH_RADIUS_M, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON,
};

/// Meters per degree of latitude on the mean-radius sphere.
pub const METERS_PER_DEGREE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Half the Earth's circumference: no two points are further apart.
pub const MAX_DISTANCE_M: f64 = EARTH_RADIUS_M * std::f64::consts::PI;

/// Calculate the great-circle distance between two points.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
///
/// # Example
///
/// ```
/// use geotier::coord::{haversine_m, GeoPoint};
///
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(1.0, 0.0).unwrap();
/// let dist = haversine_m(&a, &b);
/// assert!((dist - 111_195.0).abs() < 1.0);
/// ```
pub fn haversine_m(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1_rad = from.latitude().to_radians();
    let lat2_rad = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Project a point along a great circle.
///
/// # Arguments
///
/// * `start` - Starting point
/// * `bearing_deg` - Initial bearing in degrees clockwise from north
/// * `distance_m` - Distance to travel in meters
///
/// # Example
///
/// ```
/// use geotier::coord::{destination, GeoPoint};
///
/// let start = GeoPoint::new(0.0, 0.0).unwrap();
/// let north = destination(&start, 0.0, 111_195.0);
/// assert!((north.latitude() - 1.0).abs() < 1e-3);
/// assert!(north.longitude().abs() < 1e-9);
/// ```
pub fn destination(start: &GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let lat1_rad = start.latitude().to_radians();
    let lon1_rad = start.longitude().to_radians();
    let bearing_rad = bearing_deg.to_radians();
    let angular_distance = distance_m / EARTH_RADIUS_M;

    let sin_lat1 = lat1_rad.sin();
    let cos_lat1 = lat1_rad.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let sin_lat2 = (sin_lat1 * cos_d + cos_lat1 * sin_d * bearing_rad.cos()).clamp(-1.0, 1.0);
    let lat2_rad = sin_lat2.asin();
    let lon2_rad =
        lon1_rad + (bearing_rad.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * sin_lat2);

    GeoPoint::new_unchecked(
        lat2_rad.to_degrees().clamp(MIN_LAT, MAX_LAT),
        wrap_longitude(lon2_rad.to_degrees()),
    )
}

/// Convert a ground distance in meters to degrees of arc.
#[inline]
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

#[cfg(test)]
mod tests;
