//! Tests for coordinates and distance

use super::*;

const SAO_PAULO: (f64, f64) = (-23.5505, -46.6333);
const RIO: (f64, f64) = (-22.90, -43.17);

fn point(coords: (f64, f64)) -> GeoPoint {
    GeoPoint::new(coords.0, coords.1).unwrap()
}

#[test]
fn test_new_accepts_boundaries() {
    assert!(GeoPoint::new(90.0, 180.0).is_ok());
    assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    assert!(GeoPoint::new(0.0, 0.0).is_ok());
}

#[test]
fn test_invalid_latitude() {
    let result = GeoPoint::new(90.0001, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_longitude() {
    let result = GeoPoint::new(0.0, -180.5);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_nan_is_rejected() {
    assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    assert!(GeoPoint::clamped(f64::NAN, 0.0).is_err());
}

#[test]
fn test_clamped_limits_latitude_and_wraps_longitude() {
    let p = GeoPoint::clamped(95.0, 190.0).unwrap();
    assert_eq!(p.latitude(), 90.0);
    assert!((p.longitude() - (-170.0)).abs() < 1e-9);

    let p = GeoPoint::clamped(-100.0, -190.0).unwrap();
    assert_eq!(p.latitude(), -90.0);
    assert!((p.longitude() - 170.0).abs() < 1e-9);
}

#[test]
fn test_wrap_longitude_keeps_in_range_values() {
    assert_eq!(wrap_longitude(180.0), 180.0);
    assert_eq!(wrap_longitude(-180.0), -180.0);
    assert_eq!(wrap_longitude(12.5), 12.5);
    assert!((wrap_longitude(540.0) - (-180.0)).abs() < 1e-9);
    assert!((wrap_longitude(-181.0) - 179.0).abs() < 1e-9);
}

#[test]
fn test_distance_to_self_is_zero() {
    let p = point(SAO_PAULO);
    assert_eq!(p.distance_to(&p), 0.0);
}

#[test]
fn test_sao_paulo_to_rio() {
    let d = point(SAO_PAULO).distance_to(&point(RIO));
    assert!(
        (340_000.0..380_000.0).contains(&d),
        "São Paulo → Rio should be about 360 km, got {}",
        d
    );
}

#[test]
fn test_distance_is_symmetric() {
    let a = point(SAO_PAULO);
    let b = point(RIO);
    assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-6);
}

#[test]
fn test_distance_across_antimeridian() {
    let west = point((0.0, 179.9));
    let east = point((0.0, -179.9));
    let d = west.distance_to(&east);
    assert!(
        (d - 0.2 * METERS_PER_DEGREE).abs() < 1.0,
        "Crossing ±180° should be a short hop, got {}",
        d
    );
}

#[test]
fn test_antipodal_distance_is_half_circumference() {
    let a = point((0.0, 0.0));
    let b = point((0.0, 180.0));
    assert!((a.distance_to(&b) - MAX_DISTANCE_M).abs() < 1.0);
}

#[test]
fn test_meters_to_degrees() {
    assert!((meters_to_degrees(METERS_PER_DEGREE) - 1.0).abs() < 1e-12);
}

#[test]
fn test_serde_roundtrip_and_validation() {
    let p = point(SAO_PAULO);
    let json = serde_json::to_string(&p).unwrap();
    let back: GeoPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(p, back);

    let short: GeoPoint = serde_json::from_str(r#"{"lat": 1.5, "lon": 2.5}"#).unwrap();
    assert_eq!(short.latitude(), 1.5);

    let invalid: Result<GeoPoint, _> = serde_json::from_str(r#"{"lat": 91.0, "lon": 0.0}"#);
    assert!(invalid.is_err());
}

#[test]
fn test_destination_travels_requested_distance() {
    let start = point(SAO_PAULO);
    for bearing in [0.0, 45.0, 90.0, 180.0, 270.0, 333.0] {
        let end = destination(&start, bearing, 5_000.0);
        assert!(
            (start.distance_to(&end) - 5_000.0).abs() < 0.01,
            "bearing {} landed {} m away",
            bearing,
            start.distance_to(&end)
        );
    }
}

#[test]
fn test_destination_wraps_antimeridian() {
    let start = point((0.0, 179.95));
    let end = destination(&start, 90.0, 20_000.0);
    assert!(end.longitude() < -179.0, "got {}", end.longitude());
}
