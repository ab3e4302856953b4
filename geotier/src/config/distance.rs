//! Human-readable distance parsing (e.g., "5km", "500m").

use thiserror::Error;

/// Error parsing a distance string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid distance '{input}' - expected a positive value like '5km', '500m', or '1500'")]
pub struct DistanceParseError {
    input: String,
}

impl DistanceParseError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Parse a human-readable distance into meters.
///
/// Supports:
/// - Bare numbers (treated as meters)
/// - `m` suffix (meters)
/// - `km` suffix (kilometers)
/// - Case-insensitive
/// - Whitespace tolerant
///
/// # Examples
///
/// ```
/// use geotier::config::parse_distance;
///
/// assert_eq!(parse_distance("1500").unwrap(), 1500.0);
/// assert_eq!(parse_distance("500m").unwrap(), 500.0);
/// assert_eq!(parse_distance("5 km").unwrap(), 5000.0);
/// assert_eq!(parse_distance("2.5KM").unwrap(), 2500.0);
/// ```
pub fn parse_distance(s: &str) -> Result<f64, DistanceParseError> {
    let trimmed = s.trim();
    let lower = trimmed.to_lowercase();

    let (num_str, multiplier) = if let Some(num) = lower.strip_suffix("km") {
        (num.trim(), 1000.0)
    } else if let Some(num) = lower.strip_suffix('m') {
        (num.trim(), 1.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let value: f64 = num_str.parse().map_err(|_| DistanceParseError::new(s))?;
    let meters = value * multiplier;
    if !meters.is_finite() || meters <= 0.0 {
        return Err(DistanceParseError::new(s));
    }
    Ok(meters)
}

/// Format meters as a human-readable distance.
///
/// # Examples
///
/// ```
/// use geotier::config::format_distance;
///
/// assert_eq!(format_distance(5000.0), "5km");
/// assert_eq!(format_distance(750.0), "750m");
/// assert_eq!(format_distance(1234.5), "1234.5m");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 && (meters % 1000.0) == 0.0 {
        format!("{}km", meters / 1000.0)
    } else {
        format!("{}m", meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_meters() {
        assert_eq!(parse_distance("42").unwrap(), 42.0);
        assert_eq!(parse_distance("  42 ").unwrap(), 42.0);
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_distance("30km").unwrap(), 30_000.0);
        assert_eq!(parse_distance("30 KM").unwrap(), 30_000.0);
        assert_eq!(parse_distance("250M").unwrap(), 250.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_distance("").is_err());
        assert!(parse_distance("km").is_err());
        assert!(parse_distance("five km").is_err());
        assert!(parse_distance("5 miles").is_err());
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(parse_distance("0").is_err());
        assert!(parse_distance("-3km").is_err());
        assert!(parse_distance("inf").is_err());
        assert!(parse_distance("NaN").is_err());
    }

    #[test]
    fn test_format_roundtrip() {
        for meters in [1.0, 999.0, 5_000.0, 30_000.0, 1_500_000.0, 20_015_086.8] {
            assert_eq!(parse_distance(&format_distance(meters)).unwrap(), meters);
        }
    }
}
