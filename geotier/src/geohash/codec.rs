//! Geohash encoding and decoding.
//!
//! Both directions walk the same alternating bisection: even bits narrow the
//! longitude interval, odd bits narrow the latitude interval, starting with
//! longitude. A coordinate strictly above the midpoint selects the upper half.

use super::types::{Bounds, GeohashError, ALPHABET, BITS_PER_CHAR, MAX_PRECISION};
use crate::coord::{GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Reverse lookup from ASCII byte to 5-bit symbol value (-1 = not in alphabet).
const DECODE_TABLE: [i8; 128] = build_decode_table();

const fn build_decode_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Map one character to its 5-bit symbol value.
#[inline]
pub(crate) fn symbol_value(character: char, position: usize) -> Result<u8, GeohashError> {
    let value = if character.is_ascii() {
        DECODE_TABLE[character as usize]
    } else {
        -1
    };
    if value < 0 {
        return Err(GeohashError::InvalidCharacter {
            character,
            position,
        });
    }
    Ok(value as u8)
}

/// Encodes a point as a geohash of `precision` characters.
///
/// Precision 0 yields the empty string, which stands for the whole globe.
///
/// # Example
///
/// ```
/// use geotier::coord::GeoPoint;
/// use geotier::geohash::encode;
///
/// let point = GeoPoint::new(57.64911, 10.40744).unwrap();
/// assert_eq!(encode(&point, 11).unwrap(), "u4pruydqqvj");
/// ```
pub fn encode(point: &GeoPoint, precision: usize) -> Result<String, GeohashError> {
    if precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(precision));
    }

    let (lat, lon) = (point.latitude(), point.longitude());
    let mut lat_range = (MIN_LAT, MAX_LAT);
    let mut lon_range = (MIN_LON, MAX_LON);
    let mut code = String::with_capacity(precision);
    let mut symbol = 0usize;
    let mut bit = 0;
    let mut even = true;

    while code.len() < precision {
        let (value, range) = if even {
            (lon, &mut lon_range)
        } else {
            (lat, &mut lat_range)
        };
        let mid = (range.0 + range.1) / 2.0;
        // ">" keeps the maximal coordinate in the last cell
        if value > mid {
            symbol = (symbol << 1) | 1;
            range.0 = mid;
        } else {
            symbol <<= 1;
            range.1 = mid;
        }
        even = !even;

        bit += 1;
        if bit == BITS_PER_CHAR {
            code.push(ALPHABET[symbol] as char);
            symbol = 0;
            bit = 0;
        }
    }

    Ok(code)
}

/// Decodes a geohash into its bounds and center point.
///
/// The empty string decodes to the full globe.
///
/// # Errors
///
/// [`GeohashError::InvalidCharacter`] for any character outside the alphabet
/// (the alphabet is lowercase only), [`GeohashError::InvalidPrecision`] for
/// codes longer than [`MAX_PRECISION`].
pub fn decode(code: &str) -> Result<(Bounds, GeoPoint), GeohashError> {
    let bounds = decode_bounds(code)?;
    Ok((bounds, bounds.center()))
}

/// Decodes a geohash into its bounds only.
pub fn decode_bounds(code: &str) -> Result<Bounds, GeohashError> {
    let length = code.chars().count();
    if length > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(length));
    }

    let mut bounds = Bounds::GLOBE;
    let mut even = true;

    for (position, character) in code.chars().enumerate() {
        let value = symbol_value(character, position)?;
        for shift in (0..BITS_PER_CHAR).rev() {
            let upper = (value >> shift) & 1 == 1;
            let (min, max) = if even {
                (&mut bounds.lon_min, &mut bounds.lon_max)
            } else {
                (&mut bounds.lat_min, &mut bounds.lat_max)
            };
            let mid = (*min + *max) / 2.0;
            if upper {
                *min = mid;
            } else {
                *max = mid;
            }
            even = !even;
        }
    }

    Ok(bounds)
}

/// Checks that `code` is a well-formed geohash without decoding it fully.
pub fn validate(code: &str) -> Result<(), GeohashError> {
    let mut length = 0;
    for (position, character) in code.chars().enumerate() {
        symbol_value(character, position)?;
        length += 1;
    }
    if length > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(length));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_known_reference_hash() {
        assert_eq!(encode(&point(57.64911, 10.40744), 11).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn test_sao_paulo_precision_8() {
        let sao_paulo = point(-23.5505, -46.6333);
        let code = encode(&sao_paulo, 8).unwrap();
        assert_eq!(code, "6gyf4bf8");

        let (bounds, center) = decode(&code).unwrap();
        assert!(bounds.contains(&sao_paulo));
        assert!(center.distance_to(&sao_paulo) < 30.0);
    }

    #[test]
    fn test_new_york_precision_6() {
        assert_eq!(encode(&point(40.7128, -74.0060), 6).unwrap(), "dr5reg");
    }

    #[test]
    fn test_precision_zero_is_empty_and_whole_globe() {
        assert_eq!(encode(&point(12.0, 34.0), 0).unwrap(), "");
        let (bounds, center) = decode("").unwrap();
        assert_eq!(bounds, Bounds::GLOBE);
        assert_eq!(center.latitude(), 0.0);
        assert_eq!(center.longitude(), 0.0);
    }

    #[test]
    fn test_precision_above_maximum_is_rejected() {
        let result = encode(&point(0.0, 0.0), MAX_PRECISION + 1);
        assert_eq!(result, Err(GeohashError::InvalidPrecision(13)));
        assert!(decode("0123456789bcd").is_err());
    }

    #[test]
    fn test_extreme_coordinates_land_in_boundary_cells() {
        assert_eq!(encode(&point(90.0, 180.0), 3).unwrap(), "zzz");
        assert_eq!(encode(&point(-90.0, -180.0), 3).unwrap(), "000");
        assert_eq!(encode(&point(0.0, 180.0), 3).unwrap(), "rzz");
        assert_eq!(encode(&point(0.0, -180.0), 3).unwrap(), "2pb");

        let full = encode(&point(90.0, 180.0), MAX_PRECISION).unwrap();
        assert_eq!(full, "zzzzzzzzzzzz");
        assert!(decode_bounds(&full).unwrap().contains(&point(90.0, 180.0)));
    }

    #[test]
    fn test_decode_rejects_characters_outside_alphabet() {
        for bad in ["a", "6gyi", "6gyl", "o", "6GYF", "6g f", "6gé"] {
            let result = decode(bad);
            assert!(
                matches!(result, Err(GeohashError::InvalidCharacter { .. })),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_character_reports_position() {
        assert_eq!(
            decode("6gya").unwrap_err(),
            GeohashError::InvalidCharacter {
                character: 'a',
                position: 3
            }
        );
    }

    #[test]
    fn test_decode_single_character_spans() {
        let bounds = decode_bounds("s").unwrap();
        assert_eq!(bounds.lon_span(), 45.0);
        assert_eq!(bounds.lat_span(), 45.0);
        assert_eq!(bounds.lat_min, 0.0);
        assert_eq!(bounds.lon_min, 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(validate("6gyf4bf8").is_ok());
        assert!(validate("").is_ok());
        assert!(validate("6gyf4bfa").is_err());
        assert!(validate("zzzzzzzzzzzzz").is_err());
    }
}
