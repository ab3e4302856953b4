//! Immutable geohash cell value.

use std::fmt;
use std::str::FromStr;

use super::codec::{decode_bounds, encode};
use super::types::{Bounds, GeohashError, ALPHABET, MAX_PRECISION};
use crate::coord::GeoPoint;

/// A geohash code together with the rectangle it represents.
///
/// A cell is never mutated after construction; the bounds are always
/// regenerated from the code.
#[derive(Debug, Clone, PartialEq)]
pub struct GeohashCell {
    code: String,
    bounds: Bounds,
}

impl GeohashCell {
    /// Encode `point` into a cell of the given precision.
    pub fn encode(point: &GeoPoint, precision: usize) -> Result<Self, GeohashError> {
        let code = encode(point, precision)?;
        Self::parse(&code)
    }

    /// Parse an existing geohash.
    pub fn parse(code: &str) -> Result<Self, GeohashError> {
        let bounds = decode_bounds(code)?;
        Ok(Self {
            code: code.to_string(),
            bounds,
        })
    }

    /// The geohash string.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of characters in the code.
    pub fn precision(&self) -> usize {
        self.code.len()
    }

    /// Rectangle covered by this cell.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Center point of the cell.
    pub fn center(&self) -> GeoPoint {
        self.bounds.center()
    }

    /// Whether the cell's rectangle contains `point`.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.bounds.contains(point)
    }

    /// The enclosing cell one character shorter, or `None` for the globe.
    pub fn parent(&self) -> Option<GeohashCell> {
        if self.code.is_empty() {
            return None;
        }
        let parent = &self.code[..self.code.len() - 1];
        Self::parse(parent).ok()
    }

    /// The 32 sub-cells one character longer, in alphabet order.
    pub fn children(&self) -> Result<Vec<GeohashCell>, GeohashError> {
        if self.precision() >= MAX_PRECISION {
            return Err(GeohashError::InvalidPrecision(self.precision() + 1));
        }
        ALPHABET
            .iter()
            .map(|&symbol| {
                let mut code = String::with_capacity(self.code.len() + 1);
                code.push_str(&self.code);
                code.push(symbol as char);
                Self::parse(&code)
            })
            .collect()
    }
}

impl FromStr for GeohashCell {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GeohashCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for GeohashCell {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_builds_matching_cell() {
        let point = GeoPoint::new(-23.5505, -46.6333).unwrap();
        let cell = GeohashCell::encode(&point, 8).unwrap();
        assert_eq!(cell.code(), "6gyf4bf8");
        assert_eq!(cell.precision(), 8);
        assert!(cell.contains(&point));
    }

    #[test]
    fn test_parse_rejects_invalid_code() {
        assert!(GeohashCell::parse("abc").is_err());
        assert!("6gyf".parse::<GeohashCell>().is_ok());
    }

    #[test]
    fn test_parent() {
        let cell = GeohashCell::parse("6gyf").unwrap();
        assert_eq!(cell.parent().unwrap().code(), "6gy");
        assert!(GeohashCell::parse("").unwrap().parent().is_none());
    }

    #[test]
    fn test_children_tile_the_parent() {
        let cell = GeohashCell::parse("6g").unwrap();
        let children = cell.children().unwrap();
        assert_eq!(children.len(), 32);

        let area: f64 = children
            .iter()
            .map(|c| c.bounds().lat_span() * c.bounds().lon_span())
            .sum();
        let parent_area = cell.bounds().lat_span() * cell.bounds().lon_span();
        assert!((area - parent_area).abs() < 1e-9);

        for child in &children {
            assert!(child.code().starts_with("6g"));
            assert!(cell.contains(&child.center()));
        }
    }

    #[test]
    fn test_children_of_max_precision_fail() {
        let cell = GeohashCell::parse("zzzzzzzzzzzz").unwrap();
        assert!(cell.children().is_err());
    }

    #[test]
    fn test_display() {
        let cell = GeohashCell::parse("dr5reg").unwrap();
        assert_eq!(cell.to_string(), "dr5reg");
    }
}
