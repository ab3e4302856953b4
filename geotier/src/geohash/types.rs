//! Geohash type definitions

use std::fmt;

use thiserror::Error;

use crate::coord::{GeoPoint, METERS_PER_DEGREE, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// The 32-symbol geohash alphabet ("a", "i", "l" and "o" are excluded).
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest geohash the codec produces or accepts.
///
/// Twelve characters are 60 bits, 30 per axis, well inside f64 precision.
pub const MAX_PRECISION: usize = 12;

/// Bits carried by one geohash character.
pub const BITS_PER_CHAR: usize = 5;

/// Errors produced by the geohash codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeohashError {
    /// A character outside the 32-symbol alphabet
    #[error("Invalid geohash character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Requested or supplied precision exceeds the supported maximum
    #[error("Invalid geohash precision: {0} (must be at most {})", MAX_PRECISION)]
    InvalidPrecision(usize),
}

/// The rectangular latitude/longitude interval a geohash represents.
///
/// Intervals are closed for [`Bounds::contains`]; the codec itself assigns
/// a coordinate that sits exactly on an interior edge to the lower cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Bounds {
    /// Bounds covering the entire globe (the empty geohash).
    pub const GLOBE: Bounds = Bounds {
        lat_min: MIN_LAT,
        lat_max: MAX_LAT,
        lon_min: MIN_LON,
        lon_max: MAX_LON,
    };

    /// Midpoint of both intervals.
    pub fn center(&self) -> GeoPoint {
        // Midpoints of in-range intervals are always in range
        GeoPoint::new_unchecked(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }

    /// Latitude extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Longitude extent in degrees.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Whether `point` lies inside the (closed) rectangle.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.latitude())
            && (self.lon_min..=self.lon_max).contains(&point.longitude())
    }

    /// North-south extent on the ground, in meters.
    pub fn height_m(&self) -> f64 {
        self.lat_span() * METERS_PER_DEGREE
    }

    /// East-west extent on the ground along the cell's widest parallel, in meters.
    pub fn width_m(&self) -> f64 {
        let widest_lat = if self.lat_min <= 0.0 && self.lat_max >= 0.0 {
            0.0
        } else {
            self.lat_min.abs().min(self.lat_max.abs())
        };
        self.lon_span() * METERS_PER_DEGREE * widest_lat.to_radians().cos()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat [{:.6}, {:.6}] lon [{:.6}, {:.6}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}

/// Compass direction to an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Cell offsets as (rows north, columns east).
    pub fn offsets(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    /// The direction pointing back.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        };
        f.pad(name)
    }
}
