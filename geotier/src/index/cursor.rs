//! Opaque pagination cursor.
//!
//! A cursor records the (distance, id) pair of the last result on a page.
//! Results are totally ordered by that pair, so the next page is simply
//! everything strictly after it. The text form is the distance's IEEE-754
//! bit pattern in 16 hex digits, a colon, then the id.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned for cursors that do not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid cursor '{0}'")]
pub struct CursorParseError(pub String);

/// Position after which the next page starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    distance_m: f64,
    id: String,
}

impl Cursor {
    /// Cursor pointing just past the given result.
    pub fn new(distance_m: f64, id: impl Into<String>) -> Self {
        Self {
            distance_m,
            id: id.into(),
        }
    }

    /// Distance of the last returned result.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Id of the last returned result.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether a result at (`distance_m`, `id`) comes after this cursor.
    pub fn precedes(&self, distance_m: f64, id: &str) -> bool {
        rank(self.distance_m, &self.id, distance_m, id) == Ordering::Less
    }
}

/// Total order used for ranking: distance first, then id.
pub(crate) fn rank(a_distance: f64, a_id: &str, b_distance: f64, b_id: &str) -> Ordering {
    a_distance
        .total_cmp(&b_distance)
        .then_with(|| a_id.cmp(b_id))
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}:{}", self.distance_m.to_bits(), self.id)
    }
}

impl FromStr for Cursor {
    type Err = CursorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CursorParseError(s.to_string());

        let (bits, id) = s.split_once(':').ok_or_else(invalid)?;
        if bits.len() != 16 {
            return Err(invalid());
        }
        let bits = u64::from_str_radix(bits, 16).map_err(|_| invalid())?;
        let distance_m = f64::from_bits(bits);
        if !distance_m.is_finite() || distance_m < 0.0 || id.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(distance_m, id))
    }
}
