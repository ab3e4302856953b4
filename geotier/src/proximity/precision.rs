//! Mapping from search radius and tier to geohash precision.
//!
//! Cell sizes are a static table measured at the equator, where cells are
//! widest. The table only picks a starting precision; the coverage builder
//! verifies the real cell geometry at the query latitude and widens further
//! when needed.

use thiserror::Error;

use super::tier::{ProximityTier, TierRadii};
use crate::geohash::MAX_PRECISION;

/// Ground (width, height) of a cell at the equator, in meters, indexed by
/// precision - 1. Values are rounded down.
pub const CELL_DIMENSIONS_M: [(f64, f64); MAX_PRECISION] = [
    (5_003_771.0, 5_003_771.0),
    (1_250_942.0, 625_471.0),
    (156_367.0, 156_367.0),
    (39_091.0, 19_545.0),
    (4_886.0, 4_886.0),
    (1_221.0, 610.0),
    (152.7, 152.7),
    (38.17, 19.08),
    (4.77, 4.77),
    (1.19, 0.596),
    (0.149, 0.149),
    (0.0372, 0.0186),
];

/// Errors from precision selection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrecisionError {
    /// Radius is zero, negative or not finite
    #[error("Invalid radius: {0} m (must be a positive, finite number of meters)")]
    InvalidRadius(f64),
}

/// Equator (width, height) of a cell at `precision`, or `None` outside 1..=12.
pub fn cell_dimensions(precision: usize) -> Option<(f64, f64)> {
    precision
        .checked_sub(1)
        .and_then(|index| CELL_DIMENSIONS_M.get(index))
        .copied()
}

/// Smaller side of a cell at `precision`, in meters.
pub fn cell_size_m(precision: usize) -> Option<f64> {
    cell_dimensions(precision).map(|(width, height)| width.min(height))
}

/// Largest precision whose cell is at least `radius_m` on its smaller side.
///
/// Radii larger than a precision-1 cell still map to precision 1; the
/// coverage builder handles those by scanning the whole globe.
pub fn prefix_length_for_radius(radius_m: f64) -> Result<usize, PrecisionError> {
    if !radius_m.is_finite() || radius_m <= 0.0 {
        return Err(PrecisionError::InvalidRadius(radius_m));
    }
    let precision = CELL_DIMENSIONS_M
        .iter()
        .rposition(|&(width, height)| width.min(height) >= radius_m)
        .map(|index| index + 1)
        .unwrap_or(1);
    Ok(precision)
}

/// Tier-aware precision lookup.
///
/// Holds the configured radius of each tier so the tier → precision mapping
/// is a plain table lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionTable {
    radii: TierRadii,
    tier_precision: [usize; 5],
}

impl PrecisionTable {
    /// Build the table for the given tier radii.
    pub fn new(radii: TierRadii) -> Result<Self, PrecisionError> {
        let mut tier_precision = [1; 5];
        for (slot, tier) in tier_precision.iter_mut().zip(ProximityTier::ALL) {
            *slot = prefix_length_for_radius(radii.radius(tier))?;
        }
        Ok(Self {
            radii,
            tier_precision,
        })
    }

    /// Prefix length used for `tier`.
    pub fn prefix_length_for_tier(&self, tier: ProximityTier) -> usize {
        self.tier_precision[tier as usize]
    }

    /// Prefix length for an explicit radius.
    pub fn prefix_length_for_radius(&self, radius_m: f64) -> Result<usize, PrecisionError> {
        prefix_length_for_radius(radius_m)
    }

    /// Configured radius for `tier`, in meters.
    pub fn radius_for_tier(&self, tier: ProximityTier) -> f64 {
        self.radii.radius(tier)
    }

    /// The tier radii this table was built from.
    pub fn radii(&self) -> &TierRadii {
        &self.radii
    }
}

impl Default for PrecisionTable {
    fn default() -> Self {
        Self::new(TierRadii::default()).expect("default tier radii are positive")
    }
}
