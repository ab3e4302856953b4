//! Proximity tiers and precision selection.
//!
//! Tiers are the discrete distance buckets offered to users ("Connected",
//! "Within 5 km", "City", "State", "Country"). Each tier carries a configured
//! radius, and [`PrecisionTable`] turns a radius into the geohash prefix
//! length the index scans with.

mod precision;
mod tier;

pub use precision::{
    cell_dimensions, cell_size_m, prefix_length_for_radius, PrecisionError, PrecisionTable,
    CELL_DIMENSIONS_M,
};
pub use tier::{
    ProximityTier, TierRadii, UnknownTier, DEFAULT_CITY_RADIUS_M, DEFAULT_CONNECTED_RADIUS_M,
    DEFAULT_COUNTRY_RADIUS_M, DEFAULT_RADIUS_5KM_M, DEFAULT_STATE_RADIUS_M,
};
