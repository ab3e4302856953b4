//! Runtime configuration for the proximity index.

use super::defaults::{
    DEFAULT_COVERAGE_MARGIN, DEFAULT_MAX_CONCURRENT_LOOKUPS, DEFAULT_MAX_PAGE_SIZE,
    DEFAULT_PAGE_SIZE,
};
use crate::proximity::{ProximityTier, TierRadii};

/// Configuration for [`crate::index::ProximityIndex`].
///
/// Groups tier radii, coverage safety margin, lookup fan-out and paging
/// limits, with defaults suitable for a "nearby" feed.
///
/// # Example
///
/// ```
/// use geotier::config::ProximityConfig;
/// use geotier::proximity::ProximityTier;
///
/// let config = ProximityConfig::default();
/// assert_eq!(config.default_page_size(), 20);
/// assert_eq!(config.max_concurrent_lookups(), 9);
///
/// let config = ProximityConfig::new()
///     .with_tier_radius(ProximityTier::City, 50_000.0)
///     .with_max_page_size(50);
/// assert_eq!(config.tier_radii().radius(ProximityTier::City), 50_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityConfig {
    /// Radius of each tier in meters
    tier_radii: TierRadii,
    /// Fraction added to the radius when sizing coverage cells
    coverage_margin: f64,
    /// Maximum store lookups in flight per query
    max_concurrent_lookups: usize,
    /// Page size used when the caller does not specify one
    default_page_size: usize,
    /// Largest page size a caller may request
    max_page_size: usize,
}

impl ProximityConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all tier radii.
    pub fn with_tier_radii(mut self, radii: TierRadii) -> Self {
        self.tier_radii = radii;
        self
    }

    /// Set the radius of one tier, in meters.
    pub fn with_tier_radius(mut self, tier: ProximityTier, meters: f64) -> Self {
        self.tier_radii = self.tier_radii.with_radius(tier, meters);
        self
    }

    /// Set the coverage safety margin.
    ///
    /// Cells are sized for `radius * (1 + margin)`. Default: 0.05.
    pub fn with_coverage_margin(mut self, margin: f64) -> Self {
        self.coverage_margin = margin;
        self
    }

    /// Set how many prefix lookups may run concurrently.
    ///
    /// A coverage set has at most 9 prefixes except for whole-globe
    /// fallbacks (32). Values below 1 are treated as 1. Default: 9.
    pub fn with_max_concurrent_lookups(mut self, lookups: usize) -> Self {
        self.max_concurrent_lookups = lookups.max(1);
        self
    }

    /// Set the default page size. Default: 20.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size.max(1);
        self
    }

    /// Set the largest allowed page size. Default: 500.
    pub fn with_max_page_size(mut self, size: usize) -> Self {
        self.max_page_size = size.max(1);
        self
    }

    /// Radius of each tier.
    pub fn tier_radii(&self) -> &TierRadii {
        &self.tier_radii
    }

    /// Coverage safety margin.
    pub fn coverage_margin(&self) -> f64 {
        self.coverage_margin
    }

    /// Maximum concurrent store lookups.
    pub fn max_concurrent_lookups(&self) -> usize {
        self.max_concurrent_lookups
    }

    /// Default page size.
    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Largest allowed page size.
    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            tier_radii: TierRadii::default(),
            coverage_margin: DEFAULT_COVERAGE_MARGIN,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}
