//! Proximity tiers and their configured radii.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::MAX_DISTANCE_M;

/// Default radius of the "Within 5 km" tier.
pub const DEFAULT_RADIUS_5KM_M: f64 = 5_000.0;
/// Default radius of the "City" tier.
pub const DEFAULT_CITY_RADIUS_M: f64 = 30_000.0;
/// Default radius of the "State" tier.
pub const DEFAULT_STATE_RADIUS_M: f64 = 300_000.0;
/// Default radius of the "Country" tier.
pub const DEFAULT_COUNTRY_RADIUS_M: f64 = 1_500_000.0;
/// Default radius of the "Connected" tier: the whole globe.
pub const DEFAULT_CONNECTED_RADIUS_M: f64 = MAX_DISTANCE_M;

/// A named distance bucket the UI tier selector binds to.
///
/// The string identifiers returned by [`ProximityTier::as_str`] are stable and
/// are what the configuration file and serialized queries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityTier {
    /// Anyone, ranked by distance; relationship filtering is the caller's job
    Connected,
    /// Within 5 km (radius configurable)
    #[serde(rename = "5km", alias = "radius_5km")]
    Radius5Km,
    /// Same city
    City,
    /// Same state
    State,
    /// Same country
    Country,
}

impl ProximityTier {
    /// Every tier, in selector order.
    pub const ALL: [ProximityTier; 5] = [
        ProximityTier::Connected,
        ProximityTier::Radius5Km,
        ProximityTier::City,
        ProximityTier::State,
        ProximityTier::Country,
    ];

    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProximityTier::Connected => "connected",
            ProximityTier::Radius5Km => "5km",
            ProximityTier::City => "city",
            ProximityTier::State => "state",
            ProximityTier::Country => "country",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProximityTier::Connected => "Connected",
            ProximityTier::Radius5Km => "Within 5 km",
            ProximityTier::City => "City",
            ProximityTier::State => "State",
            ProximityTier::Country => "Country",
        }
    }
}

impl fmt::Display for ProximityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tier identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown proximity tier '{0}' (expected one of: connected, 5km, city, state, country)")]
pub struct UnknownTier(pub String);

impl FromStr for ProximityTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "connected" => Ok(ProximityTier::Connected),
            "5km" | "radius_5km" | "within_5km" => Ok(ProximityTier::Radius5Km),
            "city" => Ok(ProximityTier::City),
            "state" => Ok(ProximityTier::State),
            "country" => Ok(ProximityTier::Country),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// Radius in meters assigned to each tier.
///
/// # Example
///
/// ```
/// use geotier::proximity::{ProximityTier, TierRadii};
///
/// let radii = TierRadii::default().with_radius(ProximityTier::City, 50_000.0);
/// assert_eq!(radii.radius(ProximityTier::City), 50_000.0);
/// assert_eq!(radii.radius(ProximityTier::Radius5Km), 5_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRadii {
    connected: f64,
    radius_5km: f64,
    city: f64,
    state: f64,
    country: f64,
}

impl TierRadii {
    /// Radius for `tier`, in meters.
    pub fn radius(&self, tier: ProximityTier) -> f64 {
        match tier {
            ProximityTier::Connected => self.connected,
            ProximityTier::Radius5Km => self.radius_5km,
            ProximityTier::City => self.city,
            ProximityTier::State => self.state,
            ProximityTier::Country => self.country,
        }
    }

    /// Replace the radius for `tier`.
    pub fn with_radius(mut self, tier: ProximityTier, meters: f64) -> Self {
        let slot = match tier {
            ProximityTier::Connected => &mut self.connected,
            ProximityTier::Radius5Km => &mut self.radius_5km,
            ProximityTier::City => &mut self.city,
            ProximityTier::State => &mut self.state,
            ProximityTier::Country => &mut self.country,
        };
        *slot = meters;
        self
    }
}

impl Default for TierRadii {
    fn default() -> Self {
        Self {
            connected: DEFAULT_CONNECTED_RADIUS_M,
            radius_5km: DEFAULT_RADIUS_5KM_M,
            city: DEFAULT_CITY_RADIUS_M,
            state: DEFAULT_STATE_RADIUS_M,
            country: DEFAULT_COUNTRY_RADIUS_M,
        }
    }
}
