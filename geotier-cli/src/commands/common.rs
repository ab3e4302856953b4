//! Common argument types shared across CLI commands.

use clap::Args;
use geotier::config::parse_distance;
use geotier::coord::GeoPoint;
use geotier::index::SearchArea;
use geotier::proximity::ProximityTier;

use crate::error::CliError;

/// A point given as `--lat` / `--lon`.
#[derive(Debug, Clone, Args)]
pub struct CenterArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

impl CenterArgs {
    /// Validate into a point.
    pub fn point(&self) -> Result<GeoPoint, CliError> {
        Ok(GeoPoint::new(self.lat, self.lon)?)
    }
}

/// Search area: a named tier or an explicit radius, never both.
#[derive(Debug, Clone, Args)]
#[group(multiple = false)]
pub struct AreaArgs {
    /// Proximity tier (connected, 5km, city, state, country)
    #[arg(long)]
    pub tier: Option<ProximityTier>,

    /// Explicit radius ("5000", "500m", "12km")
    #[arg(long, value_parser = parse_radius)]
    pub radius: Option<f64>,
}

impl AreaArgs {
    /// Resolve to a search area, defaulting to the 5 km tier.
    pub fn area(&self) -> SearchArea {
        match (self.radius, self.tier) {
            (Some(radius_m), _) => SearchArea::Radius(radius_m),
            (None, Some(tier)) => SearchArea::Tier(tier),
            (None, None) => SearchArea::Tier(ProximityTier::Radius5Km),
        }
    }
}

fn parse_radius(value: &str) -> Result<f64, String> {
    parse_distance(value).map_err(|e| e.to_string())
}

/// Describe a search area for humans.
pub fn describe_area(area: SearchArea, radius_m: f64) -> String {
    let distance = geotier::config::format_distance(radius_m);
    match area {
        SearchArea::Tier(tier) => format!("{} ({})", tier.label(), distance),
        SearchArea::Radius(_) => distance,
    }
}
