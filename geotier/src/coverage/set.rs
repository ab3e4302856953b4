//! Coverage set value type.

use std::collections::BTreeSet;

use crate::coord::GeoPoint;

/// The union of geohash prefixes guaranteed to contain a search disk.
///
/// Order is insignificant; prefixes are kept sorted for stable output.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSet {
    center: GeoPoint,
    radius_m: f64,
    precision: usize,
    prefixes: Vec<String>,
    global: bool,
}

impl CoverageSet {
    pub(crate) fn new(
        center: GeoPoint,
        radius_m: f64,
        precision: usize,
        prefixes: BTreeSet<String>,
        global: bool,
    ) -> Self {
        Self {
            center,
            radius_m,
            precision,
            prefixes: minimize(prefixes),
            global,
        }
    }

    /// Center of the search disk.
    pub fn center(&self) -> &GeoPoint {
        &self.center
    }

    /// Requested radius in meters (before any safety margin).
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Prefix length of every entry.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// The prefixes to scan.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Number of prefixes.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Whether the set fell back to scanning the entire globe.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Whether a stored geohash falls inside one of the prefixes.
    pub fn contains_geohash(&self, code: &str) -> bool {
        self.prefixes.iter().any(|prefix| code.starts_with(prefix.as_str()))
    }

    /// Iterate over the prefixes.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

/// Drop any prefix already covered by a shorter one in the set.
fn minimize(prefixes: BTreeSet<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(prefixes.len());
    // Sorted order puts a prefix directly before the codes it covers
    for prefix in prefixes {
        if let Some(last) = kept.last() {
            if prefix.starts_with(last.as_str()) {
                continue;
            }
        }
        kept.push(prefix);
    }
    kept
}
