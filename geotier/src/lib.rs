//! geotier - tiered proximity search over a geohash-indexed entity store
//!
//! Answers "who is near me?" for a point and a named proximity tier (or an
//! explicit radius), returning entities ordered by great-circle distance in
//! stable, cursor-paginated pages.
//!
//! # Layers
//!
//! - [`coord`]: validated coordinates and great-circle math
//! - [`geohash`]: base-32 geohash encoding, cells and neighbor expansion
//! - [`proximity`]: tiers and the radius to prefix-length table
//! - [`coverage`]: the prefix set that covers a search disk
//! - [`store`]: the store contract and an in-memory reference store
//! - [`index`]: the query façade tying it together
//!
//! ```
//! use geotier::coord::GeoPoint;
//! use geotier::coverage::coverage;
//!
//! let here = GeoPoint::new(-23.5505, -46.6333).unwrap();
//! let set = coverage(&here, 5_000.0).unwrap();
//! assert!(set.iter().all(|prefix| prefix.len() == 4));
//! ```

pub mod config;
pub mod coord;
pub mod coverage;
pub mod geohash;
pub mod index;
pub mod logging;
pub mod proximity;
pub mod store;

/// Version of the geotier library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
