//! Geohash codec and cell geometry.
//!
//! A geohash names a latitude/longitude rectangle by interleaving the bits of
//! a binary bisection of each axis and writing them five at a time in a
//! 32-symbol alphabet. Longer codes name smaller rectangles, and every code
//! is a prefix of the codes of the points inside it, which is what lets an
//! ordered key-value store answer area lookups with prefix scans.
//!
//! # Usage
//!
//! ```
//! use geotier::coord::GeoPoint;
//! use geotier::geohash::{decode, encode, neighbors};
//!
//! let sao_paulo = GeoPoint::new(-23.5505, -46.6333).unwrap();
//! let code = encode(&sao_paulo, 8).unwrap();
//! assert_eq!(code, "6gyf4bf8");
//!
//! let (bounds, _center) = decode(&code).unwrap();
//! assert!(bounds.contains(&sao_paulo));
//!
//! assert_eq!(neighbors(&code).unwrap().len(), 8);
//! ```

mod cell;
mod codec;
mod neighbors;
mod types;

pub use cell::GeohashCell;
pub use codec::{decode, decode_bounds, encode, validate};
pub use neighbors::{neighbor, neighbors};
pub use types::{Bounds, Direction, GeohashError, ALPHABET, BITS_PER_CHAR, MAX_PRECISION};
