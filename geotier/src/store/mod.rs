//! External store contract.
//!
//! The proximity index does not own persistence. It reads from any ordered
//! key-value store that can answer "all entities whose geohash starts with
//! this prefix", described by the [`GeohashStore`] trait. [`InMemoryStore`]
//! is a reference implementation used by tests and the CLI.
//!
//! # Write-path contract
//!
//! Whenever an entity's position is created or changed, its `geohash` must be
//! recomputed with [`crate::geohash::encode`] at
//! [`crate::geohash::MAX_PRECISION`] and written atomically with the
//! position. The index only reads; it cannot detect a stale geohash.

mod memory;
mod types;

pub use memory::InMemoryStore;
pub use types::{GeohashStore, IndexedEntity, StoreError};
