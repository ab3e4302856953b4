//! Store contract types.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::GeoPoint;
use crate::geohash::{encode, GeohashError, MAX_PRECISION};

/// An entity with a position, as held by the external store.
///
/// The `geohash` field is the position encoded at [`MAX_PRECISION`]. Writers
/// must recompute it whenever `position` changes and persist both together;
/// prefix lookups are only correct while that holds. [`IndexedEntity::new`]
/// produces a consistent value, and [`IndexedEntity::is_consistent`] checks an
/// existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedEntity {
    /// Opaque identifier, unique within the store
    pub id: String,
    /// Current position
    pub position: GeoPoint,
    /// Position encoded at maximum precision
    pub geohash: String,
}

impl IndexedEntity {
    /// Build an entity with its geohash computed from `position`.
    pub fn new(id: impl Into<String>, position: GeoPoint) -> Result<Self, GeohashError> {
        Ok(Self {
            id: id.into(),
            position,
            geohash: encode(&position, MAX_PRECISION)?,
        })
    }

    /// Move the entity, recomputing its geohash in the same step.
    pub fn relocate(&mut self, position: GeoPoint) -> Result<(), GeohashError> {
        let geohash = encode(&position, MAX_PRECISION)?;
        self.position = position;
        self.geohash = geohash;
        Ok(())
    }

    /// Whether the stored geohash matches the stored position.
    pub fn is_consistent(&self) -> bool {
        encode(&self.position, MAX_PRECISION)
            .map(|expected| expected == self.geohash)
            .unwrap_or(false)
    }
}

/// Failures reported by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backend did not answer within its own deadline
    #[error("Store lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The backend answered with something it should not have
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// The ordered key-value store the proximity index reads from.
///
/// Implementations must return every entity whose stored geohash starts with
/// `prefix`, typically via an ordered index on the geohash column. Lookups
/// for different prefixes may run concurrently. Any timeout is the
/// implementation's own and must surface as an error, never as a shortened
/// result.
pub trait GeohashStore: Send + Sync {
    /// All entities whose geohash starts with `prefix`.
    fn lookup_by_geohash_prefix(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<Vec<IndexedEntity>, StoreError>> + Send;
}

impl<S: GeohashStore> GeohashStore for Arc<S> {
    fn lookup_by_geohash_prefix(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<Vec<IndexedEntity>, StoreError>> + Send {
        (**self).lookup_by_geohash_prefix(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_full_precision_geohash() {
        let entity =
            IndexedEntity::new("sp", GeoPoint::new(-23.55, -46.63).unwrap()).unwrap();
        assert_eq!(entity.geohash, "6gyf4bv561zf");
        assert!(entity.is_consistent());
    }

    #[test]
    fn test_relocate_keeps_geohash_consistent() {
        let mut entity =
            IndexedEntity::new("a", GeoPoint::new(-23.55, -46.63).unwrap()).unwrap();
        entity
            .relocate(GeoPoint::new(-22.90, -43.17).unwrap())
            .unwrap();
        assert_eq!(entity.geohash, "75cm9xhtf4dg");
        assert!(entity.is_consistent());
    }

    #[test]
    fn test_stale_geohash_is_detected() {
        let mut entity =
            IndexedEntity::new("a", GeoPoint::new(-23.55, -46.63).unwrap()).unwrap();
        entity.position = GeoPoint::new(10.0, 10.0).unwrap();
        assert!(!entity.is_consistent());
    }

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::Unavailable("connection refused".to_string()).to_string(),
            "Store unavailable: connection refused"
        );
        assert_eq!(
            StoreError::Timeout(Duration::from_secs(2)).to_string(),
            "Store lookup timed out after 2s"
        );
    }
}
