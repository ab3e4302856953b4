//! In-memory ordered store.
//!
//! Entities are keyed by `(geohash, id)` in a `BTreeMap`, so a prefix lookup
//! is a single range scan, the same access pattern an ordered index on a
//! geohash column gives a real database.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::RwLock;

use tracing::trace;

use super::types::{GeohashStore, IndexedEntity, StoreError};
use crate::coord::GeoPoint;
use crate::geohash::GeohashError;

#[derive(Debug, Default)]
struct Inner {
    by_geohash: BTreeMap<(String, String), IndexedEntity>,
    geohash_by_id: HashMap<String, String>,
}

/// Thread-safe in-memory [`GeohashStore`].
///
/// Writes go through [`InMemoryStore::upsert`], which recomputes the geohash
/// and replaces position and geohash under one write lock, so readers never
/// observe one without the other.
///
/// # Example
///
/// ```
/// use geotier::coord::GeoPoint;
/// use geotier::store::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.upsert("sp", GeoPoint::new(-23.55, -46.63).unwrap()).unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entities.
    ///
    /// Entity geohashes are recomputed from their positions.
    pub fn from_entities(
        entities: impl IntoIterator<Item = IndexedEntity>,
    ) -> Result<Self, GeohashError> {
        let store = Self::new();
        for entity in entities {
            store.upsert(entity.id, entity.position)?;
        }
        Ok(store)
    }

    /// Insert or move an entity.
    ///
    /// Returns the previous version, if any.
    pub fn upsert(
        &self,
        id: impl Into<String>,
        position: GeoPoint,
    ) -> Result<Option<IndexedEntity>, GeohashError> {
        let entity = IndexedEntity::new(id, position)?;
        let mut inner = self.inner.write().expect("InMemoryStore lock poisoned");

        let previous = inner
            .geohash_by_id
            .insert(entity.id.clone(), entity.geohash.clone())
            .and_then(|old| inner.by_geohash.remove(&(old, entity.id.clone())));
        inner
            .by_geohash
            .insert((entity.geohash.clone(), entity.id.clone()), entity);

        Ok(previous)
    }

    /// Remove an entity by id.
    pub fn remove(&self, id: &str) -> Option<IndexedEntity> {
        let mut inner = self.inner.write().expect("InMemoryStore lock poisoned");
        let geohash = inner.geohash_by_id.remove(id)?;
        inner.by_geohash.remove(&(geohash, id.to_string()))
    }

    /// Fetch an entity by id.
    pub fn get(&self, id: &str) -> Option<IndexedEntity> {
        let inner = self.inner.read().expect("InMemoryStore lock poisoned");
        let geohash = inner.geohash_by_id.get(id)?;
        inner
            .by_geohash
            .get(&(geohash.clone(), id.to_string()))
            .cloned()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .expect("InMemoryStore lock poisoned")
            .geohash_by_id
            .len()
    }

    /// Whether the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Synchronous prefix scan.
    pub fn scan_prefix(&self, prefix: &str) -> Vec<IndexedEntity> {
        let inner = self.inner.read().expect("InMemoryStore lock poisoned");
        let start = (prefix.to_string(), String::new());
        let entities: Vec<IndexedEntity> = inner
            .by_geohash
            .range(start..)
            .take_while(|((geohash, _), _)| geohash.starts_with(prefix))
            .map(|(_, entity)| entity.clone())
            .collect();
        trace!(prefix, count = entities.len(), "prefix scan");
        entities
    }
}

impl GeohashStore for InMemoryStore {
    fn lookup_by_geohash_prefix(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<Vec<IndexedEntity>, StoreError>> + Send {
        let result = Ok(self.scan_prefix(prefix));
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn sample_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.upsert("sp-1", point(-23.55, -46.63)).unwrap();
        store.upsert("sp-2", point(-23.56, -46.64)).unwrap();
        store.upsert("rio", point(-22.90, -43.17)).unwrap();
        store.upsert("nyc", point(40.7128, -74.0060)).unwrap();
        store
    }

    #[test]
    fn test_scan_prefix_returns_only_matching() {
        let store = sample_store();
        let ids: Vec<String> = store.scan_prefix("6gy").into_iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"sp-1".to_string()));
        assert!(ids.contains(&"sp-2".to_string()));
    }

    #[test]
    fn test_empty_prefix_returns_everything() {
        assert_eq!(sample_store().scan_prefix("").len(), 4);
    }

    #[test]
    fn test_upsert_moves_entity_between_cells() {
        let store = sample_store();
        let previous = store.upsert("sp-1", point(40.71, -74.0)).unwrap();
        assert_eq!(previous.unwrap().geohash, "6gyf4bv561zf");

        assert_eq!(store.len(), 4);
        assert_eq!(store.scan_prefix("6gy").len(), 1);
        assert_eq!(store.scan_prefix("dr5").len(), 2);
        assert!(store.get("sp-1").unwrap().is_consistent());
    }

    #[test]
    fn test_remove() {
        let store = sample_store();
        let removed = store.remove("rio").unwrap();
        assert_eq!(removed.id, "rio");
        assert!(store.get("rio").is_none());
        assert!(store.remove("rio").is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_from_entities_recomputes_geohash() {
        let mut stale = IndexedEntity::new("x", point(0.0, 0.0)).unwrap();
        stale.geohash = "zzzzzzzzzzzz".to_string();
        let store = InMemoryStore::from_entities(vec![stale]).unwrap();
        assert!(store.get("x").unwrap().is_consistent());
        assert!(store.scan_prefix("zz").is_empty());
    }

    #[tokio::test]
    async fn test_lookup_by_geohash_prefix() {
        let store = sample_store();
        let found = store.lookup_by_geohash_prefix("dr5").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "nyc");
    }
}
