//! Proximity index: distance-ranked "nearby" queries over a geohash store.
//!
//! # Query flow
//!
//! ```text
//! (center, radius | tier, page size, cursor)
//!   → coverage set (≤ 9 prefixes; the 8-cell polar row near a pole,
//!     32 only when the disk spans every latitude row)
//!   → concurrent prefix lookups against the store
//!   → exact haversine distance, sort by (distance, id)
//!   → de-duplicate by id, keeping the nearest copy
//!   → drop anything beyond the radius, slice after the cursor
//!   → page + next cursor
//! ```
//!
//! The index holds no mutable state; each query's working set is local to
//! the call. The store is injected at construction.
//!
//! # Usage
//!
//! ```
//! use geotier::coord::GeoPoint;
//! use geotier::index::ProximityIndex;
//! use geotier::proximity::ProximityTier;
//! use geotier::store::InMemoryStore;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = InMemoryStore::new();
//! store.upsert("cafe", GeoPoint::new(-23.55, -46.63).unwrap()).unwrap();
//! store.upsert("beach", GeoPoint::new(-22.90, -43.17).unwrap()).unwrap();
//!
//! let index = ProximityIndex::new(store);
//! let center = GeoPoint::new(-23.5505, -46.6333).unwrap();
//! let page = index.query(&center, ProximityTier::Radius5Km, 10, None).await.unwrap();
//!
//! assert_eq!(page.hits.len(), 1);
//! assert_eq!(page.hits[0].entity.id, "cafe");
//! # });
//! ```

mod cursor;
mod types;

pub use cursor::{Cursor, CursorParseError};
pub use types::{Hit, ProximityError, QueryResult, SearchArea};

use std::cmp::Ordering;
use std::collections::HashSet;

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, trace, warn};

use crate::config::ProximityConfig;
use crate::coord::GeoPoint;
use crate::coverage::{BoundingBoxQuery, CoverageSet};
use crate::proximity::{PrecisionError, PrecisionTable};
use crate::store::{GeohashStore, IndexedEntity};

/// Query façade over a [`GeohashStore`].
pub struct ProximityIndex<S> {
    store: S,
    config: ProximityConfig,
    precision: PrecisionTable,
    bounding_box: BoundingBoxQuery,
}

impl<S: GeohashStore> ProximityIndex<S> {
    /// Create an index with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: ProximityConfig::default(),
            precision: PrecisionTable::default(),
            bounding_box: BoundingBoxQuery::default(),
        }
    }

    /// Create an index with a custom configuration.
    ///
    /// Fails with [`ProximityError::InvalidRadius`] if a tier radius is not
    /// a positive number of meters.
    pub fn with_config(store: S, config: ProximityConfig) -> Result<Self, ProximityError> {
        let precision = PrecisionTable::new(*config.tier_radii())?;
        Ok(Self {
            store,
            config,
            precision,
            bounding_box: BoundingBoxQuery::new(config.coverage_margin()),
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Tier-to-precision table in use.
    pub fn precision_table(&self) -> &PrecisionTable {
        &self.precision
    }

    /// Radius in meters for a search area.
    pub fn resolve_radius(&self, area: SearchArea) -> Result<f64, ProximityError> {
        let radius_m = match area {
            SearchArea::Radius(radius_m) => radius_m,
            SearchArea::Tier(tier) => self.precision.radius_for_tier(tier),
        };
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(PrecisionError::InvalidRadius(radius_m).into());
        }
        Ok(radius_m)
    }

    /// Prefixes that would be scanned for a search area.
    pub fn coverage(
        &self,
        center: &GeoPoint,
        area: impl Into<SearchArea>,
    ) -> Result<CoverageSet, ProximityError> {
        let radius_m = self.resolve_radius(area.into())?;
        Ok(self.bounding_box.coverage(center, radius_m)?)
    }

    /// Run a nearby query.
    ///
    /// `page_size` must be between 1 and the configured maximum. `cursor`
    /// is the `next_cursor` of a previous page for the same center and area.
    #[instrument(
        skip(self, center, area, cursor),
        fields(lat = center.latitude(), lon = center.longitude())
    )]
    pub async fn query(
        &self,
        center: &GeoPoint,
        area: impl Into<SearchArea>,
        page_size: usize,
        cursor: Option<&str>,
    ) -> Result<QueryResult, ProximityError> {
        self.check_page_size(page_size)?;
        let cursor = cursor.map(str::parse::<Cursor>).transpose()?;
        let radius_m = self.resolve_radius(area.into())?;
        let coverage = self.bounding_box.coverage(center, radius_m)?;

        let batches = self.lookup_all(&coverage).await?;
        let candidate_count: usize = batches.iter().map(Vec::len).sum();

        let ranked = rank_candidates(center, radius_m, batches);
        let total = ranked.len();

        let start = match &cursor {
            Some(cursor) => {
                ranked.partition_point(|hit| !cursor.precedes(hit.distance_m, &hit.entity.id))
            }
            None => 0,
        };
        let end = start.saturating_add(page_size).min(total);
        let hits: Vec<Hit> = ranked.into_iter().skip(start).take(end - start).collect();

        let next_cursor = if end < total {
            hits.last()
                .map(|hit| Cursor::new(hit.distance_m, hit.entity.id.clone()).to_string())
        } else {
            None
        };

        info!(
            radius_m,
            precision = coverage.precision(),
            prefixes = coverage.len(),
            candidates = candidate_count,
            matched = total,
            returned = hits.len(),
            "proximity query complete"
        );

        Ok(QueryResult {
            hits,
            next_cursor,
            total,
        })
    }

    /// Run a nearby query that stops when `cancel` fires.
    ///
    /// Cancellation drops every in-flight store lookup and returns
    /// [`ProximityError::Cancelled`].
    pub async fn query_with_cancellation(
        &self,
        center: &GeoPoint,
        area: impl Into<SearchArea>,
        page_size: usize,
        cursor: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<QueryResult, ProximityError> {
        if cancel.is_cancelled() {
            return Err(ProximityError::Cancelled);
        }
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("proximity query cancelled by caller");
                Err(ProximityError::Cancelled)
            }
            result = self.query(center, area, page_size, cursor) => result,
        }
    }

    fn check_page_size(&self, requested: usize) -> Result<(), ProximityError> {
        let max = self.config.max_page_size();
        if requested == 0 || requested > max {
            return Err(ProximityError::InvalidPageSize { requested, max });
        }
        Ok(())
    }

    /// Look up every prefix concurrently; the first failure aborts the rest.
    async fn lookup_all(
        &self,
        coverage: &CoverageSet,
    ) -> Result<Vec<Vec<IndexedEntity>>, ProximityError> {
        stream::iter(coverage.iter())
            .map(|prefix| async move {
                trace!(prefix, "store lookup");
                self.store
                    .lookup_by_geohash_prefix(prefix)
                    .await
                    .map_err(|source| {
                        warn!(prefix, error = %source, "store lookup failed");
                        ProximityError::StoreUnavailable {
                            prefix: prefix.to_string(),
                            source,
                        }
                    })
            })
            .buffer_unordered(self.config.max_concurrent_lookups())
            .try_collect()
            .await
    }
}

/// Measure, sort, de-duplicate and filter by radius.
///
/// A store may return one id more than once, possibly at different
/// positions. Sorting first keeps the nearest copy regardless of the order
/// lookups completed in.
fn rank_candidates(
    center: &GeoPoint,
    radius_m: f64,
    batches: Vec<Vec<IndexedEntity>>,
) -> Vec<Hit> {
    let mut hits: Vec<Hit> = batches
        .into_iter()
        .flatten()
        .map(|entity| {
            let distance_m = center.distance_to(&entity.position);
            Hit { entity, distance_m }
        })
        .collect();
    hits.sort_by(compare_hits);

    let mut seen: HashSet<String> = HashSet::new();
    hits.retain(|hit| seen.insert(hit.entity.id.clone()) && hit.distance_m <= radius_m);
    hits
}

fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    cursor::rank(a.distance_m, &a.entity.id, b.distance_m, &b.entity.id)
}
