//! Integration tests for the proximity query path.
//!
//! These tests exercise the public API end to end:
//! - Encoding a known city and decoding it back
//! - Tiered "nearby" queries against the in-memory store
//! - Coverage across the antimeridian
//! - Cursor pagination against a single large page
//! - Ranking and radius guarantees over random data

use std::collections::HashSet;

use proptest::prelude::*;
use tokio_util::sync::CancellationToken;

use geotier::config::ProximityConfig;
use geotier::coord::{destination, GeoPoint};
use geotier::coverage::coverage;
use geotier::geohash::{decode, encode, neighbors, MAX_PRECISION};
use geotier::index::{ProximityError, ProximityIndex};
use geotier::proximity::ProximityTier;
use geotier::store::{IndexedEntity, InMemoryStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn sao_paulo() -> GeoPoint {
    GeoPoint::new(-23.5505, -46.6333).unwrap()
}

/// Entities spaced every 700 m along a north-east line from São Paulo.
fn line_of_entities(count: usize) -> InMemoryStore {
    let store = InMemoryStore::new();
    for i in 0..count {
        let position = destination(&sao_paulo(), 45.0, 700.0 * (i + 1) as f64);
        store.upsert(format!("entity-{i:02}"), position).unwrap();
    }
    store
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// =============================================================================
// Known locations
// =============================================================================

#[test]
fn test_sao_paulo_encodes_deterministically_and_decodes_to_containing_cell() {
    let point = sao_paulo();

    let code = encode(&point, 8).unwrap();
    assert_eq!(code, "6gyf4bf8");
    assert_eq!(encode(&point, 8).unwrap(), code);

    let (bounds, center) = decode(&code).unwrap();
    assert!(bounds.contains(&point));
    assert!(bounds.contains(&center));
}

#[tokio::test]
async fn test_sao_paulo_5km_tier_includes_neighbor_and_excludes_rio() {
    let store = InMemoryStore::new();
    store.upsert("nearby", GeoPoint::new(-23.55, -46.63).unwrap()).unwrap();
    store.upsert("rio", GeoPoint::new(-22.90, -43.17).unwrap()).unwrap();
    let index = ProximityIndex::new(store);

    let page = index
        .query(&sao_paulo(), ProximityTier::Radius5Km, 20, None)
        .await
        .unwrap();

    let ids: Vec<&str> = page.hits.iter().map(|h| h.entity.id.as_str()).collect();
    assert_eq!(ids, vec!["nearby"]);

    // About 357 km away: beyond the 300 km state tier
    let page = index
        .query(&sao_paulo(), ProximityTier::State, 20, None)
        .await
        .unwrap();
    let ids: Vec<&str> = page.hits.iter().map(|h| h.entity.id.as_str()).collect();
    assert_eq!(ids, vec!["nearby"]);

    let page = index
        .query(&sao_paulo(), ProximityTier::Country, 20, None)
        .await
        .unwrap();
    let ids: Vec<&str> = page.hits.iter().map(|h| h.entity.id.as_str()).collect();
    assert_eq!(ids, vec!["nearby", "rio"]);
    assert!(page.hits[1].distance_m > 340_000.0 && page.hits[1].distance_m < 380_000.0);
}

// =============================================================================
// Antimeridian
// =============================================================================

#[test]
fn test_coverage_on_antimeridian_wraps_instead_of_failing() {
    let edge = GeoPoint::new(0.0, -180.0).unwrap();

    let set = coverage(&edge, 5_000.0).unwrap();
    let across = encode(&GeoPoint::new(0.0, 179.99).unwrap(), MAX_PRECISION).unwrap();
    assert!(
        set.contains_geohash(&across),
        "coverage {:?} should reach across the antimeridian",
        set.prefixes()
    );

    let home = encode(&edge, 1).unwrap();
    let ring = neighbors(&home).unwrap();
    assert!(ring.iter().any(|code| code.starts_with('r')));
}

#[tokio::test]
async fn test_query_finds_entity_across_antimeridian() {
    let store = InMemoryStore::new();
    store.upsert("fiji-side", GeoPoint::new(0.0, 179.99).unwrap()).unwrap();
    store.upsert("samoa-side", GeoPoint::new(0.0, -179.99).unwrap()).unwrap();
    let index = ProximityIndex::new(store);

    let page = index
        .query(&GeoPoint::new(0.0, -180.0).unwrap(), 5_000.0, 20, None)
        .await
        .unwrap();

    let ids: HashSet<&str> = page.hits.iter().map(|h| h.entity.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["fiji-side", "samoa-side"]));
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn test_two_pages_of_two_equal_one_page_of_four() {
    let index = ProximityIndex::new(line_of_entities(6));
    let center = sao_paulo();

    let single = index
        .query(&center, ProximityTier::Radius5Km, 4, None)
        .await
        .unwrap();
    let first = index
        .query(&center, ProximityTier::Radius5Km, 2, None)
        .await
        .unwrap();
    let second = index
        .query(
            &center,
            ProximityTier::Radius5Km,
            2,
            first.next_cursor.as_deref(),
        )
        .await
        .unwrap();

    assert_eq!(first.hits, single.hits[..2]);
    assert_eq!(second.hits, single.hits[2..4]);
    assert_eq!(second.hits[0].entity.id, "entity-02");
    assert_eq!(second.hits[1].entity.id, "entity-03");
}

#[tokio::test]
async fn test_walking_every_page_visits_each_entity_once() {
    let index = ProximityIndex::new(line_of_entities(8));
    let center = sao_paulo();

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = index
            .query(&center, ProximityTier::Radius5Km, 3, cursor.as_deref())
            .await
            .unwrap();
        seen.extend(page.hits.into_iter().map(|h| h.entity.id));
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    // 700 m spacing: entity-06 sits at 4.9 km, entity-07 at 5.6 km is outside
    let expected: Vec<String> = (0..7).map(|i| format!("entity-{i:02}")).collect();
    assert_eq!(seen, expected);
}

// =============================================================================
// Configuration and cancellation
// =============================================================================

#[tokio::test]
async fn test_custom_tier_radius_changes_results() {
    let config = ProximityConfig::new().with_tier_radius(ProximityTier::Radius5Km, 1_000.0);
    let index = ProximityIndex::with_config(line_of_entities(4), config).unwrap();

    let page = index
        .query(&sao_paulo(), ProximityTier::Radius5Km, 20, None)
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.hits[0].entity.id, "entity-00");
}

#[tokio::test]
async fn test_cancelled_token_short_circuits() {
    let index = ProximityIndex::new(line_of_entities(3));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = index
        .query_with_cancellation(&sao_paulo(), ProximityTier::City, 20, None, &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, ProximityError::Cancelled));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Every hit is within the radius, hits are sorted, and nothing within
    /// the radius is missed.
    #[test]
    fn prop_query_is_sorted_bounded_and_complete(
        lat in -80.0f64..80.0,
        lon in -180.0f64..180.0,
        radius_m in 100.0f64..50_000.0,
        placements in prop::collection::vec((0.0f64..360.0, 0.0f64..2.0), 0..40),
    ) {
        let center = GeoPoint::new(lat, lon).unwrap();
        let entities: Vec<IndexedEntity> = placements
            .iter()
            .enumerate()
            .map(|(i, (bearing, factor))| {
                let position = destination(&center, *bearing, radius_m * factor);
                IndexedEntity::new(format!("e{i}"), position).unwrap()
            })
            .collect();
        let expected = entities
            .iter()
            .filter(|e| center.distance_to(&e.position) <= radius_m)
            .count();

        let index = ProximityIndex::new(InMemoryStore::from_entities(entities).unwrap());
        let page = runtime()
            .block_on(index.query(&center, radius_m, 100, None))
            .unwrap();

        prop_assert_eq!(page.total, expected);
        prop_assert_eq!(page.hits.len(), expected);
        for hit in &page.hits {
            prop_assert!(hit.distance_m <= radius_m);
        }
        for pair in page.hits.windows(2) {
            prop_assert!(pair[0].distance_m <= pair[1].distance_m);
        }
    }
}
