//! `query` command: run a nearby search over entities loaded from a file.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use tracing::info;

use geotier::coord::GeoPoint;
use geotier::store::{InMemoryStore, IndexedEntity};

use super::common::{describe_area, AreaArgs, CenterArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `geotier query`.
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// JSON file with an array of {"id", "lat", "lon"} records
    #[arg(long)]
    pub entities: PathBuf,

    #[command(flatten)]
    pub center: CenterArgs,

    #[command(flatten)]
    pub area: AreaArgs,

    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

/// One record of the entity file.
#[derive(Debug, Deserialize)]
struct EntityRecord {
    id: String,
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    longitude: f64,
}

/// Run a query and print one page.
pub fn run(runner: &CliRunner, args: QueryArgs) -> Result<(), CliError> {
    let center = args.center.point()?;
    let area = args.area.area();
    let page_size = args
        .page_size
        .unwrap_or(runner.config().proximity.default_page_size);

    let store = load_entities(&args.entities)?;
    info!(entities = store.len(), path = %args.entities.display(), "entities loaded");

    let index = runner.create_index(store)?;
    let radius_m = index.resolve_radius(area)?;
    let page = runner.runtime()?.block_on(index.query(
        &center,
        area,
        page_size,
        args.cursor.as_deref(),
    ))?;

    if args.json {
        let json = serde_json::to_string_pretty(&page)
            .map_err(|e| CliError::Config(format!("failed to serialize result: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "{} of {} within {} of {:.5}, {:.5}",
        page.hits.len(),
        page.total,
        describe_area(area, radius_m),
        center.latitude(),
        center.longitude()
    );
    for hit in &page.hits {
        println!(
            "  {:>10}  {:<24} {}",
            geotier::config::format_distance(hit.distance_m.round()),
            hit.entity.id,
            hit.entity.geohash
        );
    }
    if let Some(cursor) = &page.next_cursor {
        println!();
        println!("More results: --cursor {}", cursor);
    }
    Ok(())
}

/// Read the entity file into an in-memory store.
fn load_entities(path: &Path) -> Result<InMemoryStore, CliError> {
    let file_error = |reason: String| CliError::EntityFile {
        path: path.to_path_buf(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
    let records: Vec<EntityRecord> =
        serde_json::from_str(&content).map_err(|e| file_error(e.to_string()))?;

    let entities = records
        .into_iter()
        .map(|record| {
            let position = GeoPoint::new(record.latitude, record.longitude)
                .map_err(|e| file_error(format!("entity '{}': {}", record.id, e)))?;
            IndexedEntity::new(record.id, position).map_err(|e| file_error(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    InMemoryStore::from_entities(entities).map_err(|e| file_error(e.to_string()))
}
