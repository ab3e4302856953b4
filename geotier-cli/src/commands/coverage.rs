//! `coverage` command: show which prefixes a query would scan.

use geotier::index::ProximityError;
use geotier::store::InMemoryStore;

use super::common::{describe_area, AreaArgs, CenterArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Print the coverage set for a center and search area.
pub fn run(runner: &CliRunner, center: &CenterArgs, area: &AreaArgs) -> Result<(), CliError> {
    let point = center.point()?;
    let area = area.area();

    // Coverage needs no data; an empty store carries the configured tiers
    let index = runner.create_index(InMemoryStore::new())?;
    let radius_m = index.resolve_radius(area)?;
    let coverage = index.coverage(&point, area)?;

    println!("Center:    {:.6}, {:.6}", point.latitude(), point.longitude());
    println!("Area:      {}", describe_area(area, radius_m));
    println!(
        "Precision: {} (table suggests {})",
        coverage.precision(),
        index
            .precision_table()
            .prefix_length_for_radius(radius_m)
            .map_err(ProximityError::from)?
    );
    if coverage.is_global() {
        println!("Coverage:  whole globe ({} prefixes)", coverage.len());
    } else {
        println!("Coverage:  {} prefixes", coverage.len());
    }
    for prefix in coverage.iter() {
        println!("  {}", prefix);
    }
    Ok(())
}
