//! Geohash inspection commands: `encode`, `decode`, `neighbors`.

use geotier::geohash::{decode, neighbor, Direction, GeohashCell, MAX_PRECISION};

use super::common::CenterArgs;
use crate::error::CliError;

/// Encode a point at the given precision.
pub fn run_encode(center: &CenterArgs, precision: usize) -> Result<(), CliError> {
    let cell = GeohashCell::encode(&center.point()?, precision)?;
    println!("{}", cell);
    Ok(())
}

/// Print the bounds and center of a geohash.
pub fn run_decode(code: &str) -> Result<(), CliError> {
    let (bounds, center) = decode(code)?;

    println!("Geohash:   {}", code);
    println!("Precision: {} of {}", code.len(), MAX_PRECISION);
    println!("Center:    {:.6}, {:.6}", center.latitude(), center.longitude());
    println!("Bounds:    {}", bounds);
    println!(
        "Size:      {:.0} m x {:.0} m",
        bounds.width_m(),
        bounds.height_m()
    );
    Ok(())
}

/// Print the eight neighbors of a geohash by direction.
pub fn run_neighbors(code: &str) -> Result<(), CliError> {
    GeohashCell::parse(code)?;

    for direction in Direction::ALL {
        match neighbor(code, direction)? {
            Some(adjacent) => println!("{:<2}  {}", direction, adjacent),
            None => println!("{:<2}  (beyond pole)", direction),
        }
    }
    Ok(())
}
