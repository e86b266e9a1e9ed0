use geohash_rs::{GeohashCell, RangeQuery, dimension_table, precision_for_radius};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let lon = -5.6;
    let lat = 42.6;
    let radius = 1000.0;

    let cell = GeohashCell::from_wgs84(&(lon, lat), precision_for_radius(radius))?;
    info!("cell {} at precision {}", cell.id, cell.precision);

    println!("Geohash: {}", cell.id);
    println!("Center: ({}, {})", cell.latitude(), cell.longitude());
    println!("Bounds: {:?}", cell.bounds);
    println!("Neighbors: {}", serde_json::to_string(&cell.neighbors()?)?);

    let (lower, upper) = RangeQuery::new(lat, lon).radius(radius).build()?;
    println!("Range ({}m): {} .. {}", radius, lower, upper);

    let table = dimension_table();
    let (height, width) = table.cell_size(cell.precision)?;
    println!("Cell size: {} x {} degrees", height, width);

    Ok(())
}
