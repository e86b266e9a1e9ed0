use crate::core::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::util::error::GeohashError;
use geo_types::Point;

/// Trait for types that can provide a WGS84 position.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`, both in
/// `(longitude, latitude)` order so they line up with `geo_types` conventions.
pub trait Coordinate {
    /// Returns the longitude (x).
    fn lon(&self) -> f64;
    /// Returns the latitude (y).
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

/// Checks that a coordinate lies inside the WGS84 latitude/longitude domain.
pub fn validate_wgs84<C: Coordinate>(coord: &C) -> Result<(), GeohashError> {
    let (lat, lon) = (coord.lat(), coord.lon());
    let lat_ok = (LATITUDE_RANGE[0]..=LATITUDE_RANGE[1]).contains(&lat);
    let lon_ok = (LONGITUDE_RANGE[0]..=LONGITUDE_RANGE[1]).contains(&lon);

    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(GeohashError::InvalidCoordinate {
            latitude: lat,
            longitude: lon,
        })
    }
}
