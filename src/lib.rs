//! # geohash-rs
//!
//! Base-32 geohashes: encode a WGS84 coordinate to a short string whose
//! prefixes name ever smaller rectangles, decode it back to a bounding box,
//! step to adjacent cells and size cells for radius lookups.
//!
//! ### 1. Free functions
//!
//! ```
//! use geohash_rs::{Direction, adjacent, decode, encode, neighbors};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let hash = encode(42.6, -5.6);
//! assert_eq!(hash, "ezs42e44yx9");
//!
//! let cell = decode(&hash[..5])?;
//! assert!(cell.latitude.contains(42.6));
//!
//! assert_eq!(adjacent("ezs42", Direction::Top)?, "ezs48");
//! assert_eq!(neighbors("ezs42")?.iter().count(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeohashCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::GeohashCell;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_wgs84(&(-5.6, 42.6), 7)?;
//! println!("{} {:?}", cell.id, cell.bounds);
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Range lookups
//!
//! `geohash_range` brackets a point with a lower and upper hash using a flat
//! 111034 meters-per-degree conversion. The conversion ignores the narrowing
//! of longitude degrees away from the equator, so ranges get wider in real
//! distance toward the poles. [`RangeQuery`] exposes the same lookup with a
//! configurable precision and factor.
//!
//! ```
//! use geohash_rs::{geohash_range, precision_for_radius};
//!
//! let (lower, upper) = geohash_range(42.6, -5.6, 1000.0);
//! assert!(lower < upper);
//! assert_eq!(precision_for_radius(1000.0), 5);
//! ```

pub mod api;
pub mod core;
pub mod index;
pub mod util;

pub use api::{GeohashCell, RangeQuery, decode_batch, encode_batch};
pub use crate::core::{
    BASE32, BITS, DimensionTable, Direction, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION,
    METERS_PER_DEGREE, Parity, dimension_table, precision_for_extent, precision_for_radius,
};
pub use index::{
    DecodedHash, Interval, Neighbors, adjacent, adjacent_str, decode, encode, encode_coord,
    encode_with_precision, geohash_range, neighbors,
};
pub use util::{Coordinate, GeohashError};

pub use geo_types;
