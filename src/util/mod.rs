pub mod coord;
pub mod error;

pub use coord::{Coordinate, validate_wgs84};
pub use error::GeohashError;
