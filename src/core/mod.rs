pub mod constants;
pub mod dimensions;
pub mod tables;

pub use constants::{
    BASE32, BITS, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION, METERS_PER_DEGREE, char_index,
};
pub use dimensions::{
    DimensionTable, dimension_table, precision_for_extent, precision_for_radius,
    validate_precision,
};
pub use tables::{Direction, Parity};
