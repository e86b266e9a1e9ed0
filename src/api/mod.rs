pub mod batch;
pub mod cell;
pub mod range_query;

pub use batch::{decode_batch, encode_batch};
pub use cell::GeohashCell;
pub use range_query::RangeQuery;
