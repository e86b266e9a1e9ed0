pub mod adjacency;
pub mod decode;
pub mod encode;
pub mod range;

pub use adjacency::{Neighbors, adjacent, adjacent_str, neighbors};
pub use decode::{DecodedHash, Interval, decode};
pub use encode::{encode, encode_coord, encode_with_precision};
pub use range::geohash_range;
