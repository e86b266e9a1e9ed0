use crate::core::dimensions::validate_precision;
use crate::index::decode::{DecodedHash, decode};
use crate::index::encode::encode_coord;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use log::debug;
use rayon::prelude::*;

/// Encodes many coordinates in parallel, preserving input order.
///
/// # Example
/// ```
/// use geohash_rs::encode_batch;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let hashes = encode_batch(&[(-5.6, 42.6), (10.40744, 57.64911)], 5)?;
/// assert_eq!(hashes, vec!["ezs42", "u4pru"]);
/// # Ok(())
/// # }
/// ```
pub fn encode_batch<C>(coords: &[C], precision: usize) -> Result<Vec<String>, GeohashError>
where
    C: Coordinate + Sync,
{
    let precision = validate_precision(precision)?;
    debug!(
        "encoding {} coordinates at precision {}",
        coords.len(),
        precision
    );

    coords
        .par_iter()
        .map(|c| encode_coord(c, precision))
        .collect()
}

/// Decodes many hashes in parallel, preserving input order.
///
/// Fails on the first invalid hash found.
pub fn decode_batch<S>(hashes: &[S]) -> Result<Vec<DecodedHash>, GeohashError>
where
    S: AsRef<str> + Sync,
{
    debug!("decoding {} geohashes", hashes.len());
    hashes.par_iter().map(|h| decode(h.as_ref())).collect()
}
