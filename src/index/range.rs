use crate::core::constants::METERS_PER_DEGREE;
use crate::index::encode::encode;
use log::debug;

/// Returns `(lower, upper)` full-precision hashes bracketing a square around
/// a point.
///
/// The radius is converted with a flat `radius / 111034` meters-to-degrees
/// factor and halved, then added to and subtracted from both latitude and
/// longitude. The factor is not corrected for latitude, so the longitude span
/// shrinks in real distance toward the poles.
///
/// # Example
/// ```
/// use geohash_rs::geohash_range;
///
/// let (lower, upper) = geohash_range(42.6, -5.6, 1000.0);
/// assert_eq!(lower, "ezs426qbv85");
/// assert_eq!(upper, "ezs42evmprp");
/// ```
pub fn geohash_range(latitude: f64, longitude: f64, radius_meters: f64) -> (String, String) {
    let diff = radius_meters / METERS_PER_DEGREE / 2.0;
    debug!(
        "geohash range around ({}, {}) radius {}m, +/- {} degrees",
        latitude, longitude, radius_meters, diff
    );

    let upper = encode(latitude + diff, longitude + diff);
    let lower = encode(latitude - diff, longitude - diff);
    (lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_PRECISION;

    #[test]
    fn test_range_reference() {
        let (lower, upper) = geohash_range(42.6, -5.6, 1000.0);
        assert_eq!(lower, "ezs426qbv85");
        assert_eq!(upper, "ezs42evmprp");
        assert_eq!(lower.len(), MAX_PRECISION);
        assert_eq!(upper.len(), MAX_PRECISION);
        assert!(lower < upper);
    }

    #[test]
    fn test_zero_radius_collapses() {
        let (lower, upper) = geohash_range(42.6, -5.6, 0.0);
        assert_eq!(lower, upper);
        assert_eq!(lower, encode(42.6, -5.6));
    }
}
