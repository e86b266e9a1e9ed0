use crate::core::constants::{
    BITS, BITS_PER_CHAR, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION, index_char,
};
use crate::core::dimensions::validate_precision;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;

/// Encodes a coordinate as a full-precision (11 character) geohash.
///
/// Bits alternate between longitude and latitude, longitude first. Each bit
/// halves the active interval; a coordinate exactly on the midpoint falls into
/// the lower half.
///
/// # Example
/// ```
/// use geohash_rs::encode;
///
/// assert_eq!(encode(42.6, -5.6), "ezs42e44yx9");
/// ```
pub fn encode(latitude: f64, longitude: f64) -> String {
    encode_to_len(latitude, longitude, MAX_PRECISION)
}

/// Encodes a coordinate as a geohash of `precision` characters.
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] - `precision` is not in 1-11
pub fn encode_with_precision(
    latitude: f64,
    longitude: f64,
    precision: usize,
) -> Result<String, GeohashError> {
    let precision = validate_precision(precision)?;
    Ok(encode_to_len(latitude, longitude, precision))
}

/// Encodes anything implementing [`Coordinate`] (`(lon, lat)` tuples or `Point`).
///
/// # Example
/// ```
/// use geohash_rs::encode_coord;
/// use geo_types::point;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let pt = point! { x: -5.6, y: 42.6 };
/// assert_eq!(encode_coord(&pt, 5)?, "ezs42");
/// # Ok(())
/// # }
/// ```
pub fn encode_coord<C: Coordinate>(coord: &C, precision: usize) -> Result<String, GeohashError> {
    encode_with_precision(coord.lat(), coord.lon(), precision)
}

fn encode_to_len(latitude: f64, longitude: f64, precision: usize) -> String {
    let mut lat = LATITUDE_RANGE;
    let mut lon = LONGITUDE_RANGE;
    let mut hash = String::with_capacity(precision);

    let mut even = true;
    let mut bit = 0;
    let mut ch = 0usize;

    while hash.len() < precision {
        let (interval, value) = if even {
            (&mut lon, longitude)
        } else {
            (&mut lat, latitude)
        };

        let mid = (interval[0] + interval[1]) / 2.0;
        if value > mid {
            ch |= BITS[bit] as usize;
            interval[0] = mid;
        } else {
            interval[1] = mid;
        }

        even = !even;
        if bit < BITS_PER_CHAR - 1 {
            bit += 1;
        } else {
            hash.push(index_char(ch));
            bit = 0;
            ch = 0;
        }
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_reference_vector() {
        assert_eq!(encode(42.6, -5.6), "ezs42e44yx9");
        assert_eq!(encode(57.64911, 10.40744), "u4pruydqqvj");
    }

    #[test]
    fn test_full_length() {
        for (lat, lon) in [(0.0, 0.0), (-90.0, -180.0), (90.0, 180.0), (-33.9, 151.2)] {
            assert_eq!(encode(lat, lon).len(), MAX_PRECISION);
        }
    }

    #[test]
    fn test_domain_corners() {
        assert_eq!(encode(-90.0, -180.0), "00000000000");
        assert_eq!(encode(90.0, 180.0), "zzzzzzzzzzz");
    }

    #[test]
    fn test_midpoint_ties_go_low() {
        // (0, 0) sits on the first split of both axes
        assert_eq!(encode(0.0, 0.0), "7zzzzzzzzzz");
    }

    #[test]
    fn test_precision_is_prefix() -> Result<(), GeohashError> {
        let full = encode(42.6, -5.6);
        for p in 1..=MAX_PRECISION {
            assert_eq!(encode_with_precision(42.6, -5.6, p)?, full[..p]);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            encode_with_precision(42.6, -5.6, 0),
            Err(GeohashError::InvalidPrecision(0))
        );
        assert_eq!(
            encode_with_precision(42.6, -5.6, 12),
            Err(GeohashError::InvalidPrecision(12))
        );
    }

    #[test]
    fn test_tuple_and_point_same_result() -> Result<(), GeohashError> {
        let from_tuple = encode_coord(&(-5.6, 42.6), 9)?;
        let from_point = encode_coord(&Point::new(-5.6, 42.6), 9)?;
        assert_eq!(from_tuple, from_point);
        assert_eq!(from_tuple, "ezs42e44y");
        Ok(())
    }
}
