use crate::core::constants::{MAX_PRECISION, METERS_PER_DEGREE};
use crate::index::encode::encode_with_precision;
use crate::util::error::GeohashError;
use log::debug;

/// Configurable version of [`geohash_range`](crate::geohash_range).
///
/// Defaults to a zero radius, full precision and the flat 111034 meters per
/// degree factor, which reproduces `geohash_range` exactly.
///
/// # Example
/// ```
/// use geohash_rs::RangeQuery;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let (lower, upper) = RangeQuery::new(42.6, -5.6)
///     .radius(1000.0)
///     .precision(7)
///     .build()?;
/// assert_eq!(lower, "ezs426q");
/// assert_eq!(upper, "ezs42ev");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeQuery {
    latitude: f64,
    longitude: f64,
    radius_meters: f64,
    precision: usize,
    meters_per_degree: f64,
}

impl RangeQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_meters: 0.0,
            precision: MAX_PRECISION,
            meters_per_degree: METERS_PER_DEGREE,
        }
    }

    pub fn radius(mut self, radius_meters: f64) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn meters_per_degree(mut self, meters_per_degree: f64) -> Self {
        self.meters_per_degree = meters_per_degree;
        self
    }

    /// Offset in degrees applied to each axis.
    pub fn degree_offset(&self) -> f64 {
        self.radius_meters / self.meters_per_degree / 2.0
    }

    /// Returns `(lower, upper)` hashes at the configured precision.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidPrecision`] - precision is not in 1-11
    pub fn build(&self) -> Result<(String, String), GeohashError> {
        let diff = self.degree_offset();
        debug!("range query {:?}, +/- {} degrees", self, diff);

        let upper =
            encode_with_precision(self.latitude + diff, self.longitude + diff, self.precision)?;
        let lower =
            encode_with_precision(self.latitude - diff, self.longitude - diff, self.precision)?;
        Ok((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::range::geohash_range;

    #[test]
    fn test_defaults_match_geohash_range() -> Result<(), GeohashError> {
        let query = RangeQuery::new(42.6, -5.6).radius(1000.0);
        assert_eq!(query.build()?, geohash_range(42.6, -5.6, 1000.0));
        Ok(())
    }

    #[test]
    fn test_custom_precision() -> Result<(), GeohashError> {
        let (lower, upper) = RangeQuery::new(42.6, -5.6)
            .radius(1000.0)
            .precision(5)
            .build()?;
        assert_eq!(lower, "ezs42");
        assert_eq!(upper, "ezs42");
        Ok(())
    }

    #[test]
    fn test_meters_per_degree_scales_offset() {
        let query = RangeQuery::new(0.0, 0.0)
            .radius(2000.0)
            .meters_per_degree(1000.0);
        assert_eq!(query.degree_offset(), 1.0);
    }

    #[test]
    fn test_invalid_precision() {
        let result = RangeQuery::new(42.6, -5.6).precision(12).build();
        assert_eq!(result, Err(GeohashError::InvalidPrecision(12)));
    }
}
