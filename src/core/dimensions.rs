use crate::core::constants::{LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION, METERS_PER_DEGREE};
use crate::util::error::GeohashError;
use serde::{Deserialize, Serialize};

/// Cell height (latitude degrees) and width (longitude degrees) for every
/// geohash length from 0 to [`MAX_PRECISION`].
///
/// Index 0 is the whole earth. Each character adds 5 bits; since longitude
/// takes the first bit, odd lengths split longitude 8 ways and latitude 4 ways,
/// and even lengths do the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionTable {
    pub heights: [f64; MAX_PRECISION + 1],
    pub widths: [f64; MAX_PRECISION + 1],
}

impl DimensionTable {
    /// `(height, width)` in degrees of a cell at `precision`.
    pub fn cell_size(&self, precision: usize) -> Result<(f64, f64), GeohashError> {
        if precision > MAX_PRECISION {
            return Err(GeohashError::InvalidPrecision(precision));
        }
        Ok((self.heights[precision], self.widths[precision]))
    }
}

pub fn dimension_table() -> DimensionTable {
    let mut heights = [0.0; MAX_PRECISION + 1];
    let mut widths = [0.0; MAX_PRECISION + 1];
    heights[0] = LATITUDE_RANGE[1] - LATITUDE_RANGE[0];
    widths[0] = LONGITUDE_RANGE[1] - LONGITUDE_RANGE[0];

    let mut even = false;
    for i in 1..=MAX_PRECISION {
        heights[i] = heights[i - 1] / if even { 8.0 } else { 4.0 };
        widths[i] = widths[i - 1] / if even { 4.0 } else { 8.0 };
        even = !even;
    }

    DimensionTable { heights, widths }
}

/// Returns `precision` unchanged if it is a usable hash length (1-11).
pub fn validate_precision(precision: usize) -> Result<usize, GeohashError> {
    if (1..=MAX_PRECISION).contains(&precision) {
        Ok(precision)
    } else {
        Err(GeohashError::InvalidPrecision(precision))
    }
}

/// Largest precision whose cell is at least `height` by `width` degrees.
///
/// Returns 0 when the extent does not fit inside a single-character cell.
pub fn precision_for_extent(height: f64, width: f64) -> usize {
    let table = dimension_table();
    (1..=MAX_PRECISION)
        .rev()
        .find(|&p| table.heights[p] >= height && table.widths[p] >= width)
        .unwrap_or(0)
}

/// Largest precision whose cell covers a square of side `2 * radius_meters`.
///
/// Negative and NaN radii are treated as zero and give [`MAX_PRECISION`].
/// Uses the same flat meters-to-degrees factor as
/// [`geohash_range`](crate::index::range::geohash_range), so it overestimates
/// the usable precision for longitude away from the equator.
pub fn precision_for_radius(radius_meters: f64) -> usize {
    let extent = 2.0 * radius_meters.max(0.0) / METERS_PER_DEGREE;
    precision_for_extent(extent, extent)
}
