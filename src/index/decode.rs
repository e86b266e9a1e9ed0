use crate::core::constants::{BITS, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION, char_index};
use crate::util::error::GeohashError;
use geo_types::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

/// Bounds of one axis of a decoded cell, with its midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
    pub mid: f64,
}

impl Interval {
    fn new(range: [f64; 2]) -> Self {
        Self {
            low: range[0],
            high: range[1],
            mid: (range[0] + range[1]) / 2.0,
        }
    }

    /// Halves the interval, keeping the upper half when `upper` is set.
    fn bisect(&mut self, upper: bool) {
        let mid = (self.low + self.high) / 2.0;
        if upper {
            self.low = mid;
        } else {
            self.high = mid;
        }
        self.mid = (self.low + self.high) / 2.0;
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Inclusive bounds check.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Latitude and longitude bounds of a geohash cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedHash {
    pub latitude: Interval,
    pub longitude: Interval,
}

impl DecodedHash {
    /// Cell center as a `Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude.mid, self.latitude.mid)
    }

    pub fn bounding_box(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude.low, y: self.latitude.low },
            coord! { x: self.longitude.high, y: self.latitude.high },
        )
    }

    pub fn height(&self) -> f64 {
        self.latitude.span()
    }

    pub fn width(&self) -> f64 {
        self.longitude.span()
    }
}

/// Maps every character of `hash` to its alphabet index.
///
/// Upper-case characters are accepted; anything outside the alphabet is
/// rejected with its position. Hashes longer than [`MAX_PRECISION`] are
/// rejected before any character is looked at. The empty hash is allowed.
pub(crate) fn hash_indices(hash: &str) -> Result<Vec<usize>, GeohashError> {
    let len = hash.chars().count();
    if len > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(len));
    }

    hash.chars()
        .enumerate()
        .map(|(position, character)| {
            char_index(character).ok_or(GeohashError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect()
}

/// Decodes a geohash into the latitude/longitude bounds of its cell.
///
/// The empty hash decodes to the whole earth.
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cell = decode("ezs42")?;
/// assert!((cell.latitude.low - 42.583).abs() < 0.001);
/// assert!((cell.longitude.high - -5.581).abs() < 0.001);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] - the hash is longer than 11 characters
/// - [`GeohashError::InvalidCharacter`] - a character is not in the base-32 alphabet
pub fn decode(hash: &str) -> Result<DecodedHash, GeohashError> {
    let indices = hash_indices(hash)?;

    let mut lat = Interval::new(LATITUDE_RANGE);
    let mut lon = Interval::new(LONGITUDE_RANGE);
    let mut even = true;

    for cd in indices {
        for mask in BITS {
            let upper = (cd & mask as usize) != 0;
            if even {
                lon.bisect(upper);
            } else {
                lat.bisect(upper);
            }
            even = !even;
        }
    }

    Ok(DecodedHash {
        latitude: lat,
        longitude: lon,
    })
}
