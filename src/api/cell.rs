use crate::core::constants::{BASE32, MAX_PRECISION};
use crate::core::dimensions::validate_precision;
use crate::core::tables::Direction;
use crate::index::adjacency::{Neighbors, adjacent, neighbors};
use crate::index::decode::decode;
use crate::index::encode::encode_coord;
use crate::util::coord::{Coordinate, validate_wgs84};
use crate::util::error::GeohashError;
use geo::Intersects;
use geo_types::{Point, Polygon, Rect};

/// A single geohash cell.
///
/// Each `GeohashCell` carries its hash, the center and bounds of the
/// rectangle it covers in WGS84 degrees, and its precision (hash length).
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cell = GeohashCell::from_wgs84(&(-5.6, 42.6), 5)?;
/// assert_eq!(cell.id, "ezs42");
///
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeohashCell {
    /// Lower-case geohash of this cell
    pub id: String,
    /// Center point (x = longitude, y = latitude)
    pub center: Point<f64>,
    /// Cell rectangle in degrees
    pub bounds: Rect<f64>,
    /// Hash length (1-11), where higher values mean smaller cells
    pub precision: usize,
}

impl GeohashCell {
    /// Create a GeohashCell from an existing geohash
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_wgs84(&(10.40744, 57.64911), 11)?;
    /// let restored = GeohashCell::from_geohash(&cell.id)?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidPrecision`] - the hash is empty or longer than 11
    /// - [`GeohashError::InvalidCharacter`] - a character is not in the base-32 alphabet
    pub fn from_geohash(hash: &str) -> Result<Self, GeohashError> {
        let precision = validate_precision(hash.chars().count())?;
        let decoded = decode(hash)?;

        Ok(Self {
            id: hash.to_ascii_lowercase(),
            center: decoded.center(),
            bounds: decoded.bounding_box(),
            precision,
        })
    }

    /// Create a GeohashCell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// // From tuple
    /// let cell = GeohashCell::from_wgs84(&(-5.6, 42.6), 7)?;
    /// // From Point
    /// let cell = GeohashCell::from_wgs84(&Point::new(-5.6, 42.6), 7)?;
    /// println!("Cell ID: {}", cell.id);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidCoordinate`] - the coordinate is outside the WGS84 domain
    /// - [`GeohashError::InvalidPrecision`] - `precision` is not in 1-11
    pub fn from_wgs84(coord: &impl Coordinate, precision: usize) -> Result<Self, GeohashError> {
        validate_wgs84(coord)?;
        let id = encode_coord(coord, precision)?;
        Self::from_geohash(&id)
    }

    /// Returns the latitude of the cell center.
    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell center.
    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Converts this cell to a rectangular polygon (closed ring of 5 coordinates).
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds.to_polygon()
    }

    /// Whether `point` lies in this cell, edges included.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.bounds.intersects(&point.0)
    }

    /// The enclosing cell one character shorter, or `None` at precision 1.
    pub fn parent(&self) -> Option<Self> {
        if self.precision <= 1 {
            return None;
        }
        Self::from_geohash(&self.id[..self.precision - 1]).ok()
    }

    /// The 32 cells one character longer, in alphabet order.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidPrecision`] - the cell is already at full precision
    pub fn children(&self) -> Result<Vec<Self>, GeohashError> {
        if self.precision >= MAX_PRECISION {
            return Err(GeohashError::InvalidPrecision(self.precision + 1));
        }
        BASE32
            .chars()
            .map(|c| Self::from_geohash(&format!("{}{}", self.id, c)))
            .collect()
    }

    /// The cell next to this one in `direction`.
    pub fn adjacent(&self, direction: Direction) -> Result<Self, GeohashError> {
        Self::from_geohash(&adjacent(&self.id, direction)?)
    }

    /// Hashes of the eight surrounding cells.
    pub fn neighbors(&self) -> Result<Neighbors, GeohashError> {
        neighbors(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimensions::dimension_table;

    #[test]
    fn test_from_wgs84_tuple() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_wgs84(&(-5.6, 42.6), 5)?;

        assert_eq!(cell.id, "ezs42");
        assert_eq!(cell.precision, 5);
        assert!((cell.latitude() - 42.605).abs() < 0.001);
        assert!((cell.longitude() - -5.603).abs() < 0.001);
        Ok(())
    }

    #[test]
    fn test_from_wgs84_point() -> Result<(), GeohashError> {
        let point = Point::new(-5.6, 42.6);
        let cell = GeohashCell::from_wgs84(&point, 11)?;

        assert_eq!(cell.id, "ezs42e44yx9");
        assert!(cell.contains(&point));
        Ok(())
    }

    #[test]
    fn test_from_wgs84_out_of_range() {
        let result = GeohashCell::from_wgs84(&(200.0, 0.0), 5);
        assert!(matches!(
            result,
            Err(GeohashError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_from_geohash_validation() {
        assert_eq!(
            GeohashCell::from_geohash(""),
            Err(GeohashError::InvalidPrecision(0))
        );
        assert_eq!(
            GeohashCell::from_geohash("ezs42e44yx9z"),
            Err(GeohashError::InvalidPrecision(12))
        );
        assert!(matches!(
            GeohashCell::from_geohash("ezo"),
            Err(GeohashError::InvalidCharacter { character: 'o', .. })
        ));
    }

    #[test]
    fn test_from_geohash_lowercases() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("EZS42")?;
        assert_eq!(cell.id, "ezs42");
        Ok(())
    }

    #[test]
    fn test_bounds_match_dimension_table() -> Result<(), GeohashError> {
        let table = dimension_table();
        let cell = GeohashCell::from_geohash("ezs42")?;
        assert_eq!(cell.bounds.height(), table.heights[5]);
        assert_eq!(cell.bounds.width(), table.widths[5]);
        Ok(())
    }

    #[test]
    fn test_polygon_is_closed() -> Result<(), GeohashError> {
        let polygon = GeohashCell::from_geohash("s")?.to_polygon();
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
        Ok(())
    }

    #[test]
    fn test_contains_edges() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("s")?;
        assert!(cell.contains(&Point::new(0.0, 0.0)));
        assert!(cell.contains(&Point::new(45.0, 45.0)));
        assert!(!cell.contains(&Point::new(45.1, 10.0)));
        Ok(())
    }

    #[test]
    fn test_parent_and_children() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("ezs42")?;
        let parent = cell.parent();
        assert_eq!(parent.map(|p| p.id), Some("ezs4".to_string()));

        let children = cell.children()?;
        assert_eq!(children.len(), 32);
        assert_eq!(children[0].id, "ezs420");
        assert_eq!(children[31].id, "ezs42z");
        assert!(children.iter().all(|c| cell.contains(&c.center)));

        assert!(GeohashCell::from_geohash("e")?.parent().is_none());
        Ok(())
    }

    #[test]
    fn test_children_at_full_precision() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("ezs42e44yx9")?;
        assert_eq!(cell.children(), Err(GeohashError::InvalidPrecision(12)));
        Ok(())
    }

    #[test]
    fn test_adjacent_and_neighbors() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("ezs42")?;
        assert_eq!(cell.adjacent(Direction::Top)?.id, "ezs48");
        assert_eq!(cell.neighbors()?.left, "ezefr");
        Ok(())
    }
}
