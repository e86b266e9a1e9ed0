use crate::core::constants::index_char;
use crate::core::tables::{Direction, Parity};
use crate::index::decode::hash_indices;
use crate::util::error::GeohashError;
use log::trace;
use serde::{Deserialize, Serialize};

/// Returns the hash of the cell adjacent to `hash` in `direction`.
///
/// The result has the same length as the input. When the last character sits
/// on the border of its parent cell, the step carries into the parent. The
/// grid is not wrapped or corrected at the poles or the antimeridian.
///
/// The empty hash has no cell to step from and yields the empty hash.
///
/// # Example
/// ```
/// use geohash_rs::{Direction, adjacent};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(adjacent("ezs42", Direction::Top)?, "ezs48");
/// assert_eq!(adjacent("ezs42", Direction::Left)?, "ezefr");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] - the hash is longer than 11 characters
/// - [`GeohashError::InvalidCharacter`] - a character is not in the base-32 alphabet
pub fn adjacent(hash: &str, direction: Direction) -> Result<String, GeohashError> {
    hash_indices(hash)?;
    step(&hash.to_ascii_lowercase(), direction)
}

/// Like [`adjacent`], with the direction given by name (`"top"`, `"e"`, `"south"`, ...).
///
/// # Errors
///
/// - [`GeohashError::InvalidDirection`] - the name is not a known direction
/// - [`GeohashError::InvalidPrecision`] - the hash is longer than 11 characters
/// - [`GeohashError::InvalidCharacter`] - a character is not in the base-32 alphabet
pub fn adjacent_str(hash: &str, direction: &str) -> Result<String, GeohashError> {
    adjacent(hash, direction.parse()?)
}

// Input is length-checked and lower-cased, so recursion depth is at most 11.
fn step(hash: &str, direction: Direction) -> Result<String, GeohashError> {
    let Some(last) = hash.chars().last() else {
        return Ok(String::new());
    };
    let parity = Parity::of_len(hash.len());
    let base = &hash[..hash.len() - 1];

    let mut result = if direction.border_table(parity).contains(last) {
        trace!("{} carries {} into parent {:?}", hash, direction, base);
        step(base, direction)?
    } else {
        base.to_string()
    };

    let position = direction.neighbor_table(parity).find(last).ok_or(
        GeohashError::InvalidCharacter {
            character: last,
            position: base.len(),
        },
    )?;
    result.push(index_char(position));
    Ok(result)
}

/// The eight cells surrounding a geohash, all of the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub top: String,
    pub top_right: String,
    pub right: String,
    pub right_bottom: String,
    pub bottom: String,
    pub bottom_left: String,
    pub left: String,
    pub left_top: String,
}

impl Neighbors {
    /// Neighbors in clockwise order starting from top.
    pub fn to_array(&self) -> [&str; 8] {
        [
            &self.top,
            &self.top_right,
            &self.right,
            &self.right_bottom,
            &self.bottom,
            &self.bottom_left,
            &self.left,
            &self.left_top,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.to_array().into_iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        vec![
            self.top,
            self.top_right,
            self.right,
            self.right_bottom,
            self.bottom,
            self.bottom_left,
            self.left,
            self.left_top,
        ]
    }
}

/// Returns the eight neighbors of `hash`.
///
/// Diagonals are built by two steps: top-right is top then right, right-bottom
/// is right then bottom, and so on round the compass. Neighbors are not
/// deduplicated, so cells at the edge of the map may repeat.
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] - the hash is longer than 11 characters
/// - [`GeohashError::InvalidCharacter`] - a character is not in the base-32 alphabet
pub fn neighbors(hash: &str) -> Result<Neighbors, GeohashError> {
    hash_indices(hash)?;
    let hash = hash.to_ascii_lowercase();

    let top = step(&hash, Direction::Top)?;
    let right = step(&hash, Direction::Right)?;
    let bottom = step(&hash, Direction::Bottom)?;
    let left = step(&hash, Direction::Left)?;

    Ok(Neighbors {
        top_right: step(&top, Direction::Right)?,
        right_bottom: step(&right, Direction::Bottom)?,
        bottom_left: step(&bottom, Direction::Left)?,
        left_top: step(&left, Direction::Top)?,
        top,
        right,
        bottom,
        left,
    })
}
