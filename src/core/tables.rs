use crate::core::constants::{BORDERS_EVEN, NEIGHBORS_EVEN};
use crate::util::error::GeohashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass directions a cell can be stepped in.
///
/// Diagonal neighbors are built by composing two directions, e.g. top then right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

/// Parity of a hash length, selecting which lookup table variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of a hash of `len` characters.
    pub fn of_len(len: usize) -> Self {
        if len % 2 == 1 { Parity::Odd } else { Parity::Even }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    fn table_index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    /// The direction whose even-parity table serves as this direction's odd-parity table.
    ///
    /// Swapping parity swaps the roles of the latitude and longitude axes, so
    /// top/right and bottom/left exchange tables.
    pub fn odd_counterpart(self) -> Direction {
        match self {
            Direction::Top => Direction::Right,
            Direction::Right => Direction::Top,
            Direction::Bottom => Direction::Left,
            Direction::Left => Direction::Bottom,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    fn source(self, parity: Parity) -> usize {
        match parity {
            Parity::Even => self.table_index(),
            Parity::Odd => self.odd_counterpart().table_index(),
        }
    }

    /// Neighbor substitution table for this direction and parity.
    pub fn neighbor_table(self, parity: Parity) -> &'static str {
        NEIGHBORS_EVEN[self.source(parity)]
    }

    /// Border table for this direction and parity.
    pub fn border_table(self, parity: Parity) -> &'static str {
        BORDERS_EVEN[self.source(parity)]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" | "north" | "n" => Ok(Direction::Top),
            "right" | "east" | "e" => Ok(Direction::Right),
            "bottom" | "south" | "s" => Ok(Direction::Bottom),
            "left" | "west" | "w" => Ok(Direction::Left),
            _ => Err(GeohashError::InvalidDirection(s.to_string())),
        }
    }
}
