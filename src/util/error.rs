/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// The hash contains a character outside the base-32 alphabet.
    InvalidCharacter { character: char, position: usize },
    /// The direction name is not one of top, right, bottom or left.
    InvalidDirection(String),
    /// The precision is outside the valid range (1-11).
    InvalidPrecision(usize),
    /// The coordinate is outside latitude [-90, 90] or longitude [-180, 180].
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid geohash character '{}' at position {}",
                character, position
            ),
            GeohashError::InvalidDirection(d) => write!(f, "Invalid direction: {}", d),
            GeohashError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            GeohashError::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(
                f,
                "Invalid coordinate: latitude {}, longitude {}",
                latitude, longitude
            ),
        }
    }
}

impl std::error::Error for GeohashError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GeohashError::InvalidCharacter {
            character: 'a',
            position: 3,
        };
        assert_eq!(err.to_string(), "Invalid geohash character 'a' at position 3");
        assert_eq!(
            GeohashError::InvalidPrecision(12).to_string(),
            "Invalid precision: 12"
        );
    }
}
