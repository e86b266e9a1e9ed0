/// Base-32 alphabet used by geohashes. Excludes `a`, `i`, `l` and `o`.
pub const BASE32: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

/// Bit weights of a single geohash character, most significant first.
pub const BITS: [u8; 5] = [16, 8, 4, 2, 1];

/// Number of bits carried by one geohash character
pub(crate) const BITS_PER_CHAR: usize = 5;

/// Maximum (and default) geohash length
pub const MAX_PRECISION: usize = 11;

/// Approximate meters per degree of latitude, used for radius lookups
pub const METERS_PER_DEGREE: f64 = 111034.0;

/// Latitude extent [min, max]
pub const LATITUDE_RANGE: [f64; 2] = [-90.0, 90.0];

/// Longitude extent [min, max]
pub const LONGITUDE_RANGE: [f64; 2] = [-180.0, 180.0];

/// Even-parity neighbor substitution tables, indexed by
/// [`Direction`](crate::core::tables::Direction) as top, right, bottom, left.
pub(crate) const NEIGHBORS_EVEN: [&str; 4] = [
    "p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    "bc01fg45238967deuvhjyznpkmstqrwx",
    "14365h7k9dcfesgujnmqp0r2twvyx8zb",
    "238967debc01fg45kmstqrwxuvhjyznp",
];

/// Even-parity border tables, same ordering as [`NEIGHBORS_EVEN`].
pub(crate) const BORDERS_EVEN: [&str; 4] = ["prxz", "bcfguvyz", "028b", "0145hjnp"];

/// Returns the alphabet index of `c`, or `None` if it is not a geohash character.
///
/// Upper-case input is accepted.
pub fn char_index(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    BASE32.bytes().position(|b| b as char == c)
}

/// Returns the alphabet character for `index`.
///
/// Callers only pass indices produced by bit accumulation or table lookups,
/// which are always below 32.
pub(crate) fn index_char(index: usize) -> char {
    BASE32.as_bytes()[index] as char
}
