//! Conversions between latitude/longitude and Maidenhead (QTH) locators.
//!
//! A locator is a string of up to five character pairs. Each pair
//! carries one longitude character followed by one latitude character
//! and refines the cell of the previous pair:
//!
//! | Pair | Characters | Subdivision | Cell (lon × lat) |
//! |------|------------|-------------|------------------|
//! | field | `A`..`R` | 18 | 20° × 10° |
//! | square | `0`..`9` | 10 | 2° × 1° |
//! | subsquare | `A`..`X` | 24 | 5' × 2.5' |
//! | extended square | `0`..`9` | 10 | 30" × 15" |
//! | extended subsquare | `A`..`X` | 24 | 1.25" × 0.625" |
//!
//! A locator denotes a cell, not a point. Encoding floors a point into
//! the lower-left corner of its cell, while decoding returns a point
//! inside the cell, so `decode(encode(p))` is generally not `p`.
//! Re-encoding a decoded locator at its own precision gives the locator
//! back as long as its subsquare letters stay within `A`..`X`. `Y` and
//! `Z` pass validation but overflow their pair and carry into the
//! previous one, so `"AA00AY"` comes back as `"AA01AA"`.

use crate::error::GeolocationError;
use crate::types::location::Location;
use crate::types::precision::Precision;

/// Offset added to the normalized coordinates before the first digit
/// is extracted, so a point lying exactly on a cell boundary is not
/// truncated into the neighbouring cell by rounding error.
pub const EPSILON: f64 = 1e-7;

/// Subdivision factor and first character of every pair after the field.
const SUBDIVISIONS: [(f64, u8); 4] = [(10.0, b'0'), (24.0, b'A'), (10.0, b'0'), (24.0, b'A')];

/// Characters appended to a short locator before decoding. The suffix
/// starting at the locator's length selects a point near the middle of
/// every unspecified finer pair.
const CELL_CENTER: &str = "LL55LL55LL";

/// Converts a latitude and longitude in degrees to a QTH locator.
///
/// The result is exactly `precision` characters long. Coordinates are
/// not range checked; a point outside `[-90, 90] × [-180, 180]` still
/// encodes deterministically, but to characters outside the normal
/// alphabet.
///
/// # Examples
/// ```
/// use qth_locator::{lat_lon_to_qth_locator, Precision};
///
/// assert_eq!(lat_lon_to_qth_locator(40.0, 0.0, Precision::Square), "JN00");
/// ```
pub fn lat_lon_to_qth_locator(latitude: f64, longitude: f64, precision: Precision) -> String {
    let mut lat = (latitude + 90.0) / 10.0 + EPSILON;
    let mut lon = (longitude + 180.0) / 20.0 + EPSILON;

    let mut locator = String::with_capacity(precision.chars());
    locator.push(digit(b'A', lon));
    locator.push(digit(b'A', lat));

    for &(divisions, base) in SUBDIVISIONS.iter().take(precision.pairs() - 1) {
        lat = divisions * (lat - lat.floor());
        lon = divisions * (lon - lon.floor());
        locator.push(digit(base, lon));
        locator.push(digit(base, lat));
    }
    locator
}

/// Same as [`lat_lon_to_qth_locator`] at [`Precision::ExtendedSubsquare`].
pub fn lat_lon_to_exact_qth_locator(latitude: f64, longitude: f64) -> String {
    lat_lon_to_qth_locator(latitude, longitude, Precision::ExtendedSubsquare)
}

/// Converts a QTH locator to a point inside the cell it denotes.
///
/// Locators shorter than 10 characters are completed with mid-cell
/// characters (`"55LL55LL"` after a field, `"LL55LL"` after a square
/// and so on) before decoding. Fails with
/// [`GeolocationError::InvalidLocator`] when
/// [`is_valid_qth_locator`] rejects the input.
///
/// Subsquare letters past `X` are accepted but describe a point outside
/// the named square, so re-encoding such a locator yields a different
/// one.
///
/// # Examples
/// ```
/// use qth_locator::{qth_locator_to_lat_lon, Precision};
///
/// let location = qth_locator_to_lat_lon("KN").unwrap();
/// assert_eq!(location.to_qth_locator(Precision::Field), "KN");
/// assert!(qth_locator_to_lat_lon("KN1").is_err());
/// ```
pub fn qth_locator_to_lat_lon(locator: &str) -> Result<Location, GeolocationError> {
    if !is_valid_qth_locator(locator) {
        debug!("rejecting invalid QTH locator {:?}", locator);
        return Err(GeolocationError::InvalidLocator(locator.to_string()));
    }

    let padded = locator.to_ascii_uppercase() + &CELL_CENTER[locator.len()..];
    let mut e = [0.0_f64; 10];
    for (i, c) in padded.bytes().enumerate() {
        // Pairs 2 and 4 hold digits, every other pair holds letters.
        let base = if (i / 2) % 2 == 1 { b'0' } else { b'A' };
        e[i] = f64::from(c - base);
    }

    let longitude = 20.0 * e[0] + 2.0 * e[2] + e[4] / 12.0 + e[6] / 120.0 + e[8] / 2880.0 - 180.0;
    let latitude = 10.0 * e[1] + e[3] + e[5] / 24.0 + e[7] / 240.0 + e[9] / 5760.0 - 90.0;
    Ok(Location::new(latitude, longitude))
}

/// Checks the syntax of a QTH locator.
///
/// A valid locator has an even length in `2..=10` and alternates pairs
/// of uppercase ASCII letters and pairs of ASCII digits, starting with
/// letters. Lowercase letters are rejected. Only the syntax is checked,
/// so `"ZZ"` is valid even though it lies beyond the `R` field.
///
/// A missing locator is never valid:
/// ```
/// use qth_locator::is_valid_qth_locator;
///
/// let missing: Option<&str> = None;
/// assert!(!missing.map_or(false, is_valid_qth_locator));
/// assert!(Some("JN58").map_or(false, is_valid_qth_locator));
/// ```
pub fn is_valid_qth_locator(locator: &str) -> bool {
    let bytes = locator.as_bytes();
    if bytes.len() < 2 || bytes.len() > 10 || bytes.len() % 2 != 0 {
        return false;
    }
    bytes.chunks(2).enumerate().all(|(group, pair)| {
        if group % 2 == 0 {
            pair.iter().all(u8::is_ascii_uppercase)
        } else {
            pair.iter().all(u8::is_ascii_digit)
        }
    })
}

/// Maps the integer part of `value` onto the alphabet starting at `base`.
fn digit(base: u8, value: f64) -> char {
    // `as` saturates, which only matters for out-of-range coordinates.
    char::from(base.saturating_add(value.floor() as u8))
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
