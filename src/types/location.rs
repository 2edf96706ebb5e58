//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` is an immutable latitude/longitude pair on a spherical
//! earth. Its identity is the cell it falls into at the finest locator
//! precision rather than its raw floating point components.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::GeolocationError;
use crate::types::precision::Precision;
use crate::utils::{haversine, locator};

/// A geographic position in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// The range is not enforced: decoding a locator such as `"ZZ"` yields
/// a point outside of it, and the codec handles such points
/// deterministically.
///
/// # Equality
///
/// Two locations are equal when they encode to the same 10 character
/// locator, i.e. when they share an extended subsquare (a cell a few
/// tens of meters across). This is a deliberately lossy
/// equivalence, and [`Hash`] follows it so that equal locations land in
/// the same bucket:
///
/// ```
/// use qth_locator::Location;
///
/// let a = Location::new(40.0, 0.0);
/// let b = Location::new(40.00001, 0.00001);
/// assert_eq!(a, b);
/// assert_ne!(a.latitude(), b.latitude());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    latitude: OrderedFloat<f64>,
    longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> f64 {
        self.longitude.into_inner()
    }

    /// Encodes this location as a locator of the given precision.
    pub fn to_qth_locator(&self, precision: Precision) -> String {
        locator::lat_lon_to_qth_locator(self.latitude(), self.longitude(), precision)
    }

    /// Encodes this location as a 10 character locator.
    pub fn to_exact_qth_locator(&self) -> String {
        self.to_qth_locator(Precision::ExtendedSubsquare)
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine::distance(self, other)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.to_exact_qth_locator() == other.to_exact_qth_locator()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_exact_qth_locator().hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Location::new(latitude, longitude)
    }
}

/// Parses a QTH locator into the representative point of its cell.
///
/// See [`qth_locator_to_lat_lon`](locator::qth_locator_to_lat_lon).
impl FromStr for Location {
    type Err = GeolocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        locator::qth_locator_to_lat_lon(s)
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
