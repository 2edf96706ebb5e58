//! Unit conversion for distances computed in meters.

/// Meters in a statute mile, rounded the way mileage tables round it.
pub const METERS_PER_MILE: f64 = 1609.0;

pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Converts a distance given in meters to another unit.
///
/// Any `Fn(f64) -> f64` is a converter, so one-off conversions can be
/// passed as closures:
///
/// ```
/// use qth_locator::{DistanceConverter, MetersToKilometers};
///
/// let to_centimeters = |meters: f64| meters * 100.0;
/// assert_eq!(to_centimeters.convert(1.5), 150.0);
/// assert_eq!(MetersToKilometers.convert(1500.0), 1.5);
/// ```
pub trait DistanceConverter {
    /// Converts `meters` to the target unit.
    fn convert(&self, meters: f64) -> f64;
}

impl<F> DistanceConverter for F
where
    F: Fn(f64) -> f64,
{
    fn convert(&self, meters: f64) -> f64 {
        self(meters)
    }
}

/// Meters to statute miles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetersToMiles;

impl DistanceConverter for MetersToMiles {
    fn convert(&self, meters: f64) -> f64 {
        meters / METERS_PER_MILE
    }
}

/// Meters to kilometers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetersToKilometers;

impl DistanceConverter for MetersToKilometers {
    fn convert(&self, meters: f64) -> f64 {
        meters / METERS_PER_KILOMETER
    }
}
