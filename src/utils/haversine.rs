//! Great-circle distance on a spherical earth.

use crate::types::location::Location;
use crate::utils::converter::DistanceConverter;

/// Mean earth radius.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Returns the great-circle distance between two locations in meters,
/// using the haversine formula.
///
/// The earth is treated as a sphere, which keeps the error below about
/// half a percent compared to an ellipsoidal model.
pub fn distance(from: &Location, to: &Location) -> f64 {
    let phi_1 = from.latitude().to_radians();
    let phi_2 = to.latitude().to_radians();
    let half_delta_phi = (to.latitude() - from.latitude()).to_radians() / 2.0;
    let half_delta_lambda = (to.longitude() - from.longitude()).to_radians() / 2.0;

    let a = half_delta_phi.sin().powi(2)
        + phi_1.cos() * phi_2.cos() * half_delta_lambda.sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Same as [`distance`], converted with `converter`.
pub fn distance_with(from: &Location, to: &Location, converter: &dyn DistanceConverter) -> f64 {
    converter.convert(distance(from, to))
}
