//! Maidenhead (QTH) Locator Library.
//! Converts between latitude/longitude and grid locators, and measures
//! great-circle distances along multi-point paths.
//!
//! ```
//! use qth_locator::{
//!     lat_lon_to_qth_locator, qth_locator_to_lat_lon, ListPath, Location, Path, Precision,
//! };
//!
//! assert_eq!(lat_lon_to_qth_locator(40.0, 0.0, Precision::ExtendedSubsquare), "JN00AA00AA");
//!
//! let munich = qth_locator_to_lat_lon("JN58TD").unwrap();
//! let mut path = ListPath::new();
//! path.add(munich);
//! path.add(Location::new(48.5, 11.25));
//! assert!(path.distance() > 0.0);
//! ```

#[macro_use]
extern crate log;

pub mod error;

pub mod types {
    pub mod location;
    pub mod path;
    pub mod precision;
}

pub mod utils {
    pub mod cache;
    pub mod converter;
    pub mod haversine;
    pub mod locator;
}

pub use error::GeolocationError;
pub use types::location::Location;
pub use types::path::{ListPath, Path, SegmentDistance};
pub use types::precision::Precision;
pub use utils::converter::{DistanceConverter, MetersToKilometers, MetersToMiles};
pub use utils::haversine::{distance as distance_between, distance_with as distance_between_with};
pub use utils::locator::{
    is_valid_qth_locator, lat_lon_to_exact_qth_locator, lat_lon_to_qth_locator,
    qth_locator_to_lat_lon,
};
