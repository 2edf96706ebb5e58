//! Struct definitions and implementations for multi-point paths.
//!
//! A path is an ordered sequence of [`Location`]s whose total length is
//! the sum of the great-circle distances between consecutive points.
//! The [`Path`] trait describes the operations; [`ListPath`] implements
//! them on top of a vector and caches the total until the next mutation.

use std::cell::Cell;
use std::fmt;

use crate::error::GeolocationError;
use crate::types::location::Location;
use crate::utils::cache::Cached;
use crate::utils::converter::DistanceConverter;
use crate::utils::haversine;

/// Function measuring a single segment of a path, in meters.
pub type SegmentDistance = fn(&Location, &Location) -> f64;

/// An ordered, mutable sequence of locations with a total distance.
pub trait Path {
    /// Appends `location` to the end of the path.
    fn add(&mut self, location: Location);

    /// Removes and returns the location at `index`.
    ///
    /// Fails with [`GeolocationError::InvalidIndex`] when `index` is not
    /// inside the path, in which case the path is left untouched.
    fn remove(&mut self, index: usize) -> Result<Location, GeolocationError>;

    /// Puts `location` at `index`.
    ///
    /// An index past the end behaves exactly like [`add`](Path::add).
    /// An index inside the path *replaces* the location stored there;
    /// nothing is shifted and the length does not change.
    fn insert(&mut self, index: usize, location: Location);

    /// Total length of the path in meters. Paths with fewer than two
    /// locations have a length of 0.
    fn distance(&self) -> f64;

    /// Total length of the path converted with `converter`.
    fn distance_with(&self, converter: &dyn DistanceConverter) -> f64 {
        converter.convert(self.distance())
    }
}

/// A vector-backed [`Path`] with a lazily recomputed distance.
///
/// Every mutation marks the cached distance dirty; the next call to
/// [`distance`](Path::distance) sums the segments again and stores the
/// result. Reads between mutations are served from the cache.
///
/// The cache lives in a [`Cell`], so a `ListPath` can be read through a
/// shared reference but cannot be shared between threads.
///
/// ```
/// use qth_locator::{ListPath, Location, MetersToMiles, Path};
///
/// let mut path = ListPath::new();
/// path.add(Location::new(61.24233, 55.395747));
/// path.add(Location::new(64.523494, 68.755122));
///
/// let meters = path.distance();
/// assert!((meters - 767_062.27).abs() < 0.01);
/// assert!((path.distance_with(&MetersToMiles) - meters / 1609.0).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct ListPath {
    locations: Vec<Location>,
    segment_distance: SegmentDistance,
    distance: Cell<Cached<f64>>,
}

impl ListPath {
    /// Creates an empty path measured with the haversine distance.
    pub fn new() -> Self {
        ListPath::with_segment_distance(haversine::distance)
    }

    /// Creates an empty path whose segments are measured with
    /// `segment_distance`.
    pub fn with_segment_distance(segment_distance: SegmentDistance) -> Self {
        ListPath {
            locations: Vec::new(),
            segment_distance,
            distance: Cell::new(Cached::Dirty),
        }
    }

    /// The locations of the path, in order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Whether the next [`distance`](Path::distance) call is served from
    /// the cache.
    pub fn is_cached(&self) -> bool {
        self.distance.get().is_clean()
    }

    fn mark_dirty(&mut self) {
        self.distance.get_mut().invalidate();
    }

    fn sum_segments(&self) -> f64 {
        let total: f64 = self
            .locations
            .windows(2)
            .map(|segment| (self.segment_distance)(&segment[0], &segment[1]))
            .sum();
        debug!(
            "recomputed path distance over {} locations: {} m",
            self.locations.len(),
            total
        );
        total
    }
}

impl Path for ListPath {
    fn add(&mut self, location: Location) {
        self.locations.push(location);
        self.mark_dirty();
    }

    fn remove(&mut self, index: usize) -> Result<Location, GeolocationError> {
        if index >= self.locations.len() {
            warn!(
                "cannot remove index {} from a path of {} locations",
                index,
                self.locations.len()
            );
            return Err(GeolocationError::InvalidIndex {
                index,
                len: self.locations.len(),
            });
        }
        let removed = self.locations.remove(index);
        self.mark_dirty();
        Ok(removed)
    }

    fn insert(&mut self, index: usize, location: Location) {
        match self.locations.get_mut(index) {
            Some(slot) => {
                *slot = location;
                self.mark_dirty();
            }
            None => self.add(location),
        }
    }

    fn distance(&self) -> f64 {
        let mut cache = self.distance.get();
        if let Some(distance) = cache.get() {
            debug!("serving cached path distance: {} m", distance);
            return distance;
        }
        let distance = cache.get_or_compute(|| self.sum_segments());
        self.distance.set(cache);
        distance
    }
}

impl Default for ListPath {
    fn default() -> Self {
        ListPath::new()
    }
}

impl fmt::Debug for ListPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPath")
            .field("locations", &self.locations)
            .field("distance", &self.distance.get())
            .finish_non_exhaustive()
    }
}

impl From<Vec<Location>> for ListPath {
    fn from(locations: Vec<Location>) -> Self {
        ListPath {
            locations,
            ..ListPath::new()
        }
    }
}

impl FromIterator<Location> for ListPath {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        ListPath::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Location> for ListPath {
    fn extend<I: IntoIterator<Item = Location>>(&mut self, iter: I) {
        self.locations.extend(iter);
        self.mark_dirty();
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod path_tests {
    use super::*;
    use crate::utils::converter::MetersToMiles;

    const LOCATION_1: Location = Location::new(61.24233, 55.395747);
    const LOCATION_2: Location = Location::new(64.523494, 68.755122);
    const LOCATION_3: Location = Location::new(1.0, 0.0);

    thread_local! {
        static SEGMENTS_MEASURED: Cell<usize> = Cell::new(0);
    }

    /// Haversine distance that counts how often it runs on this thread.
    fn counting_distance(from: &Location, to: &Location) -> f64 {
        SEGMENTS_MEASURED.with(|count| count.set(count.get() + 1));
        haversine::distance(from, to)
    }

    fn segments_measured() -> usize {
        SEGMENTS_MEASURED.with(Cell::get)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_path() {
        let path = ListPath::new();
        assert!(!path.is_cached());
        assert_eq!(path.distance(), 0.0);
        assert!(path.is_cached());
        assert!(path.is_empty());
    }

    #[test]
    fn test_single_location() {
        let path = ListPath::from(vec![LOCATION_1]);
        assert_eq!(path.distance(), 0.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_distance_sums_segments() {
        let path: ListPath = [LOCATION_1, LOCATION_2, LOCATION_3].into_iter().collect();
        let expected = haversine::distance(&LOCATION_1, &LOCATION_2)
            + haversine::distance(&LOCATION_2, &LOCATION_3);
        assert_close(path.distance(), expected);
        assert!((path.distance() - 9_675_935.054_687).abs() < 1e-3);
        assert_close(path.distance_with(&MetersToMiles), expected / 1609.0);
        assert_close(
            path.distance_with(&|meters: f64| meters / 1000.0),
            expected / 1000.0,
        );
    }

    #[test]
    fn test_repeated_reads_hit_the_cache() {
        let mut path = ListPath::with_segment_distance(counting_distance);
        path.add(LOCATION_1);
        path.add(LOCATION_2);
        path.add(LOCATION_3);

        let first = path.distance();
        assert_eq!(segments_measured(), 2);
        let second = path.distance();
        assert_eq!(first, second);
        assert_eq!(segments_measured(), 2);

        path.add(LOCATION_1);
        assert!(!path.is_cached());
        path.distance();
        assert_eq!(segments_measured(), 5);
    }

    #[test]
    fn test_every_mutation_marks_dirty() {
        let mut path = ListPath::from(vec![LOCATION_1, LOCATION_2]);
        path.distance();

        path.add(LOCATION_3);
        assert!(!path.is_cached());
        path.distance();

        path.insert(0, LOCATION_3);
        assert!(!path.is_cached());
        path.distance();

        path.remove(0).unwrap();
        assert!(!path.is_cached());
        path.distance();

        path.extend([LOCATION_1]);
        assert!(!path.is_cached());
    }

    /// Inserting inside the path overwrites instead of shifting.
    #[test]
    fn test_insert_replaces_in_bounds() {
        let mut path = ListPath::from(vec![LOCATION_1, LOCATION_2]);
        path.insert(1, LOCATION_3);
        assert_eq!(path.locations(), &[LOCATION_1, LOCATION_3]);
        assert_close(
            path.distance(),
            haversine::distance(&LOCATION_1, &LOCATION_3),
        );
    }

    #[test]
    fn test_insert_past_end_is_add() {
        let mut inserted = ListPath::from(vec![LOCATION_1]);
        let mut added = inserted.clone();

        inserted.insert(1, LOCATION_2);
        added.add(LOCATION_2);
        assert_eq!(inserted.locations(), added.locations());
        assert_eq!(inserted.distance(), added.distance());

        inserted.insert(100, LOCATION_3);
        added.add(LOCATION_3);
        assert_eq!(inserted.locations(), added.locations());
        assert_eq!(inserted.distance(), added.distance());
    }

    #[test]
    fn test_remove() {
        let mut path = ListPath::from(vec![LOCATION_1, LOCATION_2, LOCATION_3]);
        let removed = path.remove(1).unwrap();
        assert_eq!(removed, LOCATION_2);
        assert_eq!(path.locations(), &[LOCATION_1, LOCATION_3]);
        assert_close(
            path.distance(),
            haversine::distance(&LOCATION_1, &LOCATION_3),
        );
    }

    /// A rejected removal leaves both the sequence and the cache alone.
    #[test]
    fn test_remove_out_of_bounds() {
        let mut path = ListPath::from(vec![LOCATION_1, LOCATION_2]);
        let distance = path.distance();

        assert_eq!(
            path.remove(2),
            Err(GeolocationError::InvalidIndex { index: 2, len: 2 })
        );
        assert!(path.is_cached());
        assert_eq!(path.locations(), &[LOCATION_1, LOCATION_2]);
        assert_eq!(path.distance(), distance);

        let mut empty = ListPath::new();
        assert_eq!(
            empty.remove(0),
            Err(GeolocationError::InvalidIndex { index: 0, len: 0 })
        );
        assert!(!empty.is_cached());
    }

    #[test]
    fn test_trait_object() {
        let mut path: Box<dyn Path> = Box::new(ListPath::new());
        path.add(LOCATION_1);
        path.add(LOCATION_2);
        assert_close(
            path.distance(),
            haversine::distance(&LOCATION_1, &LOCATION_2),
        );
    }
}
