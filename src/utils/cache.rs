//! A value memoized until the data it was derived from changes.

/// Two-state cache: either dirty, or clean and holding the value
/// computed since the last invalidation.
///
/// The owner calls [`invalidate`](Cached::invalidate) on every mutation
/// of the underlying data and [`get_or_compute`](Cached::get_or_compute)
/// on reads, which recomputes only when dirty.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Cached<T> {
    #[default]
    Dirty,
    Clean(T),
}

impl<T: Copy> Cached<T> {
    /// Marks the cached value as stale.
    pub fn invalidate(&mut self) {
        *self = Cached::Dirty;
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Cached::Clean(_))
    }

    /// Returns the cached value, if clean.
    pub fn get(&self) -> Option<T> {
        match *self {
            Cached::Clean(value) => Some(value),
            Cached::Dirty => None,
        }
    }

    /// Returns the cached value, running `compute` and storing its
    /// result first when dirty.
    pub fn get_or_compute(&mut self, compute: impl FnOnce() -> T) -> T {
        match *self {
            Cached::Clean(value) => value,
            Cached::Dirty => {
                let value = compute();
                *self = Cached::Clean(value);
                value
            }
        }
    }
}
