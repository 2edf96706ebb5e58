//! Error type shared by the locator codec and the path types.

use thiserror::Error;

/// Errors raised by locator decoding and path mutation.
///
/// A failed operation never leaves partial state behind: a rejected
/// [`remove`](crate::Path::remove) keeps both the sequence and its
/// cached distance exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The string is not a syntactically valid QTH locator.
    #[error("invalid QTH locator: {0:?}")]
    InvalidLocator(String),

    /// The index does not address a location in the path.
    #[error("index {index} is out of bounds for a path of {len} locations")]
    InvalidIndex { index: usize, len: usize },

    /// Locator precision must be an even number in `2..=10`.
    #[error("invalid locator precision {0}, expected one of 2, 4, 6, 8 or 10")]
    InvalidPrecision(u8),
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GeolocationError::InvalidLocator("AB1".to_string()).to_string(),
            "invalid QTH locator: \"AB1\""
        );
        assert_eq!(
            GeolocationError::InvalidIndex { index: 3, len: 2 }.to_string(),
            "index 3 is out of bounds for a path of 2 locations"
        );
        assert_eq!(
            GeolocationError::InvalidPrecision(7).to_string(),
            "invalid locator precision 7, expected one of 2, 4, 6, 8 or 10"
        );
    }
}
