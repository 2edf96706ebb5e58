//! Definition for the [`Precision`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

use crate::error::GeolocationError;

/// Number of characters in a QTH locator.
///
/// Every additional character pair refines the cell: fields are
/// 20°×10°, squares 2°×1°, subsquares 5'×2.5', and the extended pairs
/// repeat the 10 and 24 subdivisions once more.
///
/// Serialized as the plain character count, so `6` in a config file
/// reads back as [`Precision::Subsquare`].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Precision {
    /// Two letters, `A`..`R`.
    Field = 2,
    /// Field plus two digits.
    Square = 4,
    /// Square plus two letters, `A`..`X`.
    Subsquare = 6,
    /// Subsquare plus two digits.
    ExtendedSquare = 8,
    /// Extended square plus two letters, `A`..`X`.
    #[default]
    ExtendedSubsquare = 10,
}

impl Precision {
    /// All precisions, coarsest first.
    pub const ALL: [Precision; 5] = [
        Precision::Field,
        Precision::Square,
        Precision::Subsquare,
        Precision::ExtendedSquare,
        Precision::ExtendedSubsquare,
    ];

    /// Number of characters in a locator of this precision.
    pub const fn chars(self) -> usize {
        self as usize
    }

    /// Number of character pairs in a locator of this precision.
    pub const fn pairs(self) -> usize {
        self.chars() / 2
    }
}

impl TryFrom<u8> for Precision {
    type Error = GeolocationError;

    fn try_from(chars: u8) -> Result<Self, Self::Error> {
        match chars {
            2 => Ok(Precision::Field),
            4 => Ok(Precision::Square),
            6 => Ok(Precision::Subsquare),
            8 => Ok(Precision::ExtendedSquare),
            10 => Ok(Precision::ExtendedSubsquare),
            _ => Err(GeolocationError::InvalidPrecision(chars)),
        }
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> u8 {
        precision as u8
    }
}
