//! Error types for path construction.

use core::fmt;

/// Returned when a closed polygon is requested for an empty list of points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cannot build a closed polygon from an empty point list")
    }
}

/// An error if a sequence of segments does not form a valid path.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum MalformedPath {
    /// The first segment of a non-empty path was not a move.
    MissingMove,
}

impl fmt::Display for MalformedPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingMove => write!(f, "Path does not begin with a move"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyInputError {}

#[cfg(feature = "std")]
impl std::error::Error for MalformedPath {}
