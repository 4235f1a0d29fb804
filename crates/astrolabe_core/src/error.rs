//! # Core Error Types

use thiserror::Error;

use crate::key::MapType;

/// Errors raised while parsing a spatial key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key does not start with the `Weathering.` namespace.
    #[error("key is missing the `Weathering.` namespace: {0}")]
    MissingNamespace(String),

    /// The key has no `#` separating the map type from its coordinates.
    #[error("key has no `#` index separator: {0}")]
    MissingIndex(String),

    /// The map type label is not one of the four known ones.
    #[error("unknown map type: {0}")]
    UnknownMapType(String),

    /// A coordinate pair is not of the form `=x,y`.
    #[error("malformed coordinates: {0}")]
    MalformedCoordinates(String),

    /// The number of coordinate pairs does not match the map type.
    #[error("{map_type} key needs {expected} coordinate pairs, found {found}")]
    DepthMismatch {
        /// Declared map type.
        map_type: MapType,
        /// Pairs the map type requires.
        expected: usize,
        /// Pairs actually present.
        found: usize,
    },
}

/// Result type for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
