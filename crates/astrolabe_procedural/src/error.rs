//! # Procedural Error Types
//!
//! Generation itself never fails. These errors come from invalid
//! configuration and from lookups by key.

use astrolabe_core::{GridPos, KeyError, MapType};
use thiserror::Error;

use crate::celestial::CelestialBody;

/// Errors that can occur while configuring or querying the generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProceduralError {
    /// Universe configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A key string could not be parsed.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// A key of the wrong granularity was supplied.
    #[error("expected a {expected} key, got a {found} key")]
    WrongDepth {
        /// Map type the operation needs.
        expected: MapType,
        /// Map type supplied.
        found: MapType,
    },

    /// A coordinate lies outside its grid.
    #[error("{level} cell {position} is outside the {side}x{side} grid")]
    OutOfBounds {
        /// Grid level (`galaxy`, `system` or `planet`).
        level: &'static str,
        /// Offending coordinate.
        position: GridPos,
        /// Side of the grid.
        side: i32,
    },

    /// No galaxy exists at the requested universe cell.
    #[error("no galaxy at {0}")]
    NoGalaxy(GridPos),

    /// No star system exists at the requested galaxy cell.
    #[error("no star system at {system} in galaxy {galaxy}")]
    NoStarSystem {
        /// Galaxy cell.
        galaxy: GridPos,
        /// System cell.
        system: GridPos,
    },

    /// The cell holds a celestial body other than a planet.
    #[error("{key} holds no planet ({body})")]
    NotAPlanet {
        /// Rendered planet key.
        key: String,
        /// What the cell resolved to.
        body: CelestialBody,
    },
}

/// Result type for procedural operations.
pub type ProceduralResult<T> = Result<T, ProceduralError>;
