//! # Grid Positions
//!
//! Every level of the universe (universe, galaxy, star system) is a
//! rectangular grid addressed by integer `(x, y)` pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell in one of the universe's grids.
///
/// Ordering is lexicographic by `(x, y)`, which is the canonical output
/// order for galaxies and star systems.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GridPos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridPos {
    /// Creates a new grid position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
