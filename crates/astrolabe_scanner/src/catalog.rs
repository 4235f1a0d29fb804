//! # Catalog
//!
//! The three output collections. The same type serves as a worker's
//! private row buffer and as the shared, lock-guarded result; merging moves
//! records from one into the other.

use std::fmt;
use std::ops::{Add, AddAssign};

use astrolabe_procedural::{Galaxy, Planet, StarSystem};
use serde::{Deserialize, Serialize};

/// Record counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Galaxies.
    pub galaxies: usize,
    /// Star systems.
    pub systems: usize,
    /// Planets.
    pub planets: usize,
}

impl Add for Totals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            galaxies: self.galaxies + rhs.galaxies,
            systems: self.systems + rhs.systems,
            planets: self.planets + rhs.planets,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.galaxies, self.systems, self.planets)
    }
}

/// Galaxies, star systems and planets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Galaxy records.
    pub galaxies: Vec<Galaxy>,
    /// Star-system records.
    pub systems: Vec<StarSystem>,
    /// Planet records.
    pub planets: Vec<Planet>,
}

impl Catalog {
    /// Empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            galaxies: Vec::new(),
            systems: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Record counts.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals {
            galaxies: self.galaxies.len(),
            systems: self.systems.len(),
            planets: self.planets.len(),
        }
    }

    /// Whether all three collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.galaxies.is_empty() && self.systems.is_empty() && self.planets.is_empty()
    }

    /// Moves every record of `other` to the end of `self`, leaving `other`
    /// empty with its capacity intact.
    pub fn append(&mut self, other: &mut Self) {
        self.galaxies.append(&mut other.galaxies);
        self.systems.append(&mut other.systems);
        self.planets.append(&mut other.planets);
    }

    /// Sorts galaxies by `(gx, gy)` and systems by `(gx, gy, sx, sy)`.
    ///
    /// Planets keep their merge order.
    pub fn sort_canonical(&mut self) {
        self.galaxies.sort_unstable();
        self.systems.sort_unstable_by_key(|s| (s.galaxy, s.position));
    }

    /// Sorts planets by coordinates. Not part of the canonical output.
    pub fn sort_planets(&mut self) {
        self.planets.sort_unstable_by_key(Planet::coordinates);
    }
}
