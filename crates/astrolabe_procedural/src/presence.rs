//! # Presence Classification
//!
//! Decides whether a galaxy exists at a universe cell and whether a star
//! system exists at a galaxy cell.
//!
//! Both tests hash the enclosing map's key, reinterpret that hash as a
//! legacy `i32`, use it as the offset of [`hash_tile`] and test the tile
//! hash for divisibility by the configured density.
//!
//! Neither test checks the parent level. A system test on a cell of a
//! galaxy that does not exist still answers; scan order is what keeps
//! such systems out of the output.

use astrolabe_core::hash::{hash_tile, to_legacy_i32};
use astrolabe_core::{GridPos, MapKey};
use serde::{Deserialize, Serialize};

use crate::config::UniverseConfig;

/// A generated galaxy.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Galaxy {
    /// Position in the universe grid.
    pub position: GridPos,
}

impl Galaxy {
    /// Creates a galaxy record.
    #[inline]
    #[must_use]
    pub const fn new(position: GridPos) -> Self {
        Self { position }
    }
}

/// Offset derived from a map key's hash.
#[inline]
#[must_use]
pub fn key_offset(key: &MapKey) -> i32 {
    to_legacy_i32(i64::from(key.hash()))
}

/// Galaxy-level seed, computed once per galaxy and reused for all of its
/// star-system cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalaxySeed {
    galaxy: GridPos,
    offset: i32,
}

impl GalaxySeed {
    /// Hashes the galaxy's key.
    #[must_use]
    pub fn new(galaxy: GridPos) -> Self {
        Self {
            galaxy,
            offset: key_offset(&MapKey::galaxy(galaxy)),
        }
    }

    /// The galaxy this seed belongs to.
    #[inline]
    #[must_use]
    pub const fn galaxy(&self) -> GridPos {
        self.galaxy
    }

    /// Signed hash of the galaxy key.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// Whether a star system exists at `system` in this galaxy.
    #[inline]
    #[must_use]
    pub const fn system_exists(&self, config: &UniverseConfig, system: GridPos) -> bool {
        let side = config.galaxy_size;
        hash_tile(system.x, system.y, side, side, self.offset) % config.star_system_density == 0
    }
}

/// Existence tests for galaxies and star systems.
#[derive(Clone, Copy, Debug)]
pub struct PresenceClassifier {
    config: UniverseConfig,
    universe_offset: i32,
}

impl PresenceClassifier {
    /// Creates a classifier. The universe key is hashed once here.
    #[must_use]
    pub fn new(config: UniverseConfig) -> Self {
        Self {
            config,
            universe_offset: key_offset(&MapKey::Universe),
        }
    }

    /// Whether a galaxy exists at `galaxy` in the universe grid.
    #[inline]
    #[must_use]
    pub const fn galaxy_exists(&self, galaxy: GridPos) -> bool {
        let side = self.config.universe_size;
        hash_tile(galaxy.x, galaxy.y, side, side, self.universe_offset) % self.config.galaxy_density
            == 0
    }

    /// Seed for the star-system tests of one galaxy.
    #[inline]
    #[must_use]
    pub fn galaxy_seed(&self, galaxy: GridPos) -> GalaxySeed {
        GalaxySeed::new(galaxy)
    }

    /// Whether a star system exists at `system` in galaxy `galaxy`.
    ///
    /// Re-hashes the galaxy key on every call; use [`GalaxySeed`] in loops.
    #[must_use]
    pub fn system_exists(&self, galaxy: GridPos, system: GridPos) -> bool {
        self.galaxy_seed(galaxy).system_exists(&self.config, system)
    }
}
