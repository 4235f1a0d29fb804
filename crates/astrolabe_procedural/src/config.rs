//! # Universe Configuration
//!
//! Grid dimensions and densities. The defaults are the legacy universe;
//! smaller values describe toy universes for tests.

use serde::{Deserialize, Serialize};

use crate::error::{ProceduralError, ProceduralResult};

/// Largest accepted grid side. Keeps `side * side` inside 32 bits.
pub const MAX_GRID_SIZE: i32 = 10_000;

/// Shape of the universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniverseConfig {
    /// Side of the universe grid (galaxy cells).
    pub universe_size: i32,
    /// Side of each galaxy grid (star-system cells).
    pub galaxy_size: i32,
    /// Side of each star system's planet grid.
    pub star_system_size: i32,
    /// A galaxy exists where the universe tile hash is divisible by this.
    pub galaxy_density: u32,
    /// A star system exists where the galaxy tile hash is divisible by this.
    pub star_system_density: u32,
}

impl UniverseConfig {
    /// The legacy universe: 100x100 galaxies, 100x100 systems, 32x32 cells.
    pub const LEGACY: Self = Self {
        universe_size: 100,
        galaxy_size: 100,
        star_system_size: 32,
        galaxy_density: 50,
        star_system_density: 200,
    };

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidConfig`] if a grid side is outside
    /// `1..=MAX_GRID_SIZE` or a density is zero.
    pub fn validate(&self) -> ProceduralResult<()> {
        let sides = [
            ("universe_size", self.universe_size),
            ("galaxy_size", self.galaxy_size),
            ("star_system_size", self.star_system_size),
        ];
        for (name, side) in sides {
            if !(1..=MAX_GRID_SIZE).contains(&side) {
                return Err(ProceduralError::InvalidConfig(format!(
                    "{name} must be in 1..={MAX_GRID_SIZE}, got {side}"
                )));
            }
        }
        if self.galaxy_density == 0 {
            return Err(ProceduralError::InvalidConfig(
                "galaxy_density must be at least 1".to_owned(),
            ));
        }
        if self.star_system_density == 0 {
            return Err(ProceduralError::InvalidConfig(
                "star_system_density must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self::LEGACY
    }
}
