//! # Universe Generator
//!
//! Facade over presence, star-system and planet generation.
//!
//! Content is computed, never stored: every method is a pure function of
//! its coordinates and the configuration. The iterators are lazy and walk
//! cells in row-major order (`y` outer, `x` inner).
//!
//! ## Example
//!
//! ```rust
//! use astrolabe_core::GridPos;
//! use astrolabe_procedural::UniverseGenerator;
//!
//! let universe = UniverseGenerator::legacy();
//! let galaxy = GridPos::new(1, 4);
//! assert!(universe.galaxy_exists(galaxy));
//! let systems: Vec<_> = universe.systems_in(galaxy).collect();
//! assert!(!systems.is_empty());
//! ```

use astrolabe_core::{GridPos, MapKey, MapType};

use crate::celestial::Decision;
use crate::config::UniverseConfig;
use crate::error::{ProceduralError, ProceduralResult};
use crate::planet::Planet;
use crate::presence::{Galaxy, PresenceClassifier};
use crate::star_system::{StarSystem, SystemSeed};

/// Cells of a `side x side` grid in row-major order.
pub fn grid_cells(side: i32) -> impl Iterator<Item = GridPos> {
    (0..side).flat_map(move |y| (0..side).map(move |x| GridPos::new(x, y)))
}

fn check_bounds(level: &'static str, position: GridPos, side: i32) -> ProceduralResult<()> {
    if (0..side).contains(&position.x) && (0..side).contains(&position.y) {
        Ok(())
    } else {
        Err(ProceduralError::OutOfBounds {
            level,
            position,
            side,
        })
    }
}

/// Deterministic universe generator.
#[derive(Clone, Copy, Debug)]
pub struct UniverseGenerator {
    config: UniverseConfig,
    presence: PresenceClassifier,
}

impl UniverseGenerator {
    /// Creates a generator for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidConfig`] if the configuration is
    /// out of range.
    pub fn new(config: UniverseConfig) -> ProceduralResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            presence: PresenceClassifier::new(config),
        })
    }

    /// Generator for the legacy universe.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            config: UniverseConfig::LEGACY,
            presence: PresenceClassifier::new(UniverseConfig::LEGACY),
        }
    }

    /// The configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Whether a galaxy exists at a universe cell.
    #[inline]
    #[must_use]
    pub const fn galaxy_exists(&self, galaxy: GridPos) -> bool {
        self.presence.galaxy_exists(galaxy)
    }

    /// Whether a star system exists at a galaxy cell.
    ///
    /// Does not check that the galaxy itself exists.
    #[must_use]
    pub fn system_exists(&self, galaxy: GridPos, system: GridPos) -> bool {
        self.presence.system_exists(galaxy, system)
    }

    /// Star-system seed for a cell, whether or not a system exists there.
    #[must_use]
    pub fn system_seed(&self, galaxy: GridPos, system: GridPos) -> SystemSeed {
        SystemSeed::new(galaxy, system, self.config.star_system_size)
    }

    /// The star system at a cell, if both it and its galaxy exist.
    #[must_use]
    pub fn star_system_at(&self, galaxy: GridPos, system: GridPos) -> Option<StarSystem> {
        (self.galaxy_exists(galaxy) && self.system_exists(galaxy, system))
            .then(|| self.system_seed(galaxy, system).record())
    }

    /// Celestial body at a planet-grid cell. Parent existence is not checked.
    #[must_use]
    pub fn body_at(&self, galaxy: GridPos, system: GridPos, cell: GridPos) -> Decision {
        self.system_seed(galaxy, system).body_at(cell)
    }

    /// The planet at a planet-grid cell. Parent existence is not checked.
    #[must_use]
    pub fn planet_at(&self, galaxy: GridPos, system: GridPos, cell: GridPos) -> Option<Planet> {
        self.system_seed(galaxy, system).planet_at(cell)
    }

    /// Computes a single planet from its key without scanning.
    ///
    /// # Errors
    ///
    /// - [`ProceduralError::WrongDepth`] if `key` is not a planet key
    /// - [`ProceduralError::OutOfBounds`] if a coordinate lies outside its grid
    /// - [`ProceduralError::NoGalaxy`] / [`ProceduralError::NoStarSystem`] if a
    ///   parent does not exist
    /// - [`ProceduralError::NotAPlanet`] if the cell holds another body
    pub fn planet_by_key(&self, key: &MapKey) -> ProceduralResult<Planet> {
        let MapKey::Planet { galaxy, system, cell } = *key else {
            return Err(ProceduralError::WrongDepth {
                expected: MapType::Planet,
                found: key.map_type(),
            });
        };
        check_bounds("galaxy", galaxy, self.config.universe_size)?;
        check_bounds("system", system, self.config.galaxy_size)?;
        check_bounds("planet", cell, self.config.star_system_size)?;

        if !self.galaxy_exists(galaxy) {
            return Err(ProceduralError::NoGalaxy(galaxy));
        }
        if !self.system_exists(galaxy, system) {
            return Err(ProceduralError::NoStarSystem { galaxy, system });
        }
        let seed = self.system_seed(galaxy, system);
        seed.planet_at(cell).ok_or_else(|| ProceduralError::NotAPlanet {
            key: key.to_string(),
            body: seed.body_at(cell).body,
        })
    }

    /// Every galaxy, in row-major order.
    pub fn galaxies(&self) -> impl Iterator<Item = Galaxy> + '_ {
        (0..self.config.universe_size).flat_map(move |gy| self.galaxy_row(gy))
    }

    /// Galaxies of one universe row, by ascending `gx`.
    pub fn galaxy_row(&self, gy: i32) -> impl Iterator<Item = Galaxy> + '_ {
        (0..self.config.universe_size)
            .map(move |gx| GridPos::new(gx, gy))
            .filter(move |&cell| self.galaxy_exists(cell))
            .map(Galaxy::new)
    }

    /// Star systems of a galaxy, in row-major order.
    ///
    /// Does not check that the galaxy itself exists.
    pub fn systems_in(&self, galaxy: GridPos) -> impl Iterator<Item = StarSystem> + '_ {
        let seed = self.presence.galaxy_seed(galaxy);
        grid_cells(self.config.galaxy_size)
            .filter(move |&cell| seed.system_exists(&self.config, cell))
            .map(move |cell| self.system_seed(galaxy, cell).record())
    }

    /// Planets of a star system, in row-major order. Star cells are skipped.
    pub fn planets_in(&self, system: &StarSystem) -> impl Iterator<Item = Planet> {
        let seed = self.system_seed(system.galaxy, system.position);
        grid_cells(self.config.star_system_size).filter_map(move |cell| seed.planet_at(cell))
    }
}

impl Default for UniverseGenerator {
    fn default() -> Self {
        Self::legacy()
    }
}
