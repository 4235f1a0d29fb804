//! # Astrolabe Procedural
//!
//! Deterministic content of the universe: galaxies, star systems and planets.
//!
//! ## Design Principles
//!
//! 1. **Coordinates are the seed**: no randomness, no hidden state
//! 2. **Frozen decision order**: the chain that picks planet types never changes
//! 3. **Parents by coordinates**: records reference each other only by position
//!
//! ## Levels
//!
//! ```text
//! universe grid (100x100)  -- presence -->  Galaxy
//! galaxy grid   (100x100)  -- presence -->  StarSystem (+ star cells)
//! planet grid   (32x32)    -- decision -->  CelestialBody -> Planet
//! ```
//!
//! ## Example
//!
//! ```rust
//! use astrolabe_core::MapKey;
//! use astrolabe_procedural::{PlanetType, UniverseGenerator};
//!
//! let universe = UniverseGenerator::legacy();
//! let key: MapKey = "Weathering.MapOfPlanet#=1,4=14,93=24,31".parse().unwrap();
//! let planet = universe.planet_by_key(&key).unwrap();
//! assert_eq!(planet.planet_type, PlanetType::Continental);
//! assert_eq!(planet.planet_size, 142);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod celestial;
pub mod config;
pub mod error;
pub mod filter;
pub mod planet;
pub mod presence;
pub mod samples;
pub mod star_system;
pub mod universe;

pub use celestial::{decide, CelestialBody, Decision, PlanetType};
pub use config::{UniverseConfig, MAX_GRID_SIZE};
pub use error::{ProceduralError, ProceduralResult};
pub use filter::{sort_planets, PlanetFilter, PlanetSortKey};
pub use planet::{Planet, PlanetAttributes, MONTHS_FOR_A_YEAR};
pub use presence::{Galaxy, GalaxySeed, PresenceClassifier};
pub use star_system::{StarLayout, StarSystem, StarType, SystemSeed};
pub use universe::UniverseGenerator;
