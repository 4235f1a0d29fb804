//! # Celestial Bodies
//!
//! Decides what occupies a planet-grid cell that holds no star.
//!
//! ## Decision Chain
//!
//! Starting from the cell's tile hash, the hash is passed through
//! [`hash_uint`] once and then once more before every test. The first
//! test that fires decides the cell:
//!
//! ```text
//! step  test        outcome
//!  1    h % 50 != 0 SpaceEmptiness     (rejected)
//!  2    h % 2  != 0 Asteroid           (rejected)
//!  3    h % 40 == 0 Gaia
//!  4    h % 40 == 0 SuperDimensional
//!  5    h % 10 == 0 GasGiant           (rejected)
//!  6    h % 9  == 0 GasGiantRinged     (rejected)
//!  7    h % 3  == 0 Continental
//!  8    h % 2  == 0 Molten
//!  9    h % 4  == 0 Barren
//! 10    h % 3  == 0 Arid
//! 11    h % 2  == 0 Frozen, else Ocean
//! ```
//!
//! The order is frozen. Reordering any branch changes the universe.

use std::fmt;
use std::str::FromStr;

use astrolabe_core::hash::hash_uint;
use serde::{Deserialize, Serialize};

/// Classification of an accepted planet.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum PlanetType {
    /// Barren rock.
    Barren = 0,
    /// Desert world.
    Arid = 1,
    /// Ocean world.
    Ocean = 2,
    /// Molten world.
    Molten = 3,
    /// Ice world.
    Frozen = 4,
    /// Continental world.
    Continental = 5,
    /// Gaia world.
    Gaia = 6,
    /// Super-dimensional anomaly.
    SuperDimensional = 7,
}

impl PlanetType {
    /// Number of planet types.
    pub const COUNT: u32 = 8;

    /// All planet types in code order.
    pub const ALL: [Self; 8] = [
        Self::Barren,
        Self::Arid,
        Self::Ocean,
        Self::Molten,
        Self::Frozen,
        Self::Continental,
        Self::Gaia,
        Self::SuperDimensional,
    ];

    /// Numeric code used in catalogs.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Converts from the numeric code used in catalogs.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        if code < Self::COUNT {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Barren => "Barren",
            Self::Arid => "Arid",
            Self::Ocean => "Ocean",
            Self::Molten => "Molten",
            Self::Frozen => "Frozen",
            Self::Continental => "Continental",
            Self::Gaia => "Gaia",
            Self::SuperDimensional => "SuperDimensional",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlanetType {
    type Err = String;

    /// Accepts a name (case-insensitive) or a numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u32>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown planet type code: {code}"));
        }
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown planet type: {s}"))
    }
}

/// What occupies one planet-grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    /// A primary or secondary star.
    Star,
    /// Nothing.
    SpaceEmptiness,
    /// Asteroid field.
    Asteroid,
    /// Gas giant.
    GasGiant,
    /// Ringed gas giant.
    GasGiantRinged,
    /// An accepted planet.
    Planet(PlanetType),
}

impl CelestialBody {
    /// The planet type, if this body is an accepted planet.
    #[inline]
    #[must_use]
    pub const fn planet_type(self) -> Option<PlanetType> {
        match self {
            Self::Planet(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Star => f.write_str("Star"),
            Self::SpaceEmptiness => f.write_str("SpaceEmptiness"),
            Self::Asteroid => f.write_str("Asteroid"),
            Self::GasGiant => f.write_str("GasGiant"),
            Self::GasGiantRinged => f.write_str("GasGiantRinged"),
            Self::Planet(t) => write!(f, "Planet({t})"),
        }
    }
}

/// Outcome of the decision chain for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// The decided body.
    pub body: CelestialBody,
    /// Step (1..=11) at which the chain stopped. Zero for star cells.
    pub step: u8,
}

impl Decision {
    /// Decision for a cell holding a star; the chain never runs.
    pub const STAR: Self = Self {
        body: CelestialBody::Star,
        step: 0,
    };
}

/// Re-hashing sequence of the decision chain.
struct HashChain {
    hash: u32,
    step: u8,
}

impl HashChain {
    const fn new(tile_hash: u32) -> Self {
        Self {
            hash: hash_uint(tile_hash),
            step: 0,
        }
    }

    /// Advances to the next step and returns its hash.
    fn advance(&mut self) -> u32 {
        self.hash = hash_uint(self.hash);
        self.step += 1;
        self.hash
    }

    const fn decide(&self, body: CelestialBody) -> Decision {
        Decision {
            body,
            step: self.step,
        }
    }
}

/// Runs the decision chain on a cell's tile hash.
#[must_use]
pub fn decide(tile_hash: u32) -> Decision {
    use CelestialBody::{Asteroid, GasGiant, GasGiantRinged, Planet, SpaceEmptiness};

    let mut chain = HashChain::new(tile_hash);
    if chain.advance() % 50 != 0 {
        return chain.decide(SpaceEmptiness);
    }
    if chain.advance() % 2 != 0 {
        return chain.decide(Asteroid);
    }
    if chain.advance() % 40 == 0 {
        return chain.decide(Planet(PlanetType::Gaia));
    }
    if chain.advance() % 40 == 0 {
        return chain.decide(Planet(PlanetType::SuperDimensional));
    }
    if chain.advance() % 10 == 0 {
        return chain.decide(GasGiant);
    }
    if chain.advance() % 9 == 0 {
        return chain.decide(GasGiantRinged);
    }
    if chain.advance() % 3 == 0 {
        return chain.decide(Planet(PlanetType::Continental));
    }
    if chain.advance() % 2 == 0 {
        return chain.decide(Planet(PlanetType::Molten));
    }
    if chain.advance() % 4 == 0 {
        return chain.decide(Planet(PlanetType::Barren));
    }
    if chain.advance() % 3 == 0 {
        return chain.decide(Planet(PlanetType::Arid));
    }
    let last = if chain.advance() % 2 == 0 {
        PlanetType::Frozen
    } else {
        PlanetType::Ocean
    };
    chain.decide(Planet(last))
}
