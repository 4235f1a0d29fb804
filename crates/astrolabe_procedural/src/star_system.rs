//! # Star System Generation
//!
//! For an existing system: its star type and the cells its stars occupy.
//!
//! ## Star Cells
//!
//! With `h` the hash of the system key and `n` the planet-grid side:
//!
//! ```text
//! primary   = |i32(h)| mod n*n            -> (primary mod n, primary / n)
//! secondary = |i32(hash_uint(h))|         -> (secondary mod n, secondary / n)
//! ```
//!
//! The secondary index is NOT reduced before it is compared to the
//! primary; if they are equal the system has no secondary star. Almost
//! every secondary therefore lands far outside the planet grid. This is
//! the legacy behaviour and is preserved as is.

use std::fmt;
use std::str::FromStr;

use astrolabe_core::hash::{hash_tile, hash_uint, to_legacy_i32};
use astrolabe_core::{GridPos, MapKey};
use serde::{Deserialize, Serialize};

use crate::celestial::{decide, Decision};
use crate::planet::{Planet, PlanetAttributes};

/// Spectral class of a system's star.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum StarType {
    /// Blue star.
    Blue = 0,
    /// White star.
    White = 1,
    /// Yellow star.
    Yellow = 2,
    /// Orange star.
    Orange = 3,
    /// Red star.
    Red = 4,
}

impl StarType {
    /// Number of star types.
    pub const COUNT: u32 = 5;

    /// All star types in code order.
    pub const ALL: [Self; 5] = [Self::Blue, Self::White, Self::Yellow, Self::Orange, Self::Red];

    /// Star type of a system whose key hashes to `hash`.
    #[inline]
    #[must_use]
    pub const fn from_hash(hash: u32) -> Self {
        Self::ALL[(hash % Self::COUNT) as usize]
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

    /// Numeric code used in catalogs.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::White => "White",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Red => "Red",
        }
    }
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StarType {
    type Err = String;

    /// Accepts a name (case-insensitive) or a numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u32>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown star type code: {code}"));
        }
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown star type: {s}"))
    }
}

/// A generated star system.
///
/// Belongs to its galaxy by coordinates only.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StarSystem {
    /// Position of the enclosing galaxy in the universe grid.
    pub galaxy: GridPos,
    /// Position in the galaxy grid.
    pub position: GridPos,
    /// Star type.
    pub star_type: StarType,
}

impl StarSystem {
    /// Key of this system.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> MapKey {
        MapKey::star_system(self.galaxy, self.position)
    }
}

/// Cells of a system's primary and optional secondary star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarLayout {
    side: u32,
    primary: u32,
    secondary: Option<u32>,
}

impl StarLayout {
    /// Derives star cells from the system key hash and the planet-grid side.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_system_hash(hash: u32, side: i32) -> Self {
        let side = side as u32;
        // |i32::MIN| is 2^31, never a panic.
        let primary = to_legacy_i32(i64::from(hash)).unsigned_abs() % (side * side);
        let second = to_legacy_i32(i64::from(hash_uint(hash))).unsigned_abs();
        Self {
            side,
            primary,
            secondary: (second != primary).then_some(second),
        }
    }

    /// Row-major index of the primary star.
    #[inline]
    #[must_use]
    pub const fn primary_index(&self) -> u32 {
        self.primary
    }

    /// Unreduced index of the secondary star, if any.
    #[inline]
    #[must_use]
    pub const fn secondary_index(&self) -> Option<u32> {
        self.secondary
    }

    /// Cell of the primary star. Always inside the planet grid.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn primary(&self) -> GridPos {
        GridPos::new((self.primary % self.side) as i32, (self.primary / self.side) as i32)
    }

    /// Column and row of the secondary star, if any. Usually outside the grid.
    #[must_use]
    pub fn secondary(&self) -> Option<(u32, u32)> {
        self.secondary.map(|s| (s % self.side, s / self.side))
    }

    /// Whether a star occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: GridPos) -> bool {
        let hits = |index: u32| {
            u32::try_from(cell.x).is_ok_and(|x| x == index % self.side)
                && u32::try_from(cell.y).is_ok_and(|y| y == index / self.side)
        };
        hits(self.primary) || self.secondary.is_some_and(hits)
    }
}

/// Everything derived from one system key, computed once per system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemSeed {
    record: StarSystem,
    offset: i32,
    side: i32,
    stars: StarLayout,
}

impl SystemSeed {
    /// Hashes the system key and derives star type and star cells.
    #[must_use]
    pub fn new(galaxy: GridPos, position: GridPos, star_system_size: i32) -> Self {
        let hash = MapKey::star_system(galaxy, position).hash();
        Self {
            record: StarSystem {
                galaxy,
                position,
                star_type: StarType::from_hash(hash),
            },
            offset: to_legacy_i32(i64::from(hash)),
            side: star_system_size,
            stars: StarLayout::from_system_hash(hash, star_system_size),
        }
    }

    /// The system record.
    #[inline]
    #[must_use]
    pub const fn record(&self) -> StarSystem {
        self.record
    }

    /// Star cells.
    #[inline]
    #[must_use]
    pub const fn stars(&self) -> &StarLayout {
        &self.stars
    }

    /// Planet-grid side.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> i32 {
        self.side
    }

    /// Tile hash of a planet-grid cell, the root of the decision chain.
    #[inline]
    #[must_use]
    pub const fn tile_hash(&self, cell: GridPos) -> u32 {
        hash_tile(cell.x, cell.y, self.side, self.side, self.offset)
    }

    /// Resolves a planet-grid cell to a celestial body.
    #[must_use]
    pub fn body_at(&self, cell: GridPos) -> Decision {
        if self.stars.occupies(cell) {
            Decision::STAR
        } else {
            decide(self.tile_hash(cell))
        }
    }

    /// The planet at `cell`, if the cell resolves to one.
    #[must_use]
    pub fn planet_at(&self, cell: GridPos) -> Option<Planet> {
        let decision = self.body_at(cell);
        let planet_type = decision.body.planet_type()?;
        let key = MapKey::planet(self.record.galaxy, self.record.position, cell);
        Some(Planet::new(
            (self.record.galaxy, self.record.position, cell),
            self.record.star_type,
            planet_type,
            PlanetAttributes::derive(self.tile_hash(cell), &key),
        ))
    }
}
