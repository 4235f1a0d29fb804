//! # Spatial Keys
//!
//! Canonical string keys for coordinates at one of four depths.
//!
//! ## Key Format
//!
//! ```text
//! Weathering.MapOfUniverse#
//! Weathering.MapOfGalaxy#=gx,gy
//! Weathering.MapOfStarSystem#=gx,gy=sx,sy
//! Weathering.MapOfPlanet#=gx,gy=sx,sy=px,py
//! ```
//!
//! The part from `#` on is the key's *self index*. Keys are hash input:
//! two keys render identically iff their map type and coordinates are
//! equal, so the same coordinates always hash the same.

use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;
use crate::grid::GridPos;
use crate::hash::hash_string;

/// Namespace prefix of every key.
pub const KEY_NAMESPACE: &str = "Weathering.";

/// Granularity of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapType {
    /// The whole universe grid.
    Universe,
    /// One galaxy's grid of star systems.
    Galaxy,
    /// One star system's planet grid.
    StarSystem,
    /// A single planet.
    Planet,
}

impl MapType {
    /// Label used inside keys.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Universe => "MapOfUniverse",
            Self::Galaxy => "MapOfGalaxy",
            Self::StarSystem => "MapOfStarSystem",
            Self::Planet => "MapOfPlanet",
        }
    }

    /// Number of coordinate pairs a key of this type carries.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Universe => 0,
            Self::Galaxy => 1,
            Self::StarSystem => 2,
            Self::Planet => 3,
        }
    }

    /// Looks up a map type by its label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "MapOfUniverse" => Some(Self::Universe),
            "MapOfGalaxy" => Some(Self::Galaxy),
            "MapOfStarSystem" => Some(Self::StarSystem),
            "MapOfPlanet" => Some(Self::Planet),
            _ => None,
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A spatial key.
///
/// Deeper keys embed their parents' coordinates; there is no other link
/// between levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapKey {
    /// `Weathering.MapOfUniverse#`
    Universe,
    /// A galaxy cell of the universe grid.
    Galaxy {
        /// Galaxy position in the universe grid.
        galaxy: GridPos,
    },
    /// A star-system cell of a galaxy grid.
    StarSystem {
        /// Galaxy position in the universe grid.
        galaxy: GridPos,
        /// System position in the galaxy grid.
        system: GridPos,
    },
    /// A planet cell of a star system's planet grid.
    Planet {
        /// Galaxy position in the universe grid.
        galaxy: GridPos,
        /// System position in the galaxy grid.
        system: GridPos,
        /// Cell in the system's planet grid.
        cell: GridPos,
    },
}

impl MapKey {
    /// Key of a galaxy.
    #[inline]
    #[must_use]
    pub const fn galaxy(galaxy: GridPos) -> Self {
        Self::Galaxy { galaxy }
    }

    /// Key of a star system.
    #[inline]
    #[must_use]
    pub const fn star_system(galaxy: GridPos, system: GridPos) -> Self {
        Self::StarSystem { galaxy, system }
    }

    /// Key of a planet cell.
    #[inline]
    #[must_use]
    pub const fn planet(galaxy: GridPos, system: GridPos, cell: GridPos) -> Self {
        Self::Planet { galaxy, system, cell }
    }

    /// Granularity of this key.
    #[must_use]
    pub const fn map_type(&self) -> MapType {
        match self {
            Self::Universe => MapType::Universe,
            Self::Galaxy { .. } => MapType::Galaxy,
            Self::StarSystem { .. } => MapType::StarSystem,
            Self::Planet { .. } => MapType::Planet,
        }
    }

    /// Coordinate pairs from outermost to innermost.
    #[must_use]
    pub const fn levels(&self) -> [Option<GridPos>; 3] {
        match *self {
            Self::Universe => [None, None, None],
            Self::Galaxy { galaxy } => [Some(galaxy), None, None],
            Self::StarSystem { galaxy, system } => [Some(galaxy), Some(system), None],
            Self::Planet { galaxy, system, cell } => [Some(galaxy), Some(system), Some(cell)],
        }
    }

    /// The `#=...` suffix of the key.
    #[must_use]
    pub const fn self_index(&self) -> SelfIndex<'_> {
        SelfIndex(self)
    }

    /// Hash of the full key string.
    #[must_use]
    pub fn hash(&self) -> u32 {
        hash_string(&self.to_string())
    }

    /// Hash of the self index alone.
    #[must_use]
    pub fn self_index_hash(&self) -> u32 {
        hash_string(&self.self_index().to_string())
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KEY_NAMESPACE}{}{}", self.map_type(), self.self_index())
    }
}

/// Display adapter for [`MapKey::self_index`].
#[derive(Clone, Copy, Debug)]
pub struct SelfIndex<'a>(&'a MapKey);

impl fmt::Display for SelfIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#")?;
        for pos in self.0.levels().into_iter().flatten() {
            write!(f, "={pos}")?;
        }
        Ok(())
    }
}

impl FromStr for MapKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(KEY_NAMESPACE)
            .ok_or_else(|| KeyError::MissingNamespace(s.to_owned()))?;
        let (label, index) = rest
            .split_once('#')
            .ok_or_else(|| KeyError::MissingIndex(s.to_owned()))?;
        let map_type =
            MapType::from_label(label).ok_or_else(|| KeyError::UnknownMapType(label.to_owned()))?;
        let levels = parse_index(index)?;

        match (map_type, levels.as_slice()) {
            (MapType::Universe, []) => Ok(Self::Universe),
            (MapType::Galaxy, &[galaxy]) => Ok(Self::galaxy(galaxy)),
            (MapType::StarSystem, &[galaxy, system]) => Ok(Self::star_system(galaxy, system)),
            (MapType::Planet, &[galaxy, system, cell]) => Ok(Self::planet(galaxy, system, cell)),
            _ => Err(KeyError::DepthMismatch {
                map_type,
                expected: map_type.depth(),
                found: levels.len(),
            }),
        }
    }
}

fn parse_index(index: &str) -> Result<Vec<GridPos>, KeyError> {
    if index.is_empty() {
        return Ok(Vec::new());
    }
    let body = index
        .strip_prefix('=')
        .ok_or_else(|| KeyError::MalformedCoordinates(index.to_owned()))?;
    body.split('=').map(parse_pair).collect()
}

fn parse_pair(pair: &str) -> Result<GridPos, KeyError> {
    let malformed = || KeyError::MalformedCoordinates(pair.to_owned());
    let (x, y) = pair.split_once(',').ok_or_else(malformed)?;
    let x = parse_coordinate(x).ok_or_else(malformed)?;
    let y = parse_coordinate(y).ok_or_else(malformed)?;
    Ok(GridPos::new(x, y))
}

/// Accepts only the form `Display` writes: no `+`, no leading zeros, no `-0`.
/// Anything else would hash differently from the key it names.
fn parse_coordinate(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == text.len(),
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical {
        text.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format_per_depth() {
        let g = GridPos::new(1, 4);
        let s = GridPos::new(14, 93);
        let p = GridPos::new(24, 31);

        assert_eq!(MapKey::Universe.to_string(), "Weathering.MapOfUniverse#");
        assert_eq!(MapKey::galaxy(g).to_string(), "Weathering.MapOfGalaxy#=1,4");
        assert_eq!(
            MapKey::star_system(g, s).to_string(),
            "Weathering.MapOfStarSystem#=1,4=14,93"
        );
        assert_eq!(
            MapKey::planet(g, s, p).to_string(),
            "Weathering.MapOfPlanet#=1,4=14,93=24,31"
        );
    }

    #[test]
    fn test_self_index() {
        let key = MapKey::planet(GridPos::new(1, 4), GridPos::new(14, 93), GridPos::new(24, 31));
        assert_eq!(key.self_index().to_string(), "#=1,4=14,93=24,31");
        assert_eq!(MapKey::Universe.self_index().to_string(), "#");
    }

    #[test]
    fn test_key_hash_matches_string_hash() {
        assert_eq!(MapKey::Universe.hash(), 999_406_192);
        let key = MapKey::star_system(GridPos::new(1, 0), GridPos::new(1, 1));
        assert_eq!(key.hash(), 605_372_855);
    }

    #[test]
    fn test_parse_planet_key() {
        let key: MapKey = "Weathering.MapOfPlanet#=97,11=18,1=20,6".parse().unwrap();
        assert_eq!(
            key,
            MapKey::planet(GridPos::new(97, 11), GridPos::new(18, 1), GridPos::new(20, 6))
        );
        assert_eq!(key.to_string(), "Weathering.MapOfPlanet#=97,11=18,1=20,6");
    }

    #[test]
    fn test_parse_universe_key() {
        assert_eq!("Weathering.MapOfUniverse#".parse::<MapKey>(), Ok(MapKey::Universe));
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(matches!(
            "MapOfPlanet#=1,2=3,4=5,6".parse::<MapKey>(),
            Err(KeyError::MissingNamespace(_))
        ));
        assert!(matches!(
            "Weathering.MapOfPlanet=1,2".parse::<MapKey>(),
            Err(KeyError::MissingIndex(_))
        ));
        assert!(matches!(
            "Weathering.MapOfMoon#=1,2".parse::<MapKey>(),
            Err(KeyError::UnknownMapType(_))
        ));
        assert!(matches!(
            "Weathering.MapOfGalaxy#=1;2".parse::<MapKey>(),
            Err(KeyError::MalformedCoordinates(_))
        ));
        assert!(matches!(
            "Weathering.MapOfGalaxy#1,2".parse::<MapKey>(),
            Err(KeyError::MalformedCoordinates(_))
        ));
        assert_eq!(
            "Weathering.MapOfPlanet#=1,2=3,4".parse::<MapKey>(),
            Err(KeyError::DepthMismatch {
                map_type: MapType::Planet,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_parse_accepts_only_canonical_integers() {
        for text in [
            "Weathering.MapOfGalaxy#=+1,4",
            "Weathering.MapOfGalaxy#=1,04",
            "Weathering.MapOfGalaxy#=007,4",
            "Weathering.MapOfGalaxy#=-0,4",
            "Weathering.MapOfGalaxy#=1,-",
            "Weathering.MapOfGalaxy#=1, 4",
            "Weathering.MapOfGalaxy#=1,2147483648",
        ] {
            assert!(
                matches!(text.parse::<MapKey>(), Err(KeyError::MalformedCoordinates(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_display_round_trip() {
        for text in [
            "Weathering.MapOfGalaxy#=0,0",
            "Weathering.MapOfGalaxy#=-3,10",
            "Weathering.MapOfStarSystem#=-2147483648,2147483647=0,99",
            "Weathering.MapOfPlanet#=1,4=14,93=24,31",
        ] {
            let key: MapKey = text.parse().unwrap();
            assert_eq!(key.to_string(), text);
        }
    }

    #[test]
    fn test_equal_coordinates_give_equal_keys() {
        let a = MapKey::star_system(GridPos::new(3, 4), GridPos::new(5, 6));
        let b = MapKey::star_system(GridPos::new(3, 4), GridPos::new(5, 6));
        let c = MapKey::star_system(GridPos::new(3, 4), GridPos::new(6, 5));
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a.to_string(), c.to_string());
        assert_ne!(
            MapKey::galaxy(GridPos::new(3, 4)).to_string(),
            MapKey::star_system(GridPos::new(3, 4), GridPos::new(0, 0)).to_string()
        );
    }
}
