//! # Reference Planets
//!
//! Planets whose attributes are known from the legacy game. Recomputing
//! them is a quick end-to-end check of the whole hash chain.

use astrolabe_core::{GridPos, MapKey};

use crate::celestial::PlanetType;
use crate::planet::PlanetAttributes;
use crate::universe::UniverseGenerator;

/// A planet with known attributes in the legacy universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferencePlanet {
    /// Galaxy cell.
    pub galaxy: GridPos,
    /// System cell.
    pub system: GridPos,
    /// Planet cell.
    pub cell: GridPos,
    /// Expected type.
    pub planet_type: PlanetType,
    /// Expected attributes.
    pub attributes: PlanetAttributes,
}

impl ReferencePlanet {
    /// Key of the planet.
    #[must_use]
    pub const fn key(&self) -> MapKey {
        MapKey::planet(self.galaxy, self.system, self.cell)
    }
}

const fn attributes(
    seconds_for_a_day: u32,
    days_for_a_month: u32,
    planet_size: u32,
    mineral_density: u32,
) -> PlanetAttributes {
    PlanetAttributes {
        seconds_for_a_day,
        days_for_a_month,
        days_for_a_year: 12 * days_for_a_month,
        months_for_a_year: 12,
        planet_size,
        mineral_density,
    }
}

/// The reference planets.
pub const REFERENCE_PLANETS: [ReferencePlanet; 3] = [
    ReferencePlanet {
        galaxy: GridPos::new(1, 4),
        system: GridPos::new(14, 93),
        cell: GridPos::new(24, 31),
        planet_type: PlanetType::Continental,
        attributes: attributes(160, 5, 142, 5),
    },
    ReferencePlanet {
        galaxy: GridPos::new(1, 4),
        system: GridPos::new(14, 93),
        cell: GridPos::new(24, 1),
        planet_type: PlanetType::Frozen,
        attributes: attributes(80, 2, 71, 3),
    },
    ReferencePlanet {
        galaxy: GridPos::new(97, 11),
        system: GridPos::new(18, 1),
        cell: GridPos::new(20, 6),
        planet_type: PlanetType::Barren,
        attributes: attributes(80, 5, 120, 7),
    },
];

/// A reference planet that did not recompute as expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleMismatch {
    /// The reference entry.
    pub expected: ReferencePlanet,
    /// What was computed instead.
    pub found: String,
}

/// Recomputes every reference planet in the legacy universe.
///
/// Returns the mismatches; an empty list means the generator agrees with
/// the legacy game.
#[must_use]
pub fn verify_reference_planets() -> Vec<SampleMismatch> {
    let universe = UniverseGenerator::legacy();
    REFERENCE_PLANETS
        .iter()
        .filter_map(|reference| {
            let found = match universe.planet_by_key(&reference.key()) {
                Ok(planet)
                    if planet.planet_type == reference.planet_type
                        && planet.attributes() == reference.attributes =>
                {
                    return None;
                }
                Ok(planet) => format!("{planet:?}"),
                Err(error) => error.to_string(),
            };
            Some(SampleMismatch {
                expected: *reference,
                found,
            })
        })
        .collect()
}
