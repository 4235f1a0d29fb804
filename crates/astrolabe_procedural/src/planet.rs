//! # Planet Attributes
//!
//! Physical and orbital attributes of an accepted planet.
//!
//! Attributes do not depend on where the decision chain stopped. They are
//! derived from the same tile hash, the planet key and the key's self
//! index:
//!
//! ```text
//! slowed           = 1 + |legacy_mod(i32(hash_uint(hash_uint(tile))), 7)|   1..=7
//! seconds/day      = 480 / (1 + slowed)                                    60..=240
//! days/month       = 2 + hash(planet key) mod 15                            2..=16
//! days/year        = 12 * days/month
//! planet size      = 50 + hash(self index) mod 100                         50..=149
//! mineral density  = 3 + hash_uint(hash(self index) + SALT) mod 27          3..=29
//! ```

use astrolabe_core::hash::{hash_uint, legacy_mod, salted, to_legacy_i32};
use astrolabe_core::{GridPos, MapKey};
use serde::{Deserialize, Serialize};

use crate::celestial::PlanetType;
use crate::star_system::StarType;

/// Months in every planet's year.
pub const MONTHS_FOR_A_YEAR: u32 = 12;

/// Length of the base day in seconds before slowing.
pub const BASE_DAY_SECONDS: u32 = 60 * 8;

/// Salt added to the self-index hash before deriving mineral density.
pub const MINERAL_SALT: u32 = 2_641_779_086;

/// Attributes derived for one planet cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanetAttributes {
    /// Seconds per day, 60..=240.
    pub seconds_for_a_day: u32,
    /// Days per month, 2..=16.
    pub days_for_a_month: u32,
    /// Days per year, always `12 * days_for_a_month`.
    pub days_for_a_year: u32,
    /// Months per year, always 12.
    pub months_for_a_year: u32,
    /// Planet size, 50..=149.
    pub planet_size: u32,
    /// Mineral density, 3..=29.
    pub mineral_density: u32,
}

impl PlanetAttributes {
    /// Derives attributes from the cell's tile hash and its planet key.
    #[must_use]
    pub fn derive(tile_hash: u32, key: &MapKey) -> Self {
        let again = hash_uint(hash_uint(tile_hash));
        let slowed = 1 + legacy_mod(to_legacy_i32(i64::from(again)), 7).unsigned_abs();
        let planet_hash = key.hash();
        let self_hash = key.self_index_hash();
        let days_for_a_month = 2 + planet_hash % 15;

        Self {
            seconds_for_a_day: BASE_DAY_SECONDS / (1 + slowed),
            days_for_a_month,
            days_for_a_year: MONTHS_FOR_A_YEAR * days_for_a_month,
            months_for_a_year: MONTHS_FOR_A_YEAR,
            planet_size: 50 + self_hash % 100,
            mineral_density: 3 + salted(self_hash, MINERAL_SALT) % 27,
        }
    }
}

/// A generated planet.
///
/// Belongs to its system by coordinates only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Planet {
    /// Galaxy cell in the universe grid.
    pub galaxy: GridPos,
    /// System cell in the galaxy grid.
    pub system: GridPos,
    /// Cell in the system's planet grid.
    pub cell: GridPos,
    /// Star type of the enclosing system.
    pub star_type: StarType,
    /// Planet type.
    pub planet_type: PlanetType,
    /// Seconds per day.
    pub seconds_for_a_day: u32,
    /// Days per month.
    pub days_for_a_month: u32,
    /// Days per year.
    pub days_for_a_year: u32,
    /// Months per year.
    pub months_for_a_year: u32,
    /// Planet size.
    pub planet_size: u32,
    /// Mineral density.
    pub mineral_density: u32,
}

impl Planet {
    /// Assembles a planet record.
    #[must_use]
    pub const fn new(
        key: (GridPos, GridPos, GridPos),
        star_type: StarType,
        planet_type: PlanetType,
        attributes: PlanetAttributes,
    ) -> Self {
        let (galaxy, system, cell) = key;
        Self {
            galaxy,
            system,
            cell,
            star_type,
            planet_type,
            seconds_for_a_day: attributes.seconds_for_a_day,
            days_for_a_month: attributes.days_for_a_month,
            days_for_a_year: attributes.days_for_a_year,
            months_for_a_year: attributes.months_for_a_year,
            planet_size: attributes.planet_size,
            mineral_density: attributes.mineral_density,
        }
    }

    /// Key of this planet.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> MapKey {
        MapKey::planet(self.galaxy, self.system, self.cell)
    }

    /// Derived attributes of this planet.
    #[must_use]
    pub const fn attributes(&self) -> PlanetAttributes {
        PlanetAttributes {
            seconds_for_a_day: self.seconds_for_a_day,
            days_for_a_month: self.days_for_a_month,
            days_for_a_year: self.days_for_a_year,
            months_for_a_year: self.months_for_a_year,
            planet_size: self.planet_size,
            mineral_density: self.mineral_density,
        }
    }

    /// Coordinate triple, the canonical ordering key for planets.
    #[inline]
    #[must_use]
    pub const fn coordinates(&self) -> (GridPos, GridPos, GridPos) {
        (self.galaxy, self.system, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(galaxy: (i32, i32), system: (i32, i32), cell: (i32, i32)) -> PlanetAttributes {
        let (galaxy, system, cell): (GridPos, GridPos, GridPos) = (galaxy.into(), system.into(), cell.into());
        let offset = to_legacy_i32(i64::from(MapKey::star_system(galaxy, system).hash()));
        let tile = astrolabe_core::hash::hash_tile(cell.x, cell.y, 32, 32, offset);
        PlanetAttributes::derive(tile, &MapKey::planet(galaxy, system, cell))
    }

    #[test]
    fn test_reference_continental_attributes() {
        let a = attributes((1, 4), (14, 93), (24, 31));
        assert_eq!(a.seconds_for_a_day, 160);
        assert_eq!(a.days_for_a_month, 5);
        assert_eq!(a.days_for_a_year, 60);
        assert_eq!(a.months_for_a_year, 12);
        assert_eq!(a.planet_size, 142);
        assert_eq!(a.mineral_density, 5);
    }

    #[test]
    fn test_reference_barren_attributes() {
        let a = attributes((97, 11), (18, 1), (20, 6));
        assert_eq!(a.seconds_for_a_day, 80);
        assert_eq!(a.days_for_a_month, 5);
        assert_eq!(a.days_for_a_year, 60);
        assert_eq!(a.planet_size, 120);
        assert_eq!(a.mineral_density, 7);
    }

    #[test]
    fn test_attribute_ranges() {
        for x in 0..32 {
            for y in 0..32 {
                let a = attributes((3, 4), (5, 6), (x, y));
                assert!((60..=240).contains(&a.seconds_for_a_day));
                assert!((2..=16).contains(&a.days_for_a_month));
                assert_eq!(a.days_for_a_year, 12 * a.days_for_a_month);
                assert!((50..=149).contains(&a.planet_size));
                assert!((3..=29).contains(&a.mineral_density));
            }
        }
    }

    #[test]
    fn test_planet_record_round_trips_attributes() {
        let a = attributes((1, 4), (14, 93), (24, 1));
        let planet = Planet::new(
            (GridPos::new(1, 4), GridPos::new(14, 93), GridPos::new(24, 1)),
            StarType::Blue,
            PlanetType::Frozen,
            a,
        );
        assert_eq!(planet.attributes(), a);
        assert_eq!(
            planet.key().to_string(),
            "Weathering.MapOfPlanet#=1,4=14,93=24,1"
        );
    }
}
