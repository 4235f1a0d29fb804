//! # Planet Queries
//!
//! Filtering and ordering of planet records, used to query catalogs.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::celestial::PlanetType;
use crate::planet::Planet;
use crate::star_system::StarType;

/// Conjunction of optional planet predicates. The default matches all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    /// Required planet type.
    pub planet_type: Option<PlanetType>,
    /// Required star type of the enclosing system.
    pub star_type: Option<StarType>,
    /// Smallest accepted planet size.
    pub min_size: Option<u32>,
    /// Largest accepted planet size.
    pub max_size: Option<u32>,
    /// Smallest accepted mineral density.
    pub min_mineral_density: Option<u32>,
    /// Largest accepted mineral density.
    pub max_mineral_density: Option<u32>,
}

impl PlanetFilter {
    /// Whether `planet` satisfies every set predicate.
    #[must_use]
    pub fn matches(&self, planet: &Planet) -> bool {
        fn within(value: u32, min: Option<u32>, max: Option<u32>) -> bool {
            !min.is_some_and(|m| value < m) && !max.is_some_and(|m| value > m)
        }

        !self.planet_type.is_some_and(|t| planet.planet_type != t)
            && !self.star_type.is_some_and(|t| planet.star_type != t)
            && within(planet.planet_size, self.min_size, self.max_size)
            && within(
                planet.mineral_density,
                self.min_mineral_density,
                self.max_mineral_density,
            )
    }
}

/// Attribute planets can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlanetSortKey {
    /// Galaxy, system, then cell coordinates.
    #[default]
    Coordinates,
    /// Planet size.
    Size,
    /// Mineral density.
    MineralDensity,
    /// Seconds per day.
    SecondsForADay,
    /// Days per month.
    DaysForAMonth,
    /// Days per year.
    DaysForAYear,
}

impl PlanetSortKey {
    /// Compares two planets by this key, ties broken by coordinates.
    #[must_use]
    pub fn compare(self, a: &Planet, b: &Planet) -> Ordering {
        let primary = match self {
            Self::Coordinates => Ordering::Equal,
            Self::Size => a.planet_size.cmp(&b.planet_size),
            Self::MineralDensity => a.mineral_density.cmp(&b.mineral_density),
            Self::SecondsForADay => a.seconds_for_a_day.cmp(&b.seconds_for_a_day),
            Self::DaysForAMonth => a.days_for_a_month.cmp(&b.days_for_a_month),
            Self::DaysForAYear => a.days_for_a_year.cmp(&b.days_for_a_year),
        };
        primary.then_with(|| a.coordinates().cmp(&b.coordinates()))
    }
}

impl FromStr for PlanetSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "coordinates" | "coords" => Ok(Self::Coordinates),
            "size" => Ok(Self::Size),
            "mineraldensity" | "mineral" => Ok(Self::MineralDensity),
            "secondsforaday" | "day" => Ok(Self::SecondsForADay),
            "daysforamonth" | "month" => Ok(Self::DaysForAMonth),
            "daysforayear" | "year" => Ok(Self::DaysForAYear),
            _ => Err(format!("unknown sort key: {s}")),
        }
    }
}

/// Sorts planets in place. The sort is stable.
pub fn sort_planets(planets: &mut [Planet], key: PlanetSortKey, descending: bool) {
    if descending {
        planets.sort_by(|a, b| key.compare(b, a));
    } else {
        planets.sort_by(|a, b| key.compare(a, b));
    }
}
