//! # Toy Universe Integration Test
//!
//! A 2x2 universe of 2x2 galaxies, small enough to pin every outcome.

use astrolabe_core::GridPos;
use astrolabe_procedural::{
    CelestialBody, Planet, PlanetType, StarType, UniverseConfig, UniverseGenerator,
};

fn toy() -> UniverseGenerator {
    UniverseGenerator::new(UniverseConfig {
        universe_size: 2,
        galaxy_size: 2,
        star_system_size: 32,
        galaxy_density: 2,
        star_system_density: 4,
    })
    .expect("toy config is valid")
}

fn all_planets(universe: &UniverseGenerator) -> Vec<Planet> {
    let mut planets = Vec::new();
    for galaxy in universe.galaxies() {
        for system in universe.systems_in(galaxy.position) {
            planets.extend(universe.planets_in(&system));
        }
    }
    planets
}

fn pos(x: i32, y: i32) -> GridPos {
    GridPos::new(x, y)
}

/// Test: every pinned planet has exactly the hand-computed attributes.
#[test]
fn test_pinned_toy_planets() {
    let universe = toy();
    // (galaxy, system, cell, star, type, secs, dm, dy, size, mineral)
    let expected = [
        ((1, 0), (0, 1), (19, 2), StarType::Orange, PlanetType::Barren, 120, 4, 48, 100, 29),
        ((1, 0), (0, 1), (11, 5), StarType::Orange, PlanetType::Molten, 68, 12, 144, 89, 5),
        ((1, 0), (0, 1), (4, 11), StarType::Orange, PlanetType::Gaia, 68, 6, 72, 111, 28),
        ((1, 0), (1, 1), (24, 4), StarType::Blue, PlanetType::Molten, 96, 11, 132, 58, 8),
        ((1, 0), (1, 1), (14, 1), StarType::Blue, PlanetType::Frozen, 80, 5, 60, 50, 15),
        ((1, 1), (0, 0), (21, 2), StarType::Yellow, PlanetType::Molten, 240, 11, 132, 127, 21),
        ((1, 1), (1, 1), (29, 30), StarType::Blue, PlanetType::SuperDimensional, 68, 10, 120, 122, 11),
        ((1, 1), (0, 0), (31, 25), StarType::Yellow, PlanetType::Arid, 96, 9, 108, 143, 12),
        ((1, 1), (1, 1), (14, 26), StarType::Blue, PlanetType::Continental, 80, 2, 24, 66, 11),
    ];

    for (g, s, c, star, kind, secs, dm, dy, size, mineral) in expected {
        let planet = universe
            .planet_at(g.into(), s.into(), c.into())
            .unwrap_or_else(|| panic!("expected a planet at {g:?}/{s:?}/{c:?}"));
        assert_eq!(planet.star_type, star, "{c:?}");
        assert_eq!(planet.planet_type, kind, "{c:?}");
        assert_eq!(planet.seconds_for_a_day, secs, "{c:?}");
        assert_eq!(planet.days_for_a_month, dm, "{c:?}");
        assert_eq!(planet.days_for_a_year, dy, "{c:?}");
        assert_eq!(planet.months_for_a_year, 12);
        assert_eq!(planet.planet_size, size, "{c:?}");
        assert_eq!(planet.mineral_density, mineral, "{c:?}");
    }
}

/// Test: the hand-traced Molten path in system (1,0)/(1,1).
#[test]
fn test_molten_path_is_literal() {
    let universe = toy();
    let decision = universe.body_at(pos(1, 0), pos(1, 1), pos(24, 4));
    assert_eq!(decision.body, CelestialBody::Planet(PlanetType::Molten));
    assert_eq!(decision.step, 8);
}

/// Test: a cell rejected at step 1 never shows up as a planet.
#[test]
fn test_step_one_rejection_never_emitted() {
    let universe = toy();
    let decision = universe.body_at(pos(1, 0), pos(1, 1), pos(0, 0));
    assert_eq!(decision.body, CelestialBody::SpaceEmptiness);
    assert_eq!(decision.step, 1);

    let planets = all_planets(&universe);
    assert!(!planets
        .iter()
        .any(|p| p.galaxy == pos(1, 0) && p.system == pos(1, 1) && p.cell == pos(0, 0)));
    assert!(!planets
        .iter()
        .any(|p| p.galaxy == pos(1, 1) && p.system == pos(0, 0) && p.cell == pos(0, 0)));
}

/// Test: totals of the toy universe.
#[test]
fn test_toy_totals() {
    let universe = toy();
    assert_eq!(universe.galaxies().count(), 3);
    let systems: usize = universe
        .galaxies()
        .map(|g| universe.systems_in(g.position).count())
        .sum();
    assert_eq!(systems, 4);
    assert_eq!(all_planets(&universe).len(), 34);
}

/// Test: no planet sits on a star cell and every range invariant holds.
#[test]
fn test_planet_invariants() {
    let universe = toy();
    for planet in all_planets(&universe) {
        let seed = universe.system_seed(planet.galaxy, planet.system);
        assert!(!seed.stars().occupies(planet.cell));
        assert!((50..=149).contains(&planet.planet_size));
        assert!((3..=29).contains(&planet.mineral_density));
        assert!((2..=16).contains(&planet.days_for_a_month));
        assert!((60..=240).contains(&planet.seconds_for_a_day));
        assert_eq!(planet.days_for_a_year, 12 * planet.days_for_a_month);
        assert!(planet.planet_type.code() <= 7);
    }
}

/// Test: regenerating yields identical content.
#[test]
fn test_generation_is_deterministic() {
    let first = all_planets(&toy());
    let second = all_planets(&toy());
    assert_eq!(first, second);
}
