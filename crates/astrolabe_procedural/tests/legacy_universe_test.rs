//! # Legacy Universe Integration Test
//!
//! Known planets from the legacy game and density of the full grids.

use astrolabe_core::{GridPos, MapKey};
use astrolabe_procedural::samples::{verify_reference_planets, REFERENCE_PLANETS};
use astrolabe_procedural::{CelestialBody, StarType, UniverseGenerator};

/// Test: the three reference planets recompute exactly.
#[test]
fn test_reference_planets() {
    let universe = UniverseGenerator::legacy();
    for reference in &REFERENCE_PLANETS {
        let planet = universe
            .planet_by_key(&reference.key())
            .expect("reference planet exists");
        assert_eq!(planet.planet_type, reference.planet_type);
        assert_eq!(planet.attributes(), reference.attributes);
    }
    assert!(verify_reference_planets().is_empty());
}

/// Test: reference planets parsed from their literal key strings.
#[test]
fn test_reference_planets_from_strings() {
    let universe = UniverseGenerator::legacy();
    let key: MapKey = "Weathering.MapOfPlanet#=97,11=18,1=20,6"
        .parse()
        .expect("valid key");
    let planet = universe.planet_by_key(&key).expect("planet exists");
    assert_eq!(planet.planet_size, 120);
    assert_eq!(planet.mineral_density, 7);
    assert_eq!(planet.star_type, StarType::Yellow);
}

/// Test: star cells of the reference systems.
#[test]
fn test_reference_star_cells() {
    let universe = UniverseGenerator::legacy();
    let seed = universe.system_seed(GridPos::new(1, 4), GridPos::new(14, 93));
    assert_eq!(seed.stars().primary(), GridPos::new(17, 14));
    assert_eq!(
        universe
            .body_at(GridPos::new(1, 4), GridPos::new(14, 93), GridPos::new(17, 14))
            .body,
        CelestialBody::Star
    );

    let seed = universe.system_seed(GridPos::new(97, 11), GridPos::new(18, 1));
    assert_eq!(seed.stars().primary(), GridPos::new(10, 5));
    assert_eq!(seed.stars().secondary_index(), Some(720_103_617));
}

/// Test: galaxy count is near 10000 / 50 = 200.
#[test]
fn test_galaxy_density() {
    let universe = UniverseGenerator::legacy();
    let galaxies: Vec<_> = universe.galaxies().map(|g| g.position).collect();
    assert_eq!(galaxies.len(), 196);
    assert!((150..=250).contains(&galaxies.len()));
    assert_eq!(
        &galaxies[..5],
        &[
            GridPos::new(52, 0),
            GridPos::new(18, 2),
            GridPos::new(1, 4),
            GridPos::new(3, 4),
            GridPos::new(4, 4)
        ]
    );
}

/// Test: per-galaxy system count is near 10000 / 200 = 50.
#[test]
fn test_system_density() {
    let universe = UniverseGenerator::legacy();
    let mut total = 0;
    for galaxy in universe.galaxies() {
        let count = universe.systems_in(galaxy.position).count();
        assert!((25..=80).contains(&count), "{} has {count} systems", galaxy.position);
        total += count;
    }
    assert_eq!(total, 9801);
}
