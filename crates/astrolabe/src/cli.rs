//! Argument definitions.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use astrolabe_core::MapKey;
use astrolabe_procedural::{PlanetFilter, PlanetSortKey, PlanetType, StarType};
use clap::{Args, Parser, Subcommand};

/// Deterministic universe generator for the legacy Weathering galaxy map.
#[derive(Debug, Parser)]
#[command(name = "astrolabe", version, about)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Precompute every galaxy, star system and planet into a catalog file.
    Generate(GenerateArgs),
    /// Derive one planet from its map key.
    Inspect(InspectArgs),
    /// Print the planets of a catalog that match the given filters.
    Query(QueryArgs),
    /// Recompute the reference planets of the legacy game.
    Verify,
}

/// Arguments of `generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Catalog file to write.
    pub output: PathBuf,

    /// Worker threads, at least 1. Overrides the settings file.
    pub workers: NonZeroUsize,

    /// TOML settings file (universe shape, progress interval).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also export the catalog as JSON.
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// Arguments of `inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Planet map key, e.g. `Weathering.MapOfPlanet#=1,4=14,93=24,31`.
    pub key: MapKey,

    /// TOML settings file (universe shape).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments of `query`.
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Catalog file to read.
    pub catalog: PathBuf,

    /// Only planets of this type (name or code).
    #[arg(long)]
    pub planet_type: Option<PlanetType>,

    /// Only planets orbiting this star type (name or code).
    #[arg(long)]
    pub star_type: Option<StarType>,

    /// Smallest planet size.
    #[arg(long)]
    pub min_size: Option<u32>,

    /// Largest planet size.
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Smallest mineral density.
    #[arg(long)]
    pub min_mineral: Option<u32>,

    /// Largest mineral density.
    #[arg(long)]
    pub max_mineral: Option<u32>,

    /// Sort key: coordinates, size, mineral, day, month or year.
    #[arg(long, default_value = "coordinates")]
    pub sort_by: PlanetSortKey,

    /// Sort in descending order.
    #[arg(long)]
    pub desc: bool,

    /// Print at most this many planets.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl QueryArgs {
    /// The filter described by the flags.
    pub fn filter(&self) -> PlanetFilter {
        PlanetFilter {
            planet_type: self.planet_type,
            star_type: self.star_type,
            min_size: self.min_size,
            max_size: self.max_size,
            min_mineral_density: self.min_mineral,
            max_mineral_density: self.max_mineral,
        }
    }
}
