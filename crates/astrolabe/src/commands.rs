//! Subcommand handlers.
//!
//! Every handler writes its data to the given writer; diagnostics go
//! through `tracing`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use astrolabe_procedural::samples::{verify_reference_planets, REFERENCE_PLANETS};
use astrolabe_procedural::{sort_planets, Planet, UniverseGenerator};
use astrolabe_scanner::{
    load_catalog, save_json, write_catalog, PlanetRecord, ScanError, ScanResult, Settings,
    UniverseScanner, WriterProgress,
};

use crate::cli::{Command, GenerateArgs, InspectArgs, QueryArgs};

/// Runs one subcommand against stdout.
pub fn run(command: &Command) -> ScanResult<ExitCode> {
    let stdout = std::io::stdout();
    match command {
        Command::Generate(args) => generate(args, stdout).map(|()| ExitCode::SUCCESS),
        Command::Inspect(args) => inspect(args, stdout.lock()).map(|()| ExitCode::SUCCESS),
        Command::Query(args) => query(args, stdout.lock()).map(|()| ExitCode::SUCCESS),
        Command::Verify => verify(stdout.lock()),
    }
}

fn load_settings(path: Option<&Path>) -> ScanResult<Settings> {
    path.map_or_else(|| Ok(Settings::default()), Settings::load)
}

fn output_error(path: &Path, source: std::io::Error) -> ScanError {
    ScanError::Output {
        path: path.to_path_buf(),
        source,
    }
}

/// Scans the universe, writes the catalog and prints the progress protocol.
pub fn generate<W: Write + Send>(args: &GenerateArgs, out: W) -> ScanResult<()> {
    let mut settings = load_settings(args.config.as_deref())?;
    settings.scan.workers = args.workers.get();
    let scanner = UniverseScanner::new(settings.universe, settings.scan)?;

    // The target is opened before scanning so a bad path fails fast.
    let file = File::create(&args.output).map_err(|e| output_error(&args.output, e))?;

    let progress = WriterProgress::new(out, settings.scan.progress_interval);
    let outcome = scanner.scan(&progress);

    write_catalog(&outcome.catalog, BufWriter::new(file))
        .map_err(|e| output_error(&args.output, e))?;
    if let Some(json) = &args.json {
        save_json(&outcome.catalog, json)?;
    }
    tracing::info!(
        output = %args.output.display(),
        totals = %outcome.summary.totals,
        "catalog written"
    );

    progress.with_writer(|out| {
        writeln!(out, "{}", outcome.summary)?;
        out.flush()
    })?;
    Ok(())
}

/// Derives one planet and prints its attributes.
pub fn inspect<W: Write>(args: &InspectArgs, mut out: W) -> ScanResult<()> {
    let settings = load_settings(args.config.as_deref())?;
    let universe = UniverseGenerator::new(settings.universe)?;
    let planet = universe.planet_by_key(&args.key)?;

    writeln!(out, "key               {}", planet.key())?;
    writeln!(
        out,
        "star type         {} ({})",
        planet.star_type,
        planet.star_type.code()
    )?;
    writeln!(
        out,
        "planet type       {} ({})",
        planet.planet_type,
        planet.planet_type.code()
    )?;
    writeln!(out, "seconds per day   {}", planet.seconds_for_a_day)?;
    writeln!(out, "days per month    {}", planet.days_for_a_month)?;
    writeln!(out, "days per year     {}", planet.days_for_a_year)?;
    writeln!(out, "months per year   {}", planet.months_for_a_year)?;
    writeln!(out, "planet size       {}", planet.planet_size)?;
    writeln!(out, "mineral density   {}", planet.mineral_density)?;
    writeln!(out, "record            {}", PlanetRecord(&planet))?;
    out.flush()?;
    Ok(())
}

/// Prints the matching planets of a catalog file as `[PLN]` records.
pub fn query<W: Write>(args: &QueryArgs, mut out: W) -> ScanResult<()> {
    let catalog = load_catalog(&args.catalog)?;
    let filter = args.filter();
    let mut planets: Vec<Planet> = catalog
        .planets
        .into_iter()
        .filter(|planet| filter.matches(planet))
        .collect();
    sort_planets(&mut planets, args.sort_by, args.desc);

    let limit = args.limit.unwrap_or(usize::MAX);
    for planet in planets.iter().take(limit) {
        writeln!(out, "{}", PlanetRecord(planet))?;
    }
    tracing::debug!(matched = planets.len(), limit, "query finished");
    out.flush()?;
    Ok(())
}

/// Recomputes the reference planets, one status line each.
///
/// Fails with exit code 1 when any of them disagrees.
pub fn verify<W: Write>(mut out: W) -> ScanResult<ExitCode> {
    let mismatches = verify_reference_planets();
    for reference in &REFERENCE_PLANETS {
        match mismatches.iter().find(|m| m.expected == *reference) {
            Some(mismatch) => writeln!(
                out,
                "MISMATCH\t{}\texpected {}\tfound {}",
                reference.key(),
                reference.planet_type,
                mismatch.found
            )?,
            None => writeln!(out, "OK\t{}\t{}", reference.key(), reference.planet_type)?,
        }
    }
    out.flush()?;

    if mismatches.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(count = mismatches.len(), "reference planets disagree");
        Ok(ExitCode::FAILURE)
    }
}
