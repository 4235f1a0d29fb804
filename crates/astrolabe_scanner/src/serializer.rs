//! # Catalog Serialization
//!
//! ## Text Format
//!
//! ```text
//! [GAL]
//! gx,gy
//! [SYS]
//! gx,gy,sx,sy,starType
//! [PLN]
//! gx,gy,sx,sy,px,py,starType,planetType,secondsForADay,daysForAMonth,daysForAYear,monthsForAYear,planetSize,mineralDensity
//! ```
//!
//! Sections always appear in this order, one record per line, decimal
//! integers with no padding. Records are written in catalog order; call
//! [`Catalog::sort_canonical`] first for canonical output.
//!
//! The same catalog can also be exported as JSON.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use astrolabe_core::GridPos;
use astrolabe_procedural::{Galaxy, Planet, PlanetType, StarSystem, StarType};

use crate::catalog::Catalog;
use crate::error::{ScanError, ScanResult};

/// Header of the galaxy section.
pub const GALAXY_SECTION: &str = "[GAL]";
/// Header of the star-system section.
pub const SYSTEM_SECTION: &str = "[SYS]";
/// Header of the planet section.
pub const PLANET_SECTION: &str = "[PLN]";

/// Display adapter rendering a planet as one `[PLN]` record.
#[derive(Clone, Copy, Debug)]
pub struct PlanetRecord<'a>(pub &'a Planet);

impl fmt::Display for PlanetRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{}",
            p.galaxy,
            p.system,
            p.cell,
            p.star_type.code(),
            p.planet_type.code(),
            p.seconds_for_a_day,
            p.days_for_a_month,
            p.days_for_a_year,
            p.months_for_a_year,
            p.planet_size,
            p.mineral_density
        )
    }
}

const SYSTEM_FIELDS: usize = 5;
const PLANET_FIELDS: usize = 14;

/// Writes a catalog in the text format.
///
/// # Errors
///
/// Returns any error of the underlying writer.
pub fn write_catalog<W: Write>(catalog: &Catalog, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{GALAXY_SECTION}")?;
    for galaxy in &catalog.galaxies {
        writeln!(out, "{}", galaxy.position)?;
    }

    writeln!(out, "{SYSTEM_SECTION}")?;
    for system in &catalog.systems {
        writeln!(
            out,
            "{},{},{}",
            system.galaxy,
            system.position,
            system.star_type.code()
        )?;
    }

    writeln!(out, "{PLANET_SECTION}")?;
    for planet in &catalog.planets {
        writeln!(out, "{}", PlanetRecord(planet))?;
    }
    out.flush()
}

/// Writes a catalog to a file, replacing it.
///
/// # Errors
///
/// Returns [`ScanError::Output`] if the file cannot be created or written.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> ScanResult<()> {
    let output = |source| ScanError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output)?;
    write_catalog(catalog, BufWriter::new(file)).map_err(output)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Galaxies,
    Systems,
    Planets,
}

/// Parses a catalog from the text format.
///
/// Blank lines are ignored.
///
/// # Errors
///
/// - [`ScanError::Parse`] with the 1-based line number for unknown section
///   headers, records before any header, wrong field counts, non-integer
///   fields and unknown type codes
/// - [`ScanError::Io`] if reading fails
pub fn read_catalog<R: BufRead>(input: R) -> ScanResult<Catalog> {
    let mut catalog = Catalog::new();
    let mut section = None;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if line.starts_with('[') {
            section = Some(match line {
                GALAXY_SECTION => Section::Galaxies,
                SYSTEM_SECTION => Section::Systems,
                PLANET_SECTION => Section::Planets,
                _ => return Err(parse_error(number, format!("unknown section {line}"))),
            });
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let mut fields = Fields {
            line: number,
            values: fields.iter(),
        };
        match section {
            None => return Err(parse_error(number, "record before any section header")),
            Some(Section::Galaxies) => {
                fields.expect_count(2)?;
                catalog.galaxies.push(Galaxy::new(fields.pos()?));
            }
            Some(Section::Systems) => {
                fields.expect_count(SYSTEM_FIELDS)?;
                catalog.systems.push(StarSystem {
                    galaxy: fields.pos()?,
                    position: fields.pos()?,
                    star_type: fields.star_type()?,
                });
            }
            Some(Section::Planets) => {
                fields.expect_count(PLANET_FIELDS)?;
                catalog.planets.push(Planet {
                    galaxy: fields.pos()?,
                    system: fields.pos()?,
                    cell: fields.pos()?,
                    star_type: fields.star_type()?,
                    planet_type: fields.planet_type()?,
                    seconds_for_a_day: fields.number()?,
                    days_for_a_month: fields.number()?,
                    days_for_a_year: fields.number()?,
                    months_for_a_year: fields.number()?,
                    planet_size: fields.number()?,
                    mineral_density: fields.number()?,
                });
            }
        }
    }
    Ok(catalog)
}

/// Reads a catalog file.
///
/// # Errors
///
/// Returns [`ScanError::Input`] if the file cannot be opened, otherwise
/// as [`read_catalog`].
pub fn load_catalog(path: &Path) -> ScanResult<Catalog> {
    let file = File::open(path).map_err(|source| ScanError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    read_catalog(BufReader::new(file))
}

/// Writes a catalog as a JSON object with `galaxies`, `systems` and
/// `planets` arrays.
///
/// # Errors
///
/// Returns [`ScanError::Json`] if serialization or writing fails.
pub fn export_json<W: Write>(catalog: &Catalog, mut out: W) -> ScanResult<()> {
    serde_json::to_writer_pretty(&mut out, catalog)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes a catalog as JSON to a file, replacing it.
///
/// # Errors
///
/// Returns [`ScanError::Output`] if the file cannot be created, otherwise
/// as [`export_json`].
pub fn save_json(catalog: &Catalog, path: &Path) -> ScanResult<()> {
    let file = File::create(path).map_err(|source| ScanError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    export_json(catalog, BufWriter::new(file))
}

fn parse_error(line: usize, message: impl Into<String>) -> ScanError {
    ScanError::Parse {
        line,
        message: message.into(),
    }
}

/// Cursor over the comma-separated fields of one record.
struct Fields<'a, 'b> {
    line: usize,
    values: std::slice::Iter<'b, &'a str>,
}

impl Fields<'_, '_> {
    fn expect_count(&self, expected: usize) -> ScanResult<()> {
        let found = self.values.len();
        if found == expected {
            Ok(())
        } else {
            Err(parse_error(
                self.line,
                format!("expected {expected} fields, found {found}"),
            ))
        }
    }

    fn number<T: FromStr>(&mut self) -> ScanResult<T> {
        let raw = self
            .values
            .next()
            .ok_or_else(|| parse_error(self.line, "missing field"))?;
        raw.parse()
            .map_err(|_| parse_error(self.line, format!("not an integer: {raw:?}")))
    }

    fn pos(&mut self) -> ScanResult<GridPos> {
        Ok(GridPos::new(self.number()?, self.number()?))
    }

    fn star_type(&mut self) -> ScanResult<StarType> {
        let code = self.number()?;
        StarType::from_code(code)
            .ok_or_else(|| parse_error(self.line, format!("unknown star type code {code}")))
    }

    fn planet_type(&mut self) -> ScanResult<PlanetType> {
        let code = self.number()?;
        PlanetType::from_code(code)
            .ok_or_else(|| parse_error(self.line, format!("unknown planet type code {code}")))
    }
}

#[cfg(test)]
mod tests {
    use astrolabe_procedural::PlanetAttributes;

    use super::*;

    fn sample() -> Catalog {
        let g = GridPos::new(1, 4);
        let s = GridPos::new(14, 93);
        Catalog {
            galaxies: vec![Galaxy::new(g)],
            systems: vec![StarSystem {
                galaxy: g,
                position: s,
                star_type: StarType::Blue,
            }],
            planets: vec![Planet::new(
                (g, s, GridPos::new(24, 31)),
                StarType::Blue,
                PlanetType::Continental,
                PlanetAttributes {
                    seconds_for_a_day: 160,
                    days_for_a_month: 5,
                    days_for_a_year: 60,
                    months_for_a_year: 12,
                    planet_size: 142,
                    mineral_density: 5,
                },
            )],
        }
    }

    fn render(catalog: &Catalog) -> String {
        let mut out = Vec::new();
        write_catalog(catalog, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_layout() {
        assert_eq!(
            render(&sample()),
            "[GAL]\n1,4\n[SYS]\n1,4,14,93,0\n[PLN]\n1,4,14,93,24,31,0,5,160,5,60,12,142,5\n"
        );
    }

    #[test]
    fn test_empty_catalog_has_all_headers() {
        assert_eq!(render(&Catalog::new()), "[GAL]\n[SYS]\n[PLN]\n");
    }

    #[test]
    fn test_read_back() {
        let text = render(&sample());
        assert_eq!(read_catalog(text.as_bytes()).unwrap(), sample());
    }

    #[test]
    fn test_negative_coordinates_survive() {
        let mut catalog = Catalog::new();
        catalog.galaxies.push(Galaxy::new(GridPos::new(-3, 7)));
        let text = render(&catalog);
        assert!(text.contains("\n-3,7\n"));
        assert_eq!(read_catalog(text.as_bytes()).unwrap(), catalog);
    }

    #[test]
    fn test_read_rejects_bad_input() {
        let cases = [
            ("1,4\n", 1),
            ("[GAL]\n[MOON]\n", 2),
            ("[GAL]\n1,4,5\n", 2),
            ("[SYS]\n1,4,14,93,9\n", 2),
            ("[GAL]\n1,x\n", 2),
            ("[PLN]\n1,4,14,93,24,31,0,8,160,5,60,12,142,5\n", 2),
            ("[GAL]\n\n[SYS]\n1,2\n", 4),
        ];
        for (text, expected_line) in cases {
            match read_catalog(text.as_bytes()) {
                Err(ScanError::Parse { line, .. }) => assert_eq!(line, expected_line, "{text:?}"),
                other => panic!("{text:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn test_json_export_shape() {
        let mut out = Vec::new();
        export_json(&sample(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["galaxies"].as_array().unwrap().len(), 1);
        assert_eq!(value["systems"][0]["star_type"], "Blue");
        assert_eq!(value["planets"][0]["planet_size"], 142);
        assert_eq!(value["planets"][0]["cell"]["x"], 24);
    }
}
