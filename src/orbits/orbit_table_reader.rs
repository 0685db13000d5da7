//! # Orbit-element table reader
//!
//! Parses the whitespace-separated orbit table used alongside the star catalog. Each data line
//! describes the Keplerian orbit of one star around the central mass.
//!
//! ## Field Layout
//! -----------------
//! * column `0` – star name
//! * column `1` – period
//! * column `2` – *ignored*
//! * column `3` – epoch of periapse passage `t0`
//! * column `4` – eccentricity
//! * column `5` – inclination
//! * column `6` – longitude of the ascending node
//! * column `7` – argument of periapse
//!
//! Extra trailing columns are ignored. Blank lines and lines starting with `#` are skipped.
//! Units are whatever the propagator expects; they are carried through untouched.
//!
//! ## Error Handling
//! -----------------
//! Any malformed data line aborts the read with [`AtlasError::OrbitTableParse`], carrying the
//! 1-based line number.
use std::io::{BufRead, BufReader, Read};

use camino::Utf8Path;
use log::info;

use crate::{atlas_errors::AtlasError, constants::Year};

/// Keplerian elements of one star, as read from the orbit table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitElements {
    pub star_name: String,
    pub period: Year,
    pub t0: Year,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ascending_node: f64,
    pub periapse_argument: f64,
}

const MIN_COLUMNS: usize = 8;

fn parse_field(fields: &[&str], col: usize, label: &str, line: usize) -> Result<f64, AtlasError> {
    fields[col]
        .parse::<f64>()
        .map_err(|_| AtlasError::OrbitTableParse {
            line,
            reason: format!("invalid {label}: {}", fields[col]),
        })
}

/// Parse a single data line (crate-private helper).
fn parse_orbit_line(raw: &str, line: usize) -> Result<OrbitElements, AtlasError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() < MIN_COLUMNS {
        return Err(AtlasError::OrbitTableParse {
            line,
            reason: format!("expected {MIN_COLUMNS} columns, found {}", fields.len()),
        });
    }

    Ok(OrbitElements {
        star_name: fields[0].to_string(),
        period: parse_field(&fields, 1, "period", line)?,
        t0: parse_field(&fields, 3, "t0", line)?,
        eccentricity: parse_field(&fields, 4, "eccentricity", line)?,
        inclination: parse_field(&fields, 5, "inclination", line)?,
        ascending_node: parse_field(&fields, 6, "ascending node", line)?,
        periapse_argument: parse_field(&fields, 7, "periapse argument", line)?,
    })
}

/// Read every orbit row from a reader, in table order.
pub fn read_orbit_table<R: Read>(reader: R) -> Result<Vec<OrbitElements>, AtlasError> {
    let mut elements = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        elements.push(parse_orbit_line(trimmed, i + 1)?);
    }
    Ok(elements)
}

pub fn read_orbit_table_file(path: &Utf8Path) -> Result<Vec<OrbitElements>, AtlasError> {
    let file = std::fs::File::open(path)?;
    let elements = read_orbit_table(file)?;
    info!("Loaded {} orbit element rows from {path}", elements.len());
    Ok(elements)
}
