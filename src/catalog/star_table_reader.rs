//! # CSV star-table reader
//!
//! Builds a [`StarCatalog`] from a comma-separated star table, one row per star. This is a
//! convenience for callers that export their astrometric alignment to CSV; any other loader
//! can target [`StarCatalog::build`] directly.
//!
//! ## Expected columns
//! -----------------
//! The header must carry the loader's column names (order is free, extra columns are ignored):
//!
//! | column    | field              |
//! |-----------|--------------------|
//! | `name`    | `Star::name`       |
//! | `x`, `y`  | position [arcsec]  |
//! | `xe`, `ye`| position error     |
//! | `vx`, `vy`| proper motion      |
//! | `vxe`, `vye` | velocity error  |
//! | `mag`     | magnitude          |
//! | `nEpochs` | epoch count        |
//!
//! ## Error Handling
//! -----------------
//! * Missing columns or non-numeric values → [`AtlasError::StarTableError`].
//! * Two rows with the same `name` → [`AtlasError::DuplicateName`].
//!
//! In both cases no catalog is returned, so a failed reload never replaces a good catalog.
use std::io::Read;

use camino::Utf8Path;
use log::info;
use serde::Deserialize;

use crate::{
    atlas_errors::AtlasError,
    catalog::{Star, StarCatalog},
};

#[derive(Debug, Deserialize)]
struct StarTableRow {
    name: String,
    x: f64,
    y: f64,
    #[serde(rename = "xe")]
    x_err: f64,
    #[serde(rename = "ye")]
    y_err: f64,
    vx: f64,
    vy: f64,
    #[serde(rename = "vxe")]
    vx_err: f64,
    #[serde(rename = "vye")]
    vy_err: f64,
    #[serde(rename = "mag")]
    magnitude: f64,
    #[serde(rename = "nEpochs")]
    epoch_count: u32,
}

impl From<StarTableRow> for Star {
    fn from(row: StarTableRow) -> Self {
        Star {
            name: row.name,
            x: row.x,
            y: row.y,
            x_err: row.x_err,
            y_err: row.y_err,
            vx: row.vx,
            vy: row.vy,
            vx_err: row.vx_err,
            vy_err: row.vy_err,
            magnitude: row.magnitude,
            epoch_count: row.epoch_count,
        }
    }
}

/// Read a CSV star table from any reader.
///
/// Arguments
/// -----------------
/// * `reader` – Source of the CSV text (file, buffer, ...). Surrounding whitespace of fields is trimmed.
///
/// Return
/// ----------
/// * The catalog in row order, or the first parsing / uniqueness error.
pub fn read_star_table<R: Read>(reader: R) -> Result<StarCatalog, AtlasError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let rows = csv_reader
        .deserialize::<StarTableRow>()
        .map(|row| row.map(Star::from))
        .collect::<Result<Vec<_>, _>>()?;

    StarCatalog::build(rows)
}

/// Read a CSV star table from a file path.
///
/// See also
/// ------------
/// * [`read_star_table`] – Reader-based variant used by this function.
pub fn read_star_table_file(path: &Utf8Path) -> Result<StarCatalog, AtlasError> {
    let file = std::fs::File::open(path)?;
    let catalog = read_star_table(std::io::BufReader::new(file))?;
    info!("Loaded {} stars from {path}", catalog.size());
    Ok(catalog)
}
