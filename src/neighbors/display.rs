//! # Tabular display for neighbor tables
//!
//! Renders a [`NeighborTable`] as a two-column table (`Star`, `Distance (arcseconds)`) with
//! [`comfy-table`], distances printed with the same number of decimals they were rounded to.
//!
//! ```rust,ignore
//! let table = rank_neighbors(&catalog, "S0-2", &params)?;
//! println!("{table}");
//! ```
//!
//! [`comfy-table`]: https://crates.io/crates/comfy-table
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::neighbors::NeighborTable;

pub const STAR_HEADER: &str = "Star";
pub const DISTANCE_HEADER: &str = "Distance (arcseconds)";

impl NeighborTable {
    fn render_comfy(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![Cell::new(STAR_HEADER), Cell::new(DISTANCE_HEADER)]);

        let dp = self.decimals as usize;
        for row in &self.rows {
            table.add_row(Row::from(vec![
                Cell::new(&row.name).set_alignment(CellAlignment::Center),
                Cell::new(format!("{:.*}", dp, row.distance)).set_alignment(CellAlignment::Center),
            ]));
        }

        table.to_string()
    }
}

impl fmt::Display for NeighborTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Neighbors of {}", self.reference)?;
        write!(f, "{}", self.render_comfy())
    }
}
