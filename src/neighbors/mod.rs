//! # Neighbor ranking around a reference star
//!
//! Given a catalog and the name of a reference star, [`rank_neighbors`] computes the
//! sky-plane Euclidean distance from the reference to every other star and returns the
//! closest ones as a [`NeighborTable`].
//!
//! Algorithm
//! -----------------
//! 1. Resolve the reference by exact name; absent → [`AtlasError::ReferenceNotFound`].
//! 2. For every other star, `d = sqrt((x - x_ref)² + (y - y_ref)²)` in arcseconds.
//!    The reference itself is never part of the result.
//! 3. Stable sort by `d` ascending: equal distances keep catalog insertion order.
//! 4. Keep the first `neighbor_cap` rows (100 by default) and round each distance to
//!    `distance_decimals` places (5 by default) for display.
//!
//! The output length is therefore `min(neighbor_cap, catalog.size() - 1)`.
//!
//! Complexity is `O(n log n)` per call with no precomputed index, which is comfortably fast
//! for catalogs of a few thousand stars.
//!
//! See also
//! ------------
//! * [`display`](crate::neighbors::display) – Tabular rendering of a [`NeighborTable`].
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    atlas_errors::AtlasError, atlas_params::AtlasParams, catalog::StarCatalog, constants::ArcSec,
};

pub mod display;

/// One row of a neighbor table.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub name: String,
    /// Distance to the reference, rounded for display.
    pub distance: ArcSec,
    /// Load-order index of the neighbor in its catalog.
    pub index: usize,
}

/// Distance-sorted neighbors of a reference star.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborTable {
    reference: String,
    decimals: u32,
    rows: Vec<Neighbor>,
}

impl NeighborTable {
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn rows(&self) -> &[Neighbor] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(name, distance)` pairs in ranking order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, ArcSec)> + '_ {
        self.rows.iter().map(|n| (n.name.as_str(), n.distance))
    }
}

/// Round `value` to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Rank the stars of `catalog` by distance to `reference_name`.
///
/// Arguments
/// -----------------
/// * `catalog` – The stars to rank.
/// * `reference_name` – Exact name of the reference star.
/// * `params` – Supplies `neighbor_cap` and `distance_decimals`.
///
/// Return
/// ----------
/// * The [`NeighborTable`], or [`AtlasError::ReferenceNotFound`]. Nothing is modified.
pub fn rank_neighbors(
    catalog: &StarCatalog,
    reference_name: &str,
    params: &AtlasParams,
) -> Result<NeighborTable, AtlasError> {
    let Some(ref_index) = catalog.find_index(reference_name) else {
        warn!("Reference star '{reference_name}' is not in the catalog");
        return Err(AtlasError::ReferenceNotFound(reference_name.to_string()));
    };
    let origin = catalog.stars()[ref_index].position();

    let rows: Vec<Neighbor> = catalog
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != ref_index)
        .map(|(i, star)| (i, (star.position() - origin).norm()))
        .sorted_by(|a, b| a.1.total_cmp(&b.1))
        .take(params.neighbor_cap)
        .map(|(i, d)| Neighbor {
            name: catalog.stars()[i].name.clone(),
            distance: round_to(d, params.distance_decimals),
            index: i,
        })
        .collect();

    debug!(
        "Ranked {} neighbors of '{reference_name}' among {} stars",
        rows.len(),
        catalog.size()
    );

    Ok(NeighborTable {
        reference: reference_name.to_string(),
        decimals: params.distance_decimals,
        rows,
    })
}
