//! # Star catalog: immutable, name-indexed star table
//!
//! The [`StarCatalog`] is the in-memory image of one astrometric data source: an ordered
//! sequence of [`Star`] rows plus a name → index map kept alongside it.
//!
//! Data Model
//! -----------------
//! * **Order:** insertion order = load order. Index `i` always designates the `i`-th row
//!   handed to [`StarCatalog::build`], which keeps display and index-based lookups stable.
//! * **Key:** `Star::name`, unique within a catalog, exact and case-sensitive.
//! * **Index:** `HashMap<String, usize, ahash::RandomState>` for O(1) amortized lookups.
//!
//! Lifecycle
//! -----------------
//! A catalog is built wholesale from one source and never mutated afterwards. Reloading a
//! source produces a **new** catalog; callers swap it in atomically (see
//! [`AtlasState::load`](crate::atlas::AtlasState::load)). Since there is no interior
//! mutability, a catalog can be shared across threads behind an `Arc` without locking.
//!
//! Ingestion
//! -----------------
//! * In-memory rows — [`StarCatalog::build`].
//! * CSV star tables — [`star_table_reader`](crate::catalog::star_table_reader).
//!
//! See also
//! ------------
//! * [`crate::neighbors::rank_neighbors`] – Distance ranking around a reference star.
//! * [`crate::search::resolve`] – Exact-name search and recentering.
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ahash::RandomState;
use nalgebra::Vector2;

use crate::{
    atlas_errors::AtlasError,
    constants::{ArcSec, Magnitude},
};

pub mod star_table_reader;

/// A single catalog entry.
///
/// Units
/// -----------------
/// * `x`, `y`, `x_err`, `y_err`: arcseconds, sky-plane offsets from the field reference point.
/// * `vx`, `vy`, `vx_err`, `vy_err`: proper motion as delivered by the loader.
/// * `magnitude`: lower value = brighter.
/// * `epoch_count`: number of detections contributing to the velocity fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: String,
    pub x: ArcSec,
    pub y: ArcSec,
    pub x_err: ArcSec,
    pub y_err: ArcSec,
    pub vx: f64,
    pub vy: f64,
    pub vx_err: f64,
    pub vy_err: f64,
    pub magnitude: Magnitude,
    pub epoch_count: u32,
}

impl Star {
    /// Sky-plane position as a vector, in arcseconds.
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Ordered, immutable star table with O(1) lookup by name.
#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    stars: Vec<Star>,
    index: HashMap<String, usize, RandomState>,
}

impl StarCatalog {
    /// Build a catalog from a sequence of rows, preserving their order.
    ///
    /// Arguments
    /// -----------------
    /// * `rows` – The stars in load order.
    ///
    /// Return
    /// ----------
    /// * The new catalog, or [`AtlasError::DuplicateName`] carrying the first repeated name.
    ///   On error no catalog is produced.
    pub fn build<I>(rows: I) -> Result<Self, AtlasError>
    where
        I: IntoIterator<Item = Star>,
    {
        let rows = rows.into_iter();
        let (lower, _) = rows.size_hint();
        let mut stars = Vec::with_capacity(lower);
        let mut index: HashMap<String, usize, RandomState> =
            HashMap::with_capacity_and_hasher(lower, RandomState::new());

        for star in rows {
            match index.entry(star.name.clone()) {
                Entry::Occupied(entry) => {
                    return Err(AtlasError::DuplicateName(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(stars.len());
                }
            }
            stars.push(star);
        }

        Ok(Self { stars, index })
    }

    /// Exact, case-sensitive lookup of a star index by name.
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Lookup of a star by name.
    pub fn get(&self, name: &str) -> Option<&Star> {
        self.find_index(name).map(|i| &self.stars[i])
    }

    /// Star at a given load-order index.
    pub fn star(&self, index: usize) -> Option<&Star> {
        self.stars.get(index)
    }

    pub fn size(&self) -> usize {
        self.stars.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Star> {
        self.stars.iter()
    }

    /// Star names in load order, e.g. to populate a reference-star selector.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.stars.iter().map(|s| s.name.as_str())
    }
}

impl<'a> IntoIterator for &'a StarCatalog {
    type Item = &'a Star;
    type IntoIter = std::slice::Iter<'a, Star>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}
