//! # Star search and recentering
//!
//! [`resolve`] looks a query name up in the catalog with the same exact, case-sensitive
//! contract as [`StarCatalog::find_index`]: no fuzzy or prefix matching.
//!
//! * **Match** → [`SearchOutcome::Found`] with the star position and index, plus a view
//!   recentered on the star. The zoom level (`half_range`) is preserved.
//! * **No match** → [`SearchOutcome::NotFound`] and the input view, unchanged. A star whose
//!   position is not finite cannot be centered on and is reported the same way.
//!
//! Not-found is an expected outcome, not an error: callers surface its [`Display`](std::fmt::Display)
//! text as a status message and carry on.
use std::fmt;

use log::{debug, warn};

use crate::{catalog::StarCatalog, constants::ArcSec, view_state::ViewState};

/// Result of a star search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found {
        name: String,
        x: ArcSec,
        y: ArcSec,
        index: usize,
    },
    NotFound {
        query: String,
    },
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    /// Index of the matched star, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found { index, .. } => Some(*index),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found { name, .. } => write!(f, "Found star '{name}'"),
            SearchOutcome::NotFound { query } => write!(f, "Star '{query}' not found"),
        }
    }
}

/// Search `query_name` in `catalog` and recenter `view` on a match.
///
/// Arguments
/// -----------------
/// * `catalog` – The stars to search.
/// * `query_name` – Exact star name.
/// * `view` – The current view; only its `half_range` is reused on a match.
///
/// Return
/// ----------
/// * `(outcome, view)` where `view` is recentered on a match and identical to the input otherwise.
pub fn resolve(
    catalog: &StarCatalog,
    query_name: &str,
    view: &ViewState,
) -> (SearchOutcome, ViewState) {
    let found = catalog.find_index(query_name).and_then(|index| {
        let star = &catalog.stars()[index];
        match view.recentered(star.x, star.y) {
            Ok(recentered) => Some((index, star, recentered)),
            Err(err) => {
                warn!("Star '{query_name}' cannot be centered on: {err}");
                None
            }
        }
    });

    match found {
        Some((index, star, recentered)) => {
            debug!("Search '{query_name}' matched index {index}");
            (
                SearchOutcome::Found {
                    name: star.name.clone(),
                    x: star.x,
                    y: star.y,
                    index,
                },
                recentered,
            )
        }
        None => {
            debug!("Search '{query_name}' matched nothing");
            (
                SearchOutcome::NotFound {
                    query: query_name.to_string(),
                },
                *view,
            )
        }
    }
}
