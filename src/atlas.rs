//! # Atlas session state
//!
//! This module defines [`AtlasState`], the value a UI layer keeps between events. It bundles
//! the explicit state triple
//!
//! 1. **Catalog** ([`StarCatalog`]) behind an `Arc`, shared by every state derived from it,
//! 2. **Orbit tracks** ([`OrbitTrackSet`]) behind an `Arc`,
//! 3. **View** ([`ViewState`]), a small `Copy` value,
//!
//! plus the display toggles (star names, orbits), the highlighted star and the
//! [`AtlasParams`] in force.
//!
//! ## Event model
//!
//! Every operation takes `&self` and returns a **new** state (or a query result); nothing is
//! mutated in place. A failed operation returns an error and the caller simply keeps its
//! previous state, so there is never a partial replacement. Reloads swap the whole triple at
//! once; states handed out earlier remain valid and consistent until dropped.
//!
//! | UI event              | operation                                   |
//! |-----------------------|---------------------------------------------|
//! | load data             | [`AtlasState::load`] / [`AtlasState::load_files`] |
//! | search                | [`AtlasState::search`]                      |
//! | select reference star | [`AtlasState::select_reference`]            |
//! | recenter / rezoom     | [`AtlasState::recenter`] / [`AtlasState::rezoom`] |
//! | name / orbit switches | [`AtlasState::with_labels`] / [`AtlasState::with_orbits`] |
//! | refresh map           | [`AtlasState::frame`]                       |
//!
//! ## Typical usage
//!
//! ```rust
//! use gcg_atlas::{AtlasParams, AtlasState, Star, StarCatalog};
//!
//! let star = |name: &str, x: f64, y: f64, magnitude: f64| Star {
//!     name: name.into(), x, y, x_err: 0.0, y_err: 0.0, vx: 0.0, vy: 0.0,
//!     vx_err: 0.0, vy_err: 0.0, magnitude, epoch_count: 1,
//! };
//! let catalog = StarCatalog::build(vec![star("SgrA", 0.0, 0.0, 14.0), star("S1", 0.3, 0.4, 16.0)])
//!     .unwrap();
//!
//! let state = AtlasState::new(AtlasParams::default()).load(catalog, None);
//! let (outcome, state) = state.search("S1");
//! assert!(outcome.found());
//! assert_eq!(state.view().center(), (0.3, 0.4));
//!
//! let neighbors = state.select_reference("SgrA").unwrap();
//! assert_eq!(neighbors.rows()[0].distance, 0.5);
//! ```
use std::sync::Arc;

use camino::Utf8Path;
use log::info;

use crate::{
    atlas_errors::AtlasError,
    atlas_params::AtlasParams,
    catalog::{star_table_reader::read_star_table_file, StarCatalog},
    constants::ArcSec,
    neighbors::{rank_neighbors, NeighborTable},
    orbits::{
        orbit_table_reader::read_orbit_table_file, propagation::OrbitPropagator, OrbitTrackSet,
    },
    overlay::{build_overlays_for_catalog, OrbitOverlay},
    render::{derive_render_parameters, MarkerStyle},
    search::{resolve, SearchOutcome},
    view_state::{AxisRanges, ViewState},
};

/// Everything the renderer needs to draw the map once.
#[derive(Debug, Clone, PartialEq)]
pub struct StarFieldFrame {
    /// One entry per catalog star, in catalog order.
    pub markers: Vec<MarkerStyle>,
    /// Orbit polylines in track order; empty when orbits are switched off.
    pub overlays: Vec<OrbitOverlay>,
    pub axes: AxisRanges,
}

#[derive(Debug, Clone)]
pub struct AtlasState {
    params: Arc<AtlasParams>,
    catalog: Arc<StarCatalog>,
    orbits: Arc<OrbitTrackSet>,
    view: ViewState,
    show_labels: bool,
    show_orbits: bool,
    highlight: Option<String>,
}

impl Default for AtlasState {
    fn default() -> Self {
        Self::new(AtlasParams::default())
    }
}

impl AtlasState {
    /// Empty state: no stars, no orbits, default view, names and orbits switched on.
    pub fn new(params: AtlasParams) -> Self {
        AtlasState {
            view: params.default_view,
            params: Arc::new(params),
            catalog: Arc::new(StarCatalog::default()),
            orbits: Arc::new(OrbitTrackSet::empty()),
            show_labels: true,
            show_orbits: true,
            highlight: None,
        }
    }

    pub fn params(&self) -> &AtlasParams {
        &self.params
    }

    pub fn catalog(&self) -> &Arc<StarCatalog> {
        &self.catalog
    }

    pub fn orbits(&self) -> &Arc<OrbitTrackSet> {
        &self.orbits
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    /// Replace catalog and orbits wholesale. The view and toggles are kept, the highlight is
    /// dropped since it referred to the previous catalog.
    pub fn load(&self, catalog: StarCatalog, orbits: Option<OrbitTrackSet>) -> AtlasState {
        info!(
            "Loading {} stars and {} orbit tracks",
            catalog.size(),
            orbits.as_ref().map_or(0, OrbitTrackSet::len)
        );
        AtlasState {
            catalog: Arc::new(catalog),
            orbits: Arc::new(orbits.unwrap_or_default()),
            highlight: None,
            ..self.clone()
        }
    }

    /// Read a CSV star table and, optionally, an orbit-element table propagated with
    /// `propagator` on the configured sampling grid, then [`load`](Self::load) them.
    ///
    /// Arguments
    /// -----------------
    /// * `star_table` – Path of the CSV star table.
    /// * `orbit_table` – Optional path of the orbit-element table.
    /// * `propagator` – External Kepler solver used for the orbit table.
    ///
    /// Return
    /// ----------
    /// * The new state, or the first I/O, parsing, uniqueness or propagation error. On error
    ///   `self` is untouched.
    pub fn load_files<P: OrbitPropagator + ?Sized>(
        &self,
        star_table: &Utf8Path,
        orbit_table: Option<&Utf8Path>,
        propagator: &P,
    ) -> Result<AtlasState, AtlasError> {
        let catalog = read_star_table_file(star_table)?;
        let orbits = orbit_table
            .map(|path| -> Result<OrbitTrackSet, AtlasError> {
                let elements = read_orbit_table_file(path)?;
                OrbitTrackSet::propagate_all(
                    &elements,
                    propagator,
                    &self.params.sampling,
                    &self.params.propagation,
                )
            })
            .transpose()?;
        Ok(self.load(catalog, orbits))
    }

    /// Exact-name search. A match recenters the view (zoom kept) and highlights the star;
    /// otherwise the returned state equals `self`.
    pub fn search(&self, query_name: &str) -> (SearchOutcome, AtlasState) {
        let (outcome, view) = resolve(&self.catalog, query_name, &self.view);
        let state = match &outcome {
            SearchOutcome::Found { name, .. } => AtlasState {
                view,
                highlight: Some(name.clone()),
                ..self.clone()
            },
            SearchOutcome::NotFound { .. } => self.clone(),
        };
        (outcome, state)
    }

    /// Neighbor table around `reference_name`.
    pub fn select_reference(&self, reference_name: &str) -> Result<NeighborTable, AtlasError> {
        rank_neighbors(&self.catalog, reference_name, &self.params)
    }

    /// Names available to the reference-star selector, in catalog order.
    pub fn reference_options(&self) -> Vec<&str> {
        self.catalog.names().collect()
    }

    pub fn recenter(&self, center_x: ArcSec, center_y: ArcSec) -> Result<AtlasState, AtlasError> {
        Ok(AtlasState {
            view: self.view.recentered(center_x, center_y)?,
            ..self.clone()
        })
    }

    pub fn rezoom(&self, half_range: ArcSec) -> Result<AtlasState, AtlasError> {
        Ok(AtlasState {
            view: self.view.rezoomed(half_range)?,
            ..self.clone()
        })
    }

    pub fn with_view(&self, view: ViewState) -> AtlasState {
        AtlasState {
            view,
            ..self.clone()
        }
    }

    pub fn with_labels(&self, show_labels: bool) -> AtlasState {
        AtlasState {
            show_labels,
            ..self.clone()
        }
    }

    pub fn with_orbits(&self, show_orbits: bool) -> AtlasState {
        AtlasState {
            show_orbits,
            ..self.clone()
        }
    }

    pub fn without_highlight(&self) -> AtlasState {
        AtlasState {
            highlight: None,
            ..self.clone()
        }
    }

    /// Derive everything the renderer draws for the current state.
    pub fn frame(&self) -> StarFieldFrame {
        let markers = derive_render_parameters(
            &self.catalog,
            self.highlight.as_deref(),
            self.show_labels,
            &self.params,
        );
        let overlays = if self.show_orbits {
            build_overlays_for_catalog(Some(&self.orbits), &self.catalog)
        } else {
            Vec::new()
        };
        StarFieldFrame {
            markers,
            overlays,
            axes: self.view.axis_ranges(),
        }
    }
}

#[cfg(test)]
mod atlas_test {
    use super::*;
    use crate::{catalog::catalog_test::star, orbits::OrbitTrack};

    fn loaded() -> AtlasState {
        let catalog = StarCatalog::build(vec![
            star("SgrA", 0.0, 0.0, 14.0),
            star("S1", 0.3, 0.4, 16.0),
            star("S2", -0.2, 0.1, 15.0),
        ])
        .unwrap();
        let orbits = OrbitTrackSet::new(vec![OrbitTrack::new("S2", vec![(-0.2, 0.1), (0.0, 0.0)])]);
        AtlasState::default().load(catalog, Some(orbits))
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = AtlasState::default();
        assert!(state.catalog().is_empty());
        assert!(state.orbits().is_empty());
        assert_eq!(state.view(), ViewState::default());
        assert!(state.show_labels() && state.show_orbits());
        let frame = state.frame();
        assert!(frame.markers.is_empty() && frame.overlays.is_empty());
    }

    #[test]
    fn test_search_found_and_not_found() {
        let state = loaded();
        let (outcome, found_state) = state.search("S1");
        assert!(outcome.found());
        assert_eq!(found_state.view().center(), (0.3, 0.4));
        assert_eq!(found_state.view().half_range(), state.view().half_range());
        assert_eq!(found_state.highlight(), Some("S1"));
        // the input state is untouched
        assert_eq!(state.view().center(), (0.0, 0.0));
        assert_eq!(state.highlight(), None);

        let (outcome, same) = found_state.search("nope");
        assert!(!outcome.found());
        assert_eq!(same.view(), found_state.view());
        assert_eq!(same.highlight(), Some("S1"));
    }

    #[test]
    fn test_frame_reflects_toggles_and_highlight() {
        let (_, state) = loaded().search("S2");
        let frame = state.frame();
        assert_eq!(frame.markers.len(), 3);
        assert_eq!(frame.markers[2].border_width, 2);
        assert_eq!(frame.overlays.len(), 1);
        assert_eq!(frame.overlays[0].catalog_index, Some(2));
        assert_eq!(frame.axes.x, [-0.2 + 0.4, -0.2 - 0.4]);

        let frame = state.with_orbits(false).with_labels(false).frame();
        assert!(frame.overlays.is_empty());
        assert!(frame.markers.iter().all(|m| m.label_text.is_none()));

        let frame = state.without_highlight().frame();
        assert!(frame.markers.iter().all(|m| m.border_width == 0));
    }

    #[test]
    fn test_reload_drops_highlight_and_shares_nothing() {
        let (_, before) = loaded().search("S1");
        let catalog = StarCatalog::build(vec![star("S9", 1.0, 1.0, 17.0)]).unwrap();
        let after = before.load(catalog, None);

        assert_eq!(after.highlight(), None);
        assert_eq!(after.view(), before.view());
        assert_eq!(after.reference_options(), vec!["S9"]);
        assert!(after.orbits().is_empty());
        assert_eq!(before.reference_options(), vec!["SgrA", "S1", "S2"]);
    }

    #[test]
    fn test_select_reference() {
        let state = loaded();
        let table = state.select_reference("SgrA").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].name, "S2");
        assert_eq!(
            state.select_reference("S42").unwrap_err(),
            AtlasError::ReferenceNotFound("S42".into())
        );
    }

    #[test]
    fn test_recenter_and_rezoom() {
        let state = loaded();
        let moved = state.recenter(1.0, -1.0).unwrap().rezoom(2.0).unwrap();
        assert_eq!(moved.view(), ViewState::new(1.0, -1.0, 2.0).unwrap());
        assert!(state.rezoom(0.0).is_err());
        assert!(Arc::ptr_eq(moved.catalog(), state.catalog()));
    }
}
