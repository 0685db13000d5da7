//! # gcg_atlas
//!
//! Star field data model and spatial queries behind an interactive 2-D map of the stars
//! around the galactic center.
//!
//! The crate holds the in-memory [`StarCatalog`] and [`OrbitTrackSet`], the displayed
//! [`ViewState`], and the pure operations a UI calls on each event:
//!
//! * [`render::derive_render_parameters`] – per-star marker size, color, border and label,
//! * [`neighbors::rank_neighbors`] – distance-sorted neighbors of a reference star,
//! * [`search::resolve`] – exact-name search with recentering,
//! * [`overlay::build_overlays`] – labelled orbit polylines.
//!
//! [`AtlasState`] ties them together as an explicit, immutable session value.
//! Drawing, file formats of the upstream astrometric pipeline and orbit numerics are left
//! to collaborators; see [`orbits::propagation::OrbitPropagator`].
pub mod atlas;
pub mod atlas_errors;
pub mod atlas_params;
pub mod catalog;
pub mod constants;
pub mod neighbors;
pub mod orbits;
pub mod overlay;
pub mod render;
pub mod search;
pub mod view_state;

pub use crate::atlas::{AtlasState, StarFieldFrame};
pub use crate::atlas_errors::AtlasError;
pub use crate::atlas_params::AtlasParams;
pub use crate::catalog::{Star, StarCatalog};
pub use crate::constants::{ArcSec, SkyPoint};
pub use crate::neighbors::{Neighbor, NeighborTable};
pub use crate::orbits::{OrbitTrack, OrbitTrackSet};
pub use crate::search::SearchOutcome;
pub use crate::view_state::{AxisRanges, ViewState};
