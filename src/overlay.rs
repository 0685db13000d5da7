//! # Orbit overlays
//!
//! Pairs each sampled trajectory of an [`OrbitTrackSet`] with its display label so the
//! renderer can draw it as a polyline. Coordinates are passed through untouched: tracks are
//! already in sky-plane arcseconds.
//!
//! Track order is preserved, which keeps the legend stable between refreshes. An absent or
//! empty track set yields an empty overlay list.
//!
//! When built against a catalog ([`build_overlays_for_catalog`]), each overlay also records
//! the index of its star; tracks whose name matches no star are kept with `catalog_index = None`.
use log::{debug, warn};

use crate::{
    catalog::StarCatalog,
    constants::SkyPoint,
    orbits::{OrbitTrack, OrbitTrackSet},
};

/// A displayable orbit polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitOverlay {
    /// Display label, equal to the track's star name.
    pub label: String,
    /// Legend entry, `"Orbit: <star name>"`.
    pub legend_name: String,
    pub points: Vec<SkyPoint>,
    pub catalog_index: Option<usize>,
}

impl OrbitOverlay {
    fn from_track(track: &OrbitTrack, catalog_index: Option<usize>) -> Self {
        OrbitOverlay {
            label: track.star_name().to_string(),
            legend_name: format!("Orbit: {}", track.star_name()),
            points: track.points().to_vec(),
            catalog_index,
        }
    }

    /// Polyline x coordinates.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    /// Polyline y coordinates.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }
}

/// Build one overlay per track, in track order.
pub fn build_overlays(tracks: Option<&OrbitTrackSet>) -> Vec<OrbitOverlay> {
    let Some(tracks) = tracks else {
        return Vec::new();
    };
    debug!("Building {} orbit overlays", tracks.len());
    tracks
        .iter()
        .map(|t| OrbitOverlay::from_track(t, None))
        .collect()
}

/// Same as [`build_overlays`], also resolving each track's star in `catalog`.
pub fn build_overlays_for_catalog(
    tracks: Option<&OrbitTrackSet>,
    catalog: &StarCatalog,
) -> Vec<OrbitOverlay> {
    let Some(tracks) = tracks else {
        return Vec::new();
    };
    tracks
        .iter()
        .map(|t| {
            let index = catalog.find_index(t.star_name());
            if index.is_none() {
                warn!("Orbit track '{}' matches no catalog star", t.star_name());
            }
            OrbitOverlay::from_track(t, index)
        })
        .collect()
}
