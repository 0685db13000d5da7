//! # Per-star render parameters
//!
//! Derives the renderer-agnostic visual attributes of every star: marker size, fill color,
//! border, label and hover text. The renderer turns the resulting [`MarkerStyle`] list into
//! an actual chart; nothing here knows about drawing.
//!
//! ## Rules
//!
//! * **Size:** `exp(-(magnitude - m_ref) / scale) * size_ref`, with the defaults
//!   `m_ref = 19`, `scale = 2.5`, `size_ref = 10`. Brighter (smaller magnitude) stars render
//!   larger; a star at `m_ref` has exactly `size_ref`.
//! * **Highlight:** the star whose name equals the highlight name gets the highlight color and
//!   a border of `highlight_border_width`; every other star gets the default color and no border.
//! * **Labels:** `label_text = name` iff labels are enabled, regardless of highlight state.
//!
//! ## Determinism
//!
//! [`derive_render_parameters`] is pure: the output follows catalog order and depends only on
//! its arguments, so identical inputs always give identical lists.
use log::debug;

use crate::{
    atlas_params::AtlasParams,
    catalog::{Star, StarCatalog},
    constants::Magnitude,
};

/// Visual attributes of one star.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub x: f64,
    pub y: f64,
    pub marker_size: f64,
    pub color: String,
    pub border_width: u32,
    pub border_color: String,
    pub opacity: f64,
    pub label_text: Option<String>,
    pub hover_text: String,
    /// Set at derivation time; colors and widths may coincide with the defaults.
    pub highlighted: bool,
}

impl MarkerStyle {
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Marker size for a given magnitude.
pub fn marker_size(magnitude: Magnitude, params: &AtlasParams) -> f64 {
    (-(magnitude - params.reference_magnitude) / params.magnitude_scale).exp()
        * params.size_at_reference
}

fn hover_text(star: &Star) -> String {
    format!(
        "Name: {}<br>X: {:?}<br>Y: {:?}<br>Mag: {:?}",
        star.name, star.x, star.y, star.magnitude
    )
}

/// Derive the marker style of every star, in catalog order.
///
/// Arguments
/// -----------------
/// * `catalog` – The stars to render.
/// * `highlight_name` – Name of the star to highlight, if any. A name absent from the catalog
///   highlights nothing.
/// * `show_labels` – Whether every marker carries its name as label.
/// * `params` – Sizing and styling configuration.
///
/// Return
/// ----------
/// * One [`MarkerStyle`] per star, index-aligned with the catalog.
pub fn derive_render_parameters(
    catalog: &StarCatalog,
    highlight_name: Option<&str>,
    show_labels: bool,
    params: &AtlasParams,
) -> Vec<MarkerStyle> {
    debug!(
        "Deriving render parameters for {} stars (highlight = {:?}, labels = {show_labels})",
        catalog.size(),
        highlight_name
    );

    catalog
        .iter()
        .map(|star| {
            let highlighted = highlight_name == Some(star.name.as_str());
            MarkerStyle {
                x: star.x,
                y: star.y,
                marker_size: marker_size(star.magnitude, params),
                color: if highlighted {
                    params.highlight_color.clone()
                } else {
                    params.default_color.clone()
                },
                border_width: if highlighted {
                    params.highlight_border_width
                } else {
                    0
                },
                border_color: params.border_color.clone(),
                opacity: params.marker_opacity,
                label_text: show_labels.then(|| star.name.clone()),
                hover_text: hover_text(star),
                highlighted,
            }
        })
        .collect()
}
