//! # Atlas configuration
//!
//! This module defines [`AtlasParams`], the single configuration object of the library. It
//! gathers every tunable value used when deriving marker styles, ranking neighbors, choosing
//! the initial view and sampling orbit tracks.
//!
//! The [`Default`] values reproduce the historical, hardcoded behaviour exactly, so saved
//! configurations stay compatible. Use [`AtlasParams::builder`] to customize values; the
//! builder validates them in [`AtlasParamsBuilder::build`].
//!
//! ## Example
//!
//! ```rust
//! use gcg_atlas::atlas_params::AtlasParams;
//!
//! let params = AtlasParams::builder()
//!     .neighbor_cap(25)
//!     .highlight_color("#ff00ff")
//!     .build()
//!     .unwrap();
//! assert_eq!(params.neighbor_cap, 25);
//! ```
use std::fmt;

use crate::{
    atlas_errors::AtlasError,
    constants::{
        Magnitude, BORDER_COLOR, DEFAULT_COLOR, DISTANCE_DECIMALS, HIGHLIGHT_BORDER_WIDTH,
        HIGHLIGHT_COLOR, MAGNITUDE_SCALE, MARKER_OPACITY, NEIGHBOR_CAP, REFERENCE_MAGNITUDE,
        SIZE_AT_REFERENCE,
    },
    orbits::propagation::{PropagationContext, SamplingGrid},
    view_state::ViewState,
};

/// Tunable parameters of the atlas.
///
/// Fields
/// -----------------
/// * `reference_magnitude` – magnitude rendered at `size_at_reference`.
/// * `magnitude_scale` – e-folding scale of the size law (`> 0`).
/// * `size_at_reference` – marker size at the reference magnitude (`> 0`).
/// * `highlight_color` / `default_color` / `border_color` – marker colors.
/// * `highlight_border_width` – border width of the highlighted star.
/// * `marker_opacity` – marker opacity in `[0, 1]`.
/// * `neighbor_cap` – maximum rows of a neighbor table (`≥ 1`).
/// * `distance_decimals` – decimal places kept on neighbor distances.
/// * `default_view` – view used before any recentering.
/// * `sampling` – orbit sampling grid.
/// * `propagation` – physical assumptions forwarded to the orbit propagator.
///
/// Defaults
/// -----------------
/// * `reference_magnitude`: 19.0, `magnitude_scale`: 2.5, `size_at_reference`: 10.0
/// * `highlight_color`: `#ffff00`, `default_color`: `LightSkyBlue`, `border_color`: `white`
/// * `highlight_border_width`: 2, `marker_opacity`: 0.7
/// * `neighbor_cap`: 100, `distance_decimals`: 5
/// * `default_view`: center (0, 0), half range 0.4"
/// * `sampling`: 1994.0 → 2020.0, step 0.01
/// * `propagation`: 4.0e6 M☉ at 8000 pc
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasParams {
    pub reference_magnitude: Magnitude,
    pub magnitude_scale: f64,
    pub size_at_reference: f64,

    pub highlight_color: String,
    pub default_color: String,
    pub border_color: String,
    pub highlight_border_width: u32,
    pub marker_opacity: f64,

    pub neighbor_cap: usize,
    pub distance_decimals: u32,

    pub default_view: ViewState,
    pub sampling: SamplingGrid,
    pub propagation: PropagationContext,
}

impl AtlasParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AtlasParamsBuilder {
        AtlasParamsBuilder::new()
    }
}

impl Default for AtlasParams {
    fn default() -> Self {
        AtlasParams {
            reference_magnitude: REFERENCE_MAGNITUDE,
            magnitude_scale: MAGNITUDE_SCALE,
            size_at_reference: SIZE_AT_REFERENCE,
            highlight_color: HIGHLIGHT_COLOR.to_string(),
            default_color: DEFAULT_COLOR.to_string(),
            border_color: BORDER_COLOR.to_string(),
            highlight_border_width: HIGHLIGHT_BORDER_WIDTH,
            marker_opacity: MARKER_OPACITY,
            neighbor_cap: NEIGHBOR_CAP,
            distance_decimals: DISTANCE_DECIMALS,
            default_view: ViewState::default(),
            sampling: SamplingGrid::default(),
            propagation: PropagationContext::default(),
        }
    }
}

/// Builder for [`AtlasParams`], with validation.
#[derive(Debug, Clone)]
pub struct AtlasParamsBuilder {
    params: AtlasParams,
}

impl Default for AtlasParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AtlasParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: AtlasParams::default(),
        }
    }

    pub fn reference_magnitude(mut self, v: Magnitude) -> Self {
        self.params.reference_magnitude = v;
        self
    }
    pub fn magnitude_scale(mut self, v: f64) -> Self {
        self.params.magnitude_scale = v;
        self
    }
    pub fn size_at_reference(mut self, v: f64) -> Self {
        self.params.size_at_reference = v;
        self
    }
    pub fn highlight_color(mut self, v: impl Into<String>) -> Self {
        self.params.highlight_color = v.into();
        self
    }
    pub fn default_color(mut self, v: impl Into<String>) -> Self {
        self.params.default_color = v.into();
        self
    }
    pub fn border_color(mut self, v: impl Into<String>) -> Self {
        self.params.border_color = v.into();
        self
    }
    pub fn highlight_border_width(mut self, v: u32) -> Self {
        self.params.highlight_border_width = v;
        self
    }
    pub fn marker_opacity(mut self, v: f64) -> Self {
        self.params.marker_opacity = v;
        self
    }
    pub fn neighbor_cap(mut self, v: usize) -> Self {
        self.params.neighbor_cap = v;
        self
    }
    pub fn distance_decimals(mut self, v: u32) -> Self {
        self.params.distance_decimals = v;
        self
    }

    // --- Already-validated compound values ---
    pub fn default_view(mut self, v: ViewState) -> Self {
        self.params.default_view = v;
        self
    }
    pub fn sampling(mut self, v: SamplingGrid) -> Self {
        self.params.sampling = v;
        self
    }
    pub fn propagation(mut self, v: PropagationContext) -> Self {
        self.params.propagation = v;
        self
    }

    /// Finalize the builder and produce an [`AtlasParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `reference_magnitude` finite.
    /// * `magnitude_scale > 0`, `size_at_reference > 0` (both finite).
    /// * `0 ≤ marker_opacity ≤ 1`.
    /// * `neighbor_cap ≥ 1`.
    /// * `distance_decimals ≤ 15` (beyond that `f64` rounding is meaningless).
    /// * color strings not empty.
    /// * `propagation.mass > 0`, `propagation.distance_pc > 0`.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(AtlasParams)` or `Err(AtlasError::InvalidAtlasParameter)` naming the first failed rule.
    pub fn build(self) -> Result<AtlasParams, AtlasError> {
        let p = &self.params;
        let invalid = |msg: &str| Err(AtlasError::InvalidAtlasParameter(msg.into()));

        if !p.reference_magnitude.is_finite() {
            return invalid("reference_magnitude must be finite");
        }
        if !(p.magnitude_scale.is_finite() && p.magnitude_scale > 0.0) {
            return invalid("magnitude_scale must be > 0");
        }
        if !(p.size_at_reference.is_finite() && p.size_at_reference > 0.0) {
            return invalid("size_at_reference must be > 0");
        }
        if !(0.0..=1.0).contains(&p.marker_opacity) {
            return invalid("marker_opacity must lie in [0, 1]");
        }
        if p.neighbor_cap == 0 {
            return invalid("neighbor_cap must be >= 1");
        }
        if p.distance_decimals > 15 {
            return invalid("distance_decimals must be <= 15");
        }
        if p.highlight_color.is_empty() || p.default_color.is_empty() || p.border_color.is_empty()
        {
            return invalid("colors must not be empty");
        }
        if !(p.propagation.mass > 0.0 && p.propagation.distance_pc > 0.0) {
            return invalid("propagation mass and distance must be > 0");
        }

        Ok(self.params)
    }
}

impl fmt::Display for AtlasParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const NAME_COL: usize = 24;
            let rows: [(&str, String); 13] = [
                ("reference_magnitude", format!("{}", self.reference_magnitude)),
                ("magnitude_scale", format!("{}", self.magnitude_scale)),
                ("size_at_reference", format!("{}", self.size_at_reference)),
                ("highlight_color", self.highlight_color.clone()),
                ("default_color", self.default_color.clone()),
                ("border_color", self.border_color.clone()),
                ("highlight_border_width", format!("{}", self.highlight_border_width)),
                ("marker_opacity", format!("{}", self.marker_opacity)),
                ("neighbor_cap", format!("{}", self.neighbor_cap)),
                ("distance_decimals", format!("{}", self.distance_decimals)),
                ("default_view", format!("{}", self.default_view)),
                (
                    "sampling",
                    format!(
                        "{} → {} step {}",
                        self.sampling.t_start(),
                        self.sampling.t_end(),
                        self.sampling.dt()
                    ),
                ),
                (
                    "propagation",
                    format!(
                        "{:e} Msun at {} pc",
                        self.propagation.mass, self.propagation.distance_pc
                    ),
                ),
            ];
            writeln!(f, "AtlasParams")?;
            for (name, value) in rows {
                writeln!(f, "  {name:<NAME_COL$} = {value}")?;
            }
            Ok(())
        } else {
            write!(
                f,
                "AtlasParams(ref_mag={}, mag_scale={}, size={}, cap={}, view=[{}])",
                self.reference_magnitude,
                self.magnitude_scale,
                self.size_at_reference,
                self.neighbor_cap,
                self.default_view
            )
        }
    }
}

#[cfg(test)]
mod atlas_params_test {
    use super::*;

    #[test]
    fn test_defaults_match_historical_values() {
        let p = AtlasParams::default();
        assert_eq!(p.reference_magnitude, 19.0);
        assert_eq!(p.magnitude_scale, 2.5);
        assert_eq!(p.size_at_reference, 10.0);
        assert_eq!(p.highlight_color, "#ffff00");
        assert_eq!(p.highlight_border_width, 2);
        assert_eq!(p.neighbor_cap, 100);
        assert_eq!(p.distance_decimals, 5);
        assert_eq!(p.sampling.dt(), 0.01);
        assert_eq!(AtlasParams::builder().build().unwrap(), p);
    }

    #[test]
    fn test_builder_overrides() {
        let view = ViewState::new(1.0, 1.0, 2.0).unwrap();
        let p = AtlasParams::builder()
            .neighbor_cap(10)
            .default_color("grey")
            .default_view(view)
            .build()
            .unwrap();
        assert_eq!(p.neighbor_cap, 10);
        assert_eq!(p.default_color, "grey");
        assert_eq!(p.default_view, view);
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        let cases = [
            AtlasParams::builder().neighbor_cap(0),
            AtlasParams::builder().magnitude_scale(0.0),
            AtlasParams::builder().size_at_reference(-1.0),
            AtlasParams::builder().marker_opacity(1.5),
            AtlasParams::builder().reference_magnitude(f64::NAN),
            AtlasParams::builder().distance_decimals(30),
            AtlasParams::builder().highlight_color(""),
            AtlasParams::builder().propagation(PropagationContext {
                mass: 0.0,
                distance_pc: 8000.0,
            }),
        ];
        for builder in cases {
            assert!(matches!(
                builder.build(),
                Err(AtlasError::InvalidAtlasParameter(_))
            ));
        }
    }

    #[test]
    fn test_display_forms() {
        let p = AtlasParams::default();
        let compact = format!("{p}");
        assert!(compact.starts_with("AtlasParams(ref_mag=19, mag_scale=2.5"));
        let pretty = format!("{p:#}");
        assert!(pretty.contains("neighbor_cap"));
        assert!(pretty.contains("= 100"));
    }
}
