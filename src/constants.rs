//! # Constants and type definitions for the atlas
//!
//! This module centralizes the **unit aliases** and the **default values** used throughout
//! the `gcg_atlas` library. The defaults reproduce the historical behaviour of the map
//! (marker sizing, highlight colors, neighbor cap, orbit sampling) and seed
//! [`AtlasParams::default`](crate::atlas_params::AtlasParams).
//!
//! ## Overview
//!
//! - Sky-plane unit aliases (arcseconds, magnitudes, years)
//! - Marker sizing law constants
//! - Highlight / display styling defaults
//! - Neighbor ranking defaults
//! - Orbit sampling and propagation defaults

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle on the sky plane, in arcseconds
pub type ArcSec = f64;
/// Astronomical magnitude (lower = brighter)
pub type Magnitude = f64;
/// Epoch expressed as a decimal year
pub type Year = f64;

/// A sampled sky-plane position `(x, y)` in arcseconds
pub type SkyPoint = (ArcSec, ArcSec);

// -------------------------------------------------------------------------------------------------
// Marker sizing
// -------------------------------------------------------------------------------------------------

/// Magnitude at which a marker is rendered with [`SIZE_AT_REFERENCE`]
pub const REFERENCE_MAGNITUDE: Magnitude = 19.0;

/// e-folding scale of the marker size law, in magnitudes
pub const MAGNITUDE_SCALE: f64 = 2.5;

/// Marker size at [`REFERENCE_MAGNITUDE`]
pub const SIZE_AT_REFERENCE: f64 = 10.0;

// -------------------------------------------------------------------------------------------------
// Styling
// -------------------------------------------------------------------------------------------------

/// Fill color of the highlighted star
pub const HIGHLIGHT_COLOR: &str = "#ffff00";

/// Fill color of every other star
pub const DEFAULT_COLOR: &str = "LightSkyBlue";

/// Border color drawn around markers
pub const BORDER_COLOR: &str = "white";

/// Border width of the highlighted star (others get 0)
pub const HIGHLIGHT_BORDER_WIDTH: u32 = 2;

/// Marker opacity
pub const MARKER_OPACITY: f64 = 0.7;

// -------------------------------------------------------------------------------------------------
// View and neighbor ranking
// -------------------------------------------------------------------------------------------------

/// Default half-width of the displayed window
pub const DEFAULT_HALF_RANGE: ArcSec = 0.4;

/// Maximum number of rows in a neighbor table
pub const NEIGHBOR_CAP: usize = 100;

/// Decimal places kept on displayed neighbor distances
pub const DISTANCE_DECIMALS: u32 = 5;

// -------------------------------------------------------------------------------------------------
// Orbit sampling
// -------------------------------------------------------------------------------------------------

/// First sampled epoch of an orbit track
pub const ORBIT_T_START: Year = 1994.0;

/// Last sampled epoch of an orbit track
pub const ORBIT_T_END: Year = 2020.0;

/// Nominal sampling step of an orbit track
pub const ORBIT_DT: Year = 0.01;

/// Upper bound on the number of epochs of one sampling grid
pub const MAX_ORBIT_SAMPLES: usize = 10_000_000;

/// Central mass handed to the propagator, in solar masses
pub const BLACK_HOLE_MASS: f64 = 4.0e6;

/// Distance to the galactic center handed to the propagator, in parsecs
pub const GALACTIC_CENTER_DISTANCE_PC: f64 = 8000.0;
