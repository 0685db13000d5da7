//! # View state: the displayed sky window
//!
//! A [`ViewState`] is a square window on the sky plane, described by its center and a single
//! half-range shared by both axes (1:1 aspect ratio).
//!
//! ## Axis convention
//!
//! Following the astronomical convention, **x increases to the left**: the x interval handed
//! to the renderer is `[center_x + half_range, center_x − half_range]` (first bound on the
//! left edge). The y interval is the usual `[center_y − half_range, center_y + half_range]`.
//! Renderers must honor [`AxisRanges`] verbatim, including the inverted x direction.
//!
//! ## Mutation
//!
//! A view is a small `Copy` value. It is never modified in place: recentering (on a
//! successful search or user input) and rezooming return a new value. Rendering never
//! touches it.
use std::fmt;

use crate::{
    atlas_errors::AtlasError,
    constants::{ArcSec, DEFAULT_HALF_RANGE},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    center_x: ArcSec,
    center_y: ArcSec,
    half_range: ArcSec,
}

/// Axis intervals derived from a [`ViewState`].
///
/// `x[0]` is the left edge, `x[1]` the right edge; `y[0]` is the bottom, `y[1]` the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanges {
    pub x: [ArcSec; 2],
    pub y: [ArcSec; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            center_x: 0.0,
            center_y: 0.0,
            half_range: DEFAULT_HALF_RANGE,
        }
    }
}

fn check_half_range(half_range: ArcSec) -> Result<(), AtlasError> {
    if half_range.is_finite() && half_range > 0.0 {
        Ok(())
    } else {
        Err(AtlasError::InvalidViewState(format!(
            "half_range must be finite and > 0, got {half_range}"
        )))
    }
}

impl ViewState {
    /// Build a validated view.
    ///
    /// Return
    /// ----------
    /// * [`AtlasError::InvalidViewState`] if the center is not finite or `half_range <= 0`.
    pub fn new(center_x: ArcSec, center_y: ArcSec, half_range: ArcSec) -> Result<Self, AtlasError> {
        if !(center_x.is_finite() && center_y.is_finite()) {
            return Err(AtlasError::InvalidViewState(format!(
                "center must be finite, got ({center_x}, {center_y})"
            )));
        }
        check_half_range(half_range)?;
        Ok(ViewState {
            center_x,
            center_y,
            half_range,
        })
    }

    pub fn center_x(&self) -> ArcSec {
        self.center_x
    }

    pub fn center_y(&self) -> ArcSec {
        self.center_y
    }

    pub fn center(&self) -> (ArcSec, ArcSec) {
        (self.center_x, self.center_y)
    }

    pub fn half_range(&self) -> ArcSec {
        self.half_range
    }

    /// Same zoom level, new center.
    pub fn recentered(&self, center_x: ArcSec, center_y: ArcSec) -> Result<Self, AtlasError> {
        ViewState::new(center_x, center_y, self.half_range)
    }

    /// Same center, new zoom level.
    pub fn rezoomed(&self, half_range: ArcSec) -> Result<Self, AtlasError> {
        ViewState::new(self.center_x, self.center_y, half_range)
    }

    /// Left-to-right x interval (inverted: left bound is the larger value).
    pub fn x_range(&self) -> [ArcSec; 2] {
        [
            self.center_x + self.half_range,
            self.center_x - self.half_range,
        ]
    }

    /// Bottom-to-top y interval.
    pub fn y_range(&self) -> [ArcSec; 2] {
        [
            self.center_y - self.half_range,
            self.center_y + self.half_range,
        ]
    }

    pub fn axis_ranges(&self) -> AxisRanges {
        AxisRanges {
            x: self.x_range(),
            y: self.y_range(),
        }
    }

    /// Whether a sky position falls inside the displayed window (edges included).
    pub fn contains(&self, x: ArcSec, y: ArcSec) -> bool {
        (x - self.center_x).abs() <= self.half_range && (y - self.center_y).abs() <= self.half_range
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center = ({:.4}\", {:.4}\"), half_range = {:.4}\"",
            self.center_x, self.center_y, self.half_range
        )
    }
}
