//! # Orbit propagation contract
//!
//! Turning Keplerian elements into sky-plane trajectories is the job of an external solver.
//! This module only fixes **what goes in and what comes out**:
//!
//! * [`SamplingGrid`] – the epochs at which every track is sampled,
//! * [`PropagationContext`] – physical assumptions forwarded untouched (central mass, distance),
//! * [`OrbitPropagator`] – the solver seam, returning `(x, y)` arcsecond samples per epoch.
//!
//! [`OrbitTrackSet::propagate_all`] drives a propagator over a whole orbit table and keeps the
//! table order, which later keeps the overlay legend stable.
//!
//! Sampling
//! -----------------
//! The grid holds `n = ceil((t_end - t_start) / dt)` epochs evenly spread over
//! `[t_start, t_end]`, **both endpoints included**. The effective spacing is therefore
//! `(t_end - t_start) / (n - 1)`, slightly larger than `dt`.
use log::debug;

use crate::{
    atlas_errors::AtlasError,
    constants::{
        SkyPoint, Year, BLACK_HOLE_MASS, GALACTIC_CENTER_DISTANCE_PC, MAX_ORBIT_SAMPLES, ORBIT_DT,
        ORBIT_T_END, ORBIT_T_START,
    },
    orbits::{orbit_table_reader::OrbitElements, OrbitTrack, OrbitTrackSet},
};

/// Time grid on which orbit tracks are sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid {
    t_start: Year,
    t_end: Year,
    dt: Year,
}

impl Default for SamplingGrid {
    fn default() -> Self {
        SamplingGrid {
            t_start: ORBIT_T_START,
            t_end: ORBIT_T_END,
            dt: ORBIT_DT,
        }
    }
}

impl SamplingGrid {
    /// Build a validated grid.
    ///
    /// Return
    /// ----------
    /// * [`AtlasError::InvalidSamplingGrid`] unless `dt > 0` and `t_end > t_start` (all finite)
    ///   and the grid holds at most [`MAX_ORBIT_SAMPLES`] epochs.
    pub fn new(t_start: Year, t_end: Year, dt: Year) -> Result<Self, AtlasError> {
        if !(t_start.is_finite() && t_end.is_finite() && dt.is_finite()) {
            return Err(AtlasError::InvalidSamplingGrid(
                "bounds and step must be finite".into(),
            ));
        }
        if dt <= 0.0 {
            return Err(AtlasError::InvalidSamplingGrid("dt must be > 0".into()));
        }
        if t_end <= t_start {
            return Err(AtlasError::InvalidSamplingGrid(
                "t_end must be greater than t_start".into(),
            ));
        }
        let samples = ((t_end - t_start) / dt).ceil();
        if !samples.is_finite() || samples > MAX_ORBIT_SAMPLES as f64 {
            return Err(AtlasError::InvalidSamplingGrid(format!(
                "{samples} epochs exceed the limit of {MAX_ORBIT_SAMPLES}"
            )));
        }
        Ok(SamplingGrid { t_start, t_end, dt })
    }

    pub fn t_start(&self) -> Year {
        self.t_start
    }

    pub fn t_end(&self) -> Year {
        self.t_end
    }

    pub fn dt(&self) -> Year {
        self.dt
    }

    /// Number of sampled epochs.
    pub fn sample_count(&self) -> usize {
        (((self.t_end - self.t_start) / self.dt).ceil() as usize).max(1)
    }

    /// The sampled epochs, ascending, first = `t_start`, last = `t_end`.
    pub fn epochs(&self) -> Vec<Year> {
        let n = self.sample_count();
        if n == 1 {
            return vec![self.t_start];
        }
        let step = (self.t_end - self.t_start) / (n - 1) as f64;
        let mut epochs: Vec<Year> = (0..n).map(|i| self.t_start + i as f64 * step).collect();
        epochs[n - 1] = self.t_end;
        epochs
    }
}

/// Physical assumptions forwarded to the propagator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagationContext {
    /// Central mass, in solar masses.
    pub mass: f64,
    /// Distance to the central mass, in parsecs.
    pub distance_pc: f64,
}

impl Default for PropagationContext {
    fn default() -> Self {
        PropagationContext {
            mass: BLACK_HOLE_MASS,
            distance_pc: GALACTIC_CENTER_DISTANCE_PC,
        }
    }
}

/// External Kepler-elements → sky-plane solver.
///
/// Implementors must return one `(x, y)` arcsecond sample per input epoch, in epoch order.
pub trait OrbitPropagator {
    fn propagate(
        &self,
        elements: &OrbitElements,
        epochs: &[Year],
        context: &PropagationContext,
    ) -> Result<Vec<SkyPoint>, AtlasError>;
}

impl OrbitTrackSet {
    /// Propagate every element row on the same grid and collect the tracks in table order.
    ///
    /// Arguments
    /// -----------------
    /// * `elements` – Orbit rows, usually from [`read_orbit_table`](crate::orbits::orbit_table_reader::read_orbit_table).
    /// * `propagator` – The external solver.
    /// * `grid` – Sampling epochs shared by all tracks.
    /// * `context` – Mass / distance assumptions.
    ///
    /// Return
    /// ----------
    /// * The track set, or the first propagation error. A propagator returning a number of
    ///   samples different from the number of epochs yields [`AtlasError::PropagationFailed`].
    pub fn propagate_all<P: OrbitPropagator + ?Sized>(
        elements: &[OrbitElements],
        propagator: &P,
        grid: &SamplingGrid,
        context: &PropagationContext,
    ) -> Result<OrbitTrackSet, AtlasError> {
        let epochs = grid.epochs();
        debug!(
            "Propagating {} orbits on {} epochs",
            elements.len(),
            epochs.len()
        );

        elements
            .iter()
            .map(|el| {
                let points = propagator.propagate(el, &epochs, context)?;
                if points.len() != epochs.len() {
                    return Err(AtlasError::PropagationFailed {
                        star: el.star_name.clone(),
                        reason: format!(
                            "expected {} samples, got {}",
                            epochs.len(),
                            points.len()
                        ),
                    });
                }
                Ok(OrbitTrack::new(el.star_name.clone(), points))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(OrbitTrackSet::new)
    }
}
