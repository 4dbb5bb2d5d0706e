//! Gradient-based bearing estimation with temporal smoothing.
//!
//! Each frame the estimator samples the observer's cell on the
//! *pre-step* field (the same "current" buffer the stencil reads,
//! before it is retired). If the amplitude magnitude crosses the
//! detection threshold, a central-difference gradient yields a raw
//! bearing which is blended into the running smoothed estimate.
//!
//! The gradient is negated, so the raw angle follows the original
//! outward convention and the *arrival vector* — the negated angle
//! direction — points from the observer toward the inferred source.
//! Frames without a detection leave the smoothed bearing untouched:
//! the last known value is held, never reset.

use ripple_core::{GridPos, TickId};
use ripple_grid::{FieldGrid, GridError};

/// A smoothed bearing produced by [`BearingEstimator::observe`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BearingEstimate {
    /// Smoothed bearing angle in radians, `atan2` convention.
    pub angle: f64,
}

impl BearingEstimate {
    /// The bearing in degrees, for diagnostics.
    pub fn degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// Unit vector pointing from the observer toward the inferred
    /// source of the disturbance.
    pub fn arrival_vector(&self) -> (f64, f64) {
        (-self.angle.cos(), -self.angle.sin())
    }
}

/// Detection bookkeeping owned by the interaction layer.
///
/// `first_detection` is set at most once per run and never cleared;
/// `smoothed` is unset until the first detection and thereafter holds
/// the most recent smoothed bearing across no-detection frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct BearingTracker {
    first_detection: Option<TickId>,
    smoothed: Option<f64>,
}

impl BearingTracker {
    /// Fresh tracker with no detection recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tick of the first above-threshold observation, if any.
    pub fn first_detection(&self) -> Option<TickId> {
        self.first_detection
    }

    /// The last smoothed bearing, if a disturbance was ever detected.
    pub fn bearing(&self) -> Option<BearingEstimate> {
        self.smoothed.map(|angle| BearingEstimate { angle })
    }
}

/// Decides whether the observer's cell exhibits a disturbance and
/// maintains the smoothed arrival bearing.
///
/// Stateless; per-run state lives in [`BearingTracker`]. Constructed
/// via the builder pattern: [`BearingEstimator::builder`].
#[derive(Clone, Debug)]
pub struct BearingEstimator {
    detection_threshold: f32,
    smoothing: f64,
}

/// Builder for [`BearingEstimator`].
///
/// Defaults: `detection_threshold = 0.001`, `smoothing = 0.9`.
pub struct BearingEstimatorBuilder {
    detection_threshold: f32,
    smoothing: f64,
}

impl BearingEstimator {
    /// Create a new builder for configuring a `BearingEstimator`.
    pub fn builder() -> BearingEstimatorBuilder {
        BearingEstimatorBuilder {
            detection_threshold: 0.001,
            smoothing: 0.9,
        }
    }

    /// The amplitude magnitude above which a disturbance is detected.
    pub fn detection_threshold(&self) -> f32 {
        self.detection_threshold
    }

    /// The exponential smoothing factor applied to consecutive raw
    /// bearings.
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Inspect the observer's cell on the pre-step field and update the
    /// tracker.
    ///
    /// Returns `Ok(Some(estimate))` when a disturbance is present this
    /// frame, `Ok(None)` otherwise (the tracker's last bearing is
    /// retained unchanged). The observer position must be in bounds;
    /// the interaction layer clamps it before sampling.
    pub fn observe(
        &self,
        grid: &FieldGrid,
        observer: GridPos,
        tick: TickId,
        tracker: &mut BearingTracker,
    ) -> Result<Option<BearingEstimate>, GridError> {
        let sample = grid
            .amplitude(observer)
            .ok_or(GridError::OutOfBounds {
                x: observer.x,
                y: observer.y,
                size: grid.size(),
            })?;

        if sample.abs() <= self.detection_threshold {
            return Ok(None);
        }

        if tracker.first_detection.is_none() {
            tracker.first_detection = Some(tick);
        }

        let raw = self.raw_bearing(grid, observer);
        let smoothed = match tracker.smoothed {
            Some(prev) => self.smoothing * prev + (1.0 - self.smoothing) * raw,
            None => raw,
        };
        tracker.smoothed = Some(smoothed);
        Ok(Some(BearingEstimate { angle: smoothed }))
    }

    /// Central-difference gradient at the observer's cell, negated, as
    /// an `atan2` angle. A zero gradient yields a defined bearing of 0
    /// ("no discernible direction"), still subject to smoothing.
    fn raw_bearing(&self, grid: &FieldGrid, observer: GridPos) -> f64 {
        let (x, y) = (observer.x, observer.y);
        let grad_x = -f64::from(grid.wrapped(x + 1, y) - grid.wrapped(x - 1, y)) / 2.0;
        let grad_y = -f64::from(grid.wrapped(x, y + 1) - grid.wrapped(x, y - 1)) / 2.0;
        if grad_x == 0.0 && grad_y == 0.0 {
            // atan2(-0.0, -0.0) is -π; a vanished gradient must read as 0.
            0.0
        } else {
            grad_y.atan2(grad_x)
        }
    }
}

impl BearingEstimatorBuilder {
    /// Set the detection threshold. Must be finite and > 0.
    pub fn detection_threshold(mut self, threshold: f32) -> Self {
        self.detection_threshold = threshold;
        self
    }

    /// Set the smoothing factor. Must lie in `[0, 1)`; higher values
    /// favour continuity over the current noisy sample.
    pub fn smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Build the estimator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `detection_threshold` is not finite and > 0
    /// - `smoothing` is outside `[0, 1)`
    pub fn build(self) -> Result<BearingEstimator, String> {
        if !self.detection_threshold.is_finite() || self.detection_threshold <= 0.0 {
            return Err(format!(
                "detection_threshold must be finite and > 0, got {}",
                self.detection_threshold
            ));
        }
        if !(self.smoothing >= 0.0 && self.smoothing < 1.0) {
            return Err(format!(
                "smoothing must lie in [0, 1), got {}",
                self.smoothing
            ));
        }
        Ok(BearingEstimator {
            detection_threshold: self.detection_threshold,
            smoothing: self.smoothing,
        })
    }
}
