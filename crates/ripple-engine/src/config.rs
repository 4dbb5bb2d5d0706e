//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a
//! [`RippleWorld`](crate::RippleWorld). All parameters are fixed for
//! the run; invalid values are a fatal startup condition, not a
//! runtime-recoverable one, so [`validate()`](WorldConfig::validate)
//! rejects them before any simulation state exists.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use ripple_core::GridPos;
use ripple_grid::GridError;

/// Configuration for a simulation world.
///
/// The defaults reproduce the reference run: a 120×120 grid, wave
/// speed 3.0, time step 0.1, spacing 1.0, damping 0.995, detection
/// threshold 0.001, smoothing 0.9, a span-5 emitter at the grid
/// center, the observer at (50, 50), and a 50 ms frame cadence.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Lattice size on both axes.
    pub grid_size: u32,
    /// Wave propagation speed `c`.
    pub wave_speed: f64,
    /// Integration time step `dt`.
    pub time_step: f64,
    /// Lattice spacing `dx`.
    pub grid_spacing: f64,
    /// Per-step multiplicative damping, strictly below 1.
    pub damping: f64,
    /// Amplitude magnitude above which the observer detects a
    /// disturbance.
    pub detection_threshold: f32,
    /// Exponential smoothing factor for the bearing estimate.
    pub smoothing: f64,
    /// Initial emitter position.
    pub emitter: GridPos,
    /// Horizontal emitter span in cells.
    pub emitter_span: u32,
    /// Initial observer position.
    pub observer: GridPos,
    /// Display length of the bearing overlay vector.
    pub overlay_length: f64,
    /// Fixed frame cadence for [`FrameLoop`](crate::FrameLoop).
    pub frame_interval: Duration,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: 120,
            wave_speed: 3.0,
            time_step: 0.1,
            grid_spacing: 1.0,
            damping: 0.995,
            detection_threshold: 0.001,
            smoothing: 0.9,
            emitter: GridPos::new(60, 60),
            emitter_span: 5,
            observer: GridPos::new(50, 50),
            overlay_length: 5.0,
            frame_interval: Duration::from_millis(50),
        }
    }
}

impl WorldConfig {
    /// Check every structural and numeric invariant.
    ///
    /// Returns the first violation found. A config that passes here
    /// always yields a constructible world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if !self.wave_speed.is_finite() || self.wave_speed <= 0.0 {
            return Err(ConfigError::InvalidWaveSpeed {
                value: self.wave_speed,
            });
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ConfigError::InvalidTimeStep {
                value: self.time_step,
            });
        }
        if !self.grid_spacing.is_finite() || self.grid_spacing <= 0.0 {
            return Err(ConfigError::InvalidGridSpacing {
                value: self.grid_spacing,
            });
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::InvalidDamping {
                value: self.damping,
            });
        }
        let max = self.grid_spacing / (self.wave_speed * 2.0_f64.sqrt());
        if self.time_step > max {
            return Err(ConfigError::UnstableTimeStep {
                time_step: self.time_step,
                max,
            });
        }
        if !self.detection_threshold.is_finite() || self.detection_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.detection_threshold,
            });
        }
        if !(self.smoothing >= 0.0 && self.smoothing < 1.0) {
            return Err(ConfigError::InvalidSmoothing {
                value: self.smoothing,
            });
        }
        if self.emitter_span == 0 {
            return Err(ConfigError::ZeroEmitterSpan);
        }
        if !self.emitter.in_bounds(self.grid_size) {
            return Err(ConfigError::StartOutOfBounds {
                role: "emitter",
                pos: self.emitter,
            });
        }
        if !self.observer.in_bounds(self.grid_size) {
            return Err(ConfigError::StartOutOfBounds {
                role: "observer",
                pos: self.observer,
            });
        }
        if !self.overlay_length.is_finite() || self.overlay_length <= 0.0 {
            return Err(ConfigError::InvalidOverlayLength {
                value: self.overlay_length,
            });
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }
}

/// Errors detected during [`WorldConfig::validate()`] or world
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid size is zero.
    EmptyGrid,
    /// Wave speed is NaN, infinite, zero, or negative.
    InvalidWaveSpeed {
        /// The invalid value.
        value: f64,
    },
    /// Time step is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// Grid spacing is NaN, infinite, zero, or negative.
    InvalidGridSpacing {
        /// The invalid value.
        value: f64,
    },
    /// Damping is outside the open interval (0, 1).
    InvalidDamping {
        /// The invalid value.
        value: f64,
    },
    /// Time step exceeds the CFL stability bound.
    UnstableTimeStep {
        /// The configured time step.
        time_step: f64,
        /// The maximum stable time step.
        max: f64,
    },
    /// Detection threshold is NaN, infinite, zero, or negative.
    InvalidThreshold {
        /// The invalid value.
        value: f32,
    },
    /// Smoothing factor is outside `[0, 1)`.
    InvalidSmoothing {
        /// The invalid value.
        value: f64,
    },
    /// Emitter span is zero cells.
    ZeroEmitterSpan,
    /// An initial position lies outside the grid.
    StartOutOfBounds {
        /// Which position was rejected ("emitter" or "observer").
        role: &'static str,
        /// The rejected position.
        pos: GridPos,
    },
    /// Overlay display length is NaN, infinite, zero, or negative.
    InvalidOverlayLength {
        /// The invalid value.
        value: f64,
    },
    /// Frame interval is zero.
    ZeroFrameInterval,
    /// Grid construction failed.
    Grid(GridError),
    /// A component builder rejected the configuration.
    Component {
        /// The builder's description of the rejection.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::InvalidWaveSpeed { value } => {
                write!(f, "wave_speed must be finite and > 0, got {value}")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "time_step must be finite and > 0, got {value}")
            }
            Self::InvalidGridSpacing { value } => {
                write!(f, "grid_spacing must be finite and > 0, got {value}")
            }
            Self::InvalidDamping { value } => {
                write!(f, "damping must satisfy 0 < damping < 1, got {value}")
            }
            Self::UnstableTimeStep { time_step, max } => {
                write!(f, "time_step {time_step} exceeds CFL bound {max}")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "detection_threshold must be finite and > 0, got {value}")
            }
            Self::InvalidSmoothing { value } => {
                write!(f, "smoothing must lie in [0, 1), got {value}")
            }
            Self::ZeroEmitterSpan => write!(f, "emitter span must be at least 1 cell"),
            Self::StartOutOfBounds { role, pos } => {
                write!(f, "{role} start position {pos} outside the grid")
            }
            Self::InvalidOverlayLength { value } => {
                write!(f, "overlay_length must be finite and > 0, got {value}")
            }
            Self::ZeroFrameInterval => write!(f, "frame interval must be non-zero"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Component { reason } => write!(f, "component: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
