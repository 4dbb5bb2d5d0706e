//! The simulation world: state ownership, command dispatch, and the
//! per-frame step.

use std::time::Instant;

use ripple_core::{Command, GridPos, TickId};
use ripple_grid::{FieldGrid, GridError};
use ripple_sim::{BearingEstimator, BearingTracker, WaveIntegrator};

use crate::config::{ConfigError, WorldConfig};
use crate::metrics::FrameMetrics;

/// The disturbance source: a position and a horizontal span.
///
/// Every emitter move re-injects the span at the new position, so a
/// travelling emitter leaves a trail of fresh wavefronts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emitter {
    /// Current grid position.
    pub pos: GridPos,
    /// Horizontal injection span in cells.
    pub span: u32,
}

/// The bearing overlay: a line segment from the observer toward the
/// inferred source, in fractional grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BearingOverlay {
    /// Segment start (the observer's cell).
    pub start: (f64, f64),
    /// Segment end, `overlay_length` cells along the arrival vector.
    pub end: (f64, f64),
    /// The smoothed bearing angle in degrees.
    pub degrees: f64,
}

/// One frame's render input, borrowing the post-step world.
///
/// The amplitude slice aliases the grid's current buffer, so a frame
/// cannot outlive the step that produced it; render sinks copy what
/// they need before the next step.
#[derive(Debug)]
pub struct Frame<'w> {
    /// Row-major amplitude samples, `grid_size * grid_size` cells.
    pub amplitude: &'w [f32],
    /// Lattice size on both axes.
    pub grid_size: u32,
    /// Observer position.
    pub observer: GridPos,
    /// Emitter position.
    pub emitter: GridPos,
    /// Bearing overlay, present once a disturbance has ever been
    /// detected.
    pub overlay: Option<BearingOverlay>,
    /// The tick this frame reflects.
    pub tick: TickId,
    /// Diagnostics for the step that produced this frame.
    pub metrics: FrameMetrics,
}

/// Complete simulation state for one run.
///
/// Constructed from a validated [`WorldConfig`]; stepped once per
/// frame by [`FrameLoop`](crate::FrameLoop) or directly by tests.
#[derive(Debug)]
pub struct RippleWorld {
    grid: FieldGrid,
    integrator: WaveIntegrator,
    estimator: BearingEstimator,
    tracker: BearingTracker,
    emitter: Emitter,
    observer: GridPos,
    tick: TickId,
    quit_requested: bool,
    overlay_length: f64,
    last_metrics: FrameMetrics,
}

impl RippleWorld {
    /// Build a world from `config`.
    ///
    /// The field starts at rest; the first disturbance arrives through
    /// [`Command::Inject`] or an emitter move.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = FieldGrid::new(config.grid_size)?;
        let integrator = WaveIntegrator::builder()
            .wave_speed(config.wave_speed)
            .time_step(config.time_step)
            .grid_spacing(config.grid_spacing)
            .damping(config.damping)
            .build()
            .map_err(|reason| ConfigError::Component { reason })?;
        let estimator = BearingEstimator::builder()
            .detection_threshold(config.detection_threshold)
            .smoothing(config.smoothing)
            .build()
            .map_err(|reason| ConfigError::Component { reason })?;

        Ok(Self {
            grid,
            integrator,
            estimator,
            tracker: BearingTracker::new(),
            emitter: Emitter {
                pos: config.emitter,
                span: config.emitter_span,
            },
            observer: config.observer,
            tick: TickId(0),
            quit_requested: false,
            overlay_length: config.overlay_length,
            last_metrics: FrameMetrics::default(),
        })
    }

    /// Apply a single command.
    ///
    /// Moves that would leave the grid are dropped and the mover stays
    /// in place; an emitter move re-injects either way. `Quit` only
    /// raises the quit flag; the frame still completes.
    pub fn apply(&mut self, command: Command) -> Result<(), GridError> {
        match command {
            Command::MoveObserver(direction) => {
                self.observer = self.observer.step_within(direction, self.grid.size());
            }
            Command::MoveEmitter(direction) => {
                // Emission is tied to the command, not to the movement
                // succeeding: a boundary-blocked move still re-emits in
                // place.
                self.emitter.pos = self.emitter.pos.step_within(direction, self.grid.size());
                self.grid.inject_span(self.emitter.pos, self.emitter.span)?;
            }
            Command::Inject => {
                self.grid.inject_span(self.emitter.pos, self.emitter.span)?;
            }
            Command::Quit => {
                self.quit_requested = true;
            }
        }
        Ok(())
    }

    /// Run one frame: apply `commands`, sample the observer on the
    /// pre-step field, integrate one time step, and advance the tick.
    ///
    /// The returned [`Frame`] borrows the post-step field.
    pub fn step(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Frame<'_>, GridError> {
        let frame_start = Instant::now();
        let mut metrics = FrameMetrics::default();

        let commands_start = Instant::now();
        for command in commands {
            self.apply(command)?;
            metrics.commands_applied += 1;
        }
        metrics.command_processing_us = commands_start.elapsed().as_micros() as u64;

        // Observation happens before integration so the estimator sees
        // the same buffer the stencil is about to consume.
        let estimate_start = Instant::now();
        let estimate =
            self.estimator
                .observe(&self.grid, self.observer, self.tick, &mut self.tracker)?;
        metrics.estimate_us = estimate_start.elapsed().as_micros() as u64;
        metrics.detected = estimate.is_some();

        let integrate_start = Instant::now();
        self.integrator.step(&mut self.grid)?;
        metrics.integrate_us = integrate_start.elapsed().as_micros() as u64;

        metrics.energy = self.grid.energy();
        metrics.first_detection = self.tracker.first_detection();
        metrics.bearing_degrees = self.tracker.bearing().map(|b| b.degrees());
        metrics.total_us = frame_start.elapsed().as_micros() as u64;

        let frame_tick = self.tick;
        self.tick = self.tick.next();
        self.last_metrics = metrics.clone();

        Ok(Frame {
            amplitude: self.grid.current(),
            grid_size: self.grid.size(),
            observer: self.observer,
            emitter: self.emitter.pos,
            overlay: self.overlay(),
            tick: frame_tick,
            metrics,
        })
    }

    /// The bearing overlay, if a disturbance was ever detected.
    ///
    /// The segment runs from the observer along the arrival vector, so
    /// it points at the inferred source and persists across
    /// no-detection frames.
    pub fn overlay(&self) -> Option<BearingOverlay> {
        self.tracker.bearing().map(|estimate| {
            let (ax, ay) = estimate.arrival_vector();
            let start = (f64::from(self.observer.x), f64::from(self.observer.y));
            let end = (
                start.0 + self.overlay_length * ax,
                start.1 + self.overlay_length * ay,
            );
            BearingOverlay {
                start,
                end,
                degrees: estimate.degrees(),
            }
        })
    }

    /// Current observer position.
    pub fn observer(&self) -> GridPos {
        self.observer
    }

    /// Current emitter state.
    pub fn emitter(&self) -> Emitter {
        self.emitter
    }

    /// Detection bookkeeping for this run.
    pub fn tracker(&self) -> &BearingTracker {
        &self.tracker
    }

    /// The tick the next step will carry.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Whether a `Quit` command has been applied.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Read access to the field grid.
    pub fn grid(&self) -> &FieldGrid {
        &self.grid
    }

    /// Diagnostics from the most recent step.
    pub fn last_metrics(&self) -> &FrameMetrics {
        &self.last_metrics
    }
}
