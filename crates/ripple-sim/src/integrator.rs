//! Explicit finite-difference integrator for the damped 2D wave equation.
//!
//! Leapfrog-style update using two time levels:
//!
//! ```text
//! lap(x,y)  = cur(x+1,y) + cur(x-1,y) + cur(x,y+1) + cur(x,y-1) - 4·cur(x,y)
//! next(x,y) = damping · (2·cur(x,y) - prev(x,y) + (c²·dt²/dx²) · lap(x,y))
//! ```
//!
//! Neighbour indices wrap modulo the grid size (periodic boundary), so
//! the stencil is uniform with no edge special cases. `damping < 1`
//! guarantees energy decays under repeated wraparound passes.
//!
//! Constructed via the builder pattern: [`WaveIntegrator::builder`].

use ripple_grid::{wrapped_neighbours_flat, FieldGrid, GridError};

/// Advances a [`FieldGrid`] by one discrete time step.
///
/// All parameters are fixed for the run. The full grid is recomputed
/// every frame, unconditionally; an all-zero field stays all-zero under
/// the stencil, so no idle-skip is needed for correctness.
///
/// # Stability
///
/// The explicit scheme on a 4-connected grid requires a Courant number
/// `c·dt/dx ≤ 1/√2`; [`builder`](Self::builder) rejects time steps
/// beyond that bound at construction.
#[derive(Clone, Debug)]
pub struct WaveIntegrator {
    wave_speed: f64,
    time_step: f64,
    grid_spacing: f64,
    damping: f64,
    /// Precomputed `c²·dt²/dx²`.
    coefficient: f32,
}

/// Builder for [`WaveIntegrator`].
///
/// Defaults: `wave_speed = 1.0`, `time_step = 0.1`,
/// `grid_spacing = 1.0`, `damping = 0.995`.
pub struct WaveIntegratorBuilder {
    wave_speed: f64,
    time_step: f64,
    grid_spacing: f64,
    damping: f64,
}

impl WaveIntegrator {
    /// Create a new builder for configuring a `WaveIntegrator`.
    pub fn builder() -> WaveIntegratorBuilder {
        WaveIntegratorBuilder {
            wave_speed: 1.0,
            time_step: 0.1,
            grid_spacing: 1.0,
            damping: 0.995,
        }
    }

    /// The configured wave speed `c`.
    pub fn wave_speed(&self) -> f64 {
        self.wave_speed
    }

    /// The configured time step `dt`.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// The per-step multiplicative damping factor.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// The Courant number `c·dt/dx`.
    pub fn courant(&self) -> f64 {
        self.wave_speed * self.time_step / self.grid_spacing
    }

    /// Maximum stable time step for this speed and spacing:
    /// `dx / (c·√2)`.
    pub fn max_time_step(&self) -> f64 {
        self.grid_spacing / (self.wave_speed * 2.0_f64.sqrt())
    }

    /// Advance the grid by exactly one time step and retire the buffers
    /// (previous ← current, current ← next).
    pub fn step(&self, grid: &mut FieldGrid) -> Result<(), GridError> {
        let n = grid.size() as i32;
        let cells = grid.cell_count();
        let cur = grid.current();
        let prev = grid.previous();
        let damping = self.damping as f32;

        let mut next = vec![0.0f32; cells];
        for y in 0..n {
            for x in 0..n {
                let i = y as usize * n as usize + x as usize;
                let sum: f32 = wrapped_neighbours_flat(x, y, n)
                    .iter()
                    .map(|&j| cur[j])
                    .sum();
                let laplacian = sum - 4.0 * cur[i];
                next[i] = damping * (2.0 * cur[i] - prev[i] + self.coefficient * laplacian);
            }
        }

        grid.advance(next)
    }
}

impl WaveIntegratorBuilder {
    /// Set the wave speed `c`. Must be finite and > 0.
    pub fn wave_speed(mut self, speed: f64) -> Self {
        self.wave_speed = speed;
        self
    }

    /// Set the time step `dt`. Must be finite, > 0, and within the CFL
    /// bound for the configured speed and spacing.
    pub fn time_step(mut self, dt: f64) -> Self {
        self.time_step = dt;
        self
    }

    /// Set the grid spacing `dx`. Must be finite and > 0.
    pub fn grid_spacing(mut self, dx: f64) -> Self {
        self.grid_spacing = dx;
        self
    }

    /// Set the per-step damping factor. Must satisfy `0 < damping < 1`.
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Build the integrator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `wave_speed`, `time_step`, or `grid_spacing` is not finite and > 0
    /// - `damping` is not strictly between 0 and 1
    /// - `time_step` exceeds the CFL bound `dx / (c·√2)`
    pub fn build(self) -> Result<WaveIntegrator, String> {
        if !(self.wave_speed > 0.0) || !self.wave_speed.is_finite() {
            return Err(format!(
                "wave_speed must be finite and > 0, got {}",
                self.wave_speed
            ));
        }
        if !(self.time_step > 0.0) || !self.time_step.is_finite() {
            return Err(format!(
                "time_step must be finite and > 0, got {}",
                self.time_step
            ));
        }
        if !(self.grid_spacing > 0.0) || !self.grid_spacing.is_finite() {
            return Err(format!(
                "grid_spacing must be finite and > 0, got {}",
                self.grid_spacing
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(format!(
                "damping must satisfy 0 < damping < 1, got {}",
                self.damping
            ));
        }
        let max_dt = self.grid_spacing / (self.wave_speed * 2.0_f64.sqrt());
        if self.time_step > max_dt {
            return Err(format!(
                "time_step {} exceeds CFL bound {max_dt} for wave_speed {} and grid_spacing {}",
                self.time_step, self.wave_speed, self.grid_spacing
            ));
        }

        let courant = self.wave_speed * self.time_step / self.grid_spacing;
        Ok(WaveIntegrator {
            wave_speed: self.wave_speed,
            time_step: self.time_step,
            grid_spacing: self.grid_spacing,
            damping: self.damping,
            coefficient: (courant * courant) as f32,
        })
    }
}
