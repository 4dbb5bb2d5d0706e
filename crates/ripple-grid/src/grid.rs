//! The [`FieldGrid`]: a square two-buffer amplitude lattice.

use crate::error::GridError;
use crate::wrap::wrap_axis;
use ripple_core::GridPos;

/// A square lattice of scalar amplitude samples in two time levels.
///
/// Both buffers always hold `size * size` cells in row-major order
/// (`y * size + x`); the grid is never resized after creation.
/// Amplitudes are unconstrained reals but decay toward zero under the
/// integrator's damping.
///
/// Writes go through two controlled operations only: disturbance
/// injection ([`inject_span`](Self::inject_span)) and buffer retirement
/// ([`advance`](Self::advance)). Everything else is read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldGrid {
    size: u32,
    current: Vec<f32>,
    previous: Vec<f32>,
}

impl FieldGrid {
    /// Maximum grid size: coordinates use `i32`, so the axis must fit.
    pub const MAX_SIZE: u32 = i32::MAX as u32;

    /// Create an all-zero `size`-by-`size` grid.
    ///
    /// Returns [`GridError::EmptyGrid`] for size 0 and
    /// [`GridError::DimensionTooLarge`] beyond [`Self::MAX_SIZE`].
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        let cells = size as usize * size as usize;
        Ok(Self {
            size,
            current: vec![0.0; cells],
            previous: vec![0.0; cells],
        })
    }

    /// Grid size on both axes.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total cell count (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// The current time level, row-major.
    pub fn current(&self) -> &[f32] {
        &self.current
    }

    /// The previous time level, row-major.
    pub fn previous(&self) -> &[f32] {
        &self.previous
    }

    /// Bounds-checked amplitude sample from the current buffer.
    ///
    /// Direct indexing does not wrap; out-of-range cells yield `None`.
    pub fn amplitude(&self, pos: GridPos) -> Option<f32> {
        if pos.in_bounds(self.size) {
            Some(self.current[self.flat(pos.x, pos.y)])
        } else {
            None
        }
    }

    /// Current amplitude at `(x, y)` with periodic wrap on both axes.
    ///
    /// Used for stencil and gradient neighbour lookups, where indices
    /// off one edge reappear on the opposite edge.
    pub fn wrapped(&self, x: i32, y: i32) -> f32 {
        let n = self.size as i32;
        self.current[self.flat(wrap_axis(x, n), wrap_axis(y, n))]
    }

    /// Force amplitude 1.0 across a horizontal run of current-buffer
    /// cells: columns `[x - span/2, x + span/2]` at row `y`, clipped to
    /// the grid.
    ///
    /// This is the only disturbance-injection write. The row must be in
    /// bounds; callers clamp emitter positions before injecting, so an
    /// out-of-range row is rejected rather than wrapped.
    pub fn inject_span(&mut self, pos: GridPos, span: u32) -> Result<(), GridError> {
        if !pos.in_bounds(self.size) {
            return Err(GridError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                size: self.size,
            });
        }
        let half = (span / 2) as i32;
        let n = self.size as i32;
        for dx in -half..=half {
            let x = pos.x + dx;
            if x >= 0 && x < n {
                let i = self.flat(x, pos.y);
                self.current[i] = 1.0;
            }
        }
        Ok(())
    }

    /// Retire the time levels: previous ← current, current ← `next`.
    ///
    /// Called once per frame by the integrator after computing the next
    /// time level, keeping the two-buffer invariant for the following
    /// step. Rejects buffers of the wrong shape.
    pub fn advance(&mut self, next: Vec<f32>) -> Result<(), GridError> {
        if next.len() != self.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: self.cell_count(),
                actual: next.len(),
            });
        }
        self.previous = std::mem::replace(&mut self.current, next);
        Ok(())
    }

    /// Sum of squared current amplitudes, for diagnostics and decay
    /// checks.
    pub fn energy(&self) -> f64 {
        self.current.iter().map(|&v| (v as f64) * (v as f64)).sum()
    }

    fn flat(&self, x: i32, y: i32) -> usize {
        y as usize * self.size as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_zero_size() {
        assert_eq!(FieldGrid::new(0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_starts_all_zero() {
        let grid = FieldGrid::new(4).unwrap();
        assert_eq!(grid.cell_count(), 16);
        assert!(grid.current().iter().all(|&v| v == 0.0));
        assert!(grid.previous().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn amplitude_bounds_checked() {
        let grid = FieldGrid::new(4).unwrap();
        assert_eq!(grid.amplitude(GridPos::new(3, 3)), Some(0.0));
        assert_eq!(grid.amplitude(GridPos::new(4, 0)), None);
        assert_eq!(grid.amplitude(GridPos::new(0, -1)), None);
    }

    #[test]
    fn wrapped_reaches_opposite_edge() {
        let mut grid = FieldGrid::new(4).unwrap();
        grid.inject_span(GridPos::new(0, 0), 1).unwrap();
        assert_eq!(grid.wrapped(-1, 0), 0.0);
        assert_eq!(grid.wrapped(4, 0), 1.0);
        assert_eq!(grid.wrapped(0, -4), 1.0);
    }

    #[test]
    fn inject_span_writes_symmetric_run() {
        let mut grid = FieldGrid::new(9).unwrap();
        grid.inject_span(GridPos::new(4, 2), 5).unwrap();
        let row: Vec<f32> = (0..9)
            .map(|x| grid.amplitude(GridPos::new(x, 2)).unwrap())
            .collect();
        assert_eq!(row, [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
        // Other rows untouched.
        assert_eq!(grid.amplitude(GridPos::new(4, 3)), Some(0.0));
    }

    #[test]
    fn inject_span_clips_at_edges() {
        let mut grid = FieldGrid::new(5).unwrap();
        grid.inject_span(GridPos::new(0, 0), 5).unwrap();
        let row: Vec<f32> = (0..5)
            .map(|x| grid.amplitude(GridPos::new(x, 0)).unwrap())
            .collect();
        // Columns -2 and -1 fall off the grid; no wraparound for the emitter.
        assert_eq!(row, [1.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn inject_span_rejects_out_of_range_row() {
        let mut grid = FieldGrid::new(5).unwrap();
        assert_eq!(
            grid.inject_span(GridPos::new(2, 5), 1),
            Err(GridError::OutOfBounds { x: 2, y: 5, size: 5 })
        );
    }

    #[test]
    fn advance_retires_buffers() {
        let mut grid = FieldGrid::new(2).unwrap();
        grid.inject_span(GridPos::new(0, 0), 1).unwrap();
        let next = vec![0.5, 0.0, 0.0, 0.0];
        grid.advance(next).unwrap();
        assert_eq!(grid.previous()[0], 1.0);
        assert_eq!(grid.current()[0], 0.5);
    }

    #[test]
    fn advance_rejects_wrong_shape() {
        let mut grid = FieldGrid::new(2).unwrap();
        assert_eq!(
            grid.advance(vec![0.0; 3]),
            Err(GridError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn energy_sums_squares() {
        let mut grid = FieldGrid::new(3).unwrap();
        grid.inject_span(GridPos::new(1, 1), 3).unwrap();
        assert!((grid.energy() - 3.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn wrapped_agrees_with_direct_in_bounds(
            x in 0i32..8,
            y in 0i32..8,
        ) {
            let mut grid = FieldGrid::new(8).unwrap();
            grid.inject_span(GridPos::new(3, 5), 3).unwrap();
            let direct = grid.amplitude(GridPos::new(x, y)).unwrap();
            prop_assert_eq!(grid.wrapped(x, y), direct);
        }

        #[test]
        fn injection_never_touches_other_rows(
            x in 0i32..8,
            y in 0i32..8,
            span in 1u32..8,
        ) {
            let mut grid = FieldGrid::new(8).unwrap();
            grid.inject_span(GridPos::new(x, y), span).unwrap();
            for row in 0..8i32 {
                if row == y {
                    continue;
                }
                for col in 0..8i32 {
                    prop_assert_eq!(grid.amplitude(GridPos::new(col, row)), Some(0.0));
                }
            }
        }
    }
}
