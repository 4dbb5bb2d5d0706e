//! Grid positions with clamped single-cell movement.

use crate::command::Direction;
use std::fmt;

/// A cell position on the square field grid.
///
/// `x` is the column and `y` the row; `y` grows downward, matching the
/// flat buffer layout `y * size + x`. Positions held by the interaction
/// layer (emitter, observer) are always within `[0, size - 1]` on both
/// axes; movement that would leave the grid is not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridPos {
    /// Create a position from column and row indices.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this position lies within a `size`-by-`size` grid.
    pub fn in_bounds(self, size: u32) -> bool {
        let n = size as i32;
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }

    /// Translate one cell in `direction`, staying put if the target
    /// would leave the grid.
    ///
    /// Boundary moves are a no-op, not an error: commanding north from
    /// row 0 leaves the position unchanged.
    pub fn step_within(self, direction: Direction, size: u32) -> Self {
        let (dx, dy) = direction.offset_2d();
        let target = Self::new(self.x + dx, self.y + dy);
        if target.in_bounds(size) {
            target
        } else {
            self
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
