//! The closed command set dispatched by the interaction layer.
//!
//! Raw key events are decoded into [`Command`] variants at the engine
//! boundary, keeping the integration and estimation code free of
//! input-handling concerns. Unknown keys never reach this type.

/// Cardinal direction for single-cell movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// One cell up the grid (row - 1).
    North = 0,
    /// One cell down the grid (row + 1).
    South = 1,
    /// One cell right (column + 1).
    East = 2,
    /// One cell left (column - 1).
    West = 3,
}

impl Direction {
    /// Returns the `(col_offset, row_offset)` for this direction.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// A discrete command applied by the simulation once per receipt.
///
/// Multiple commands received in the same frame are all applied, in
/// arrival order, before the field is integrated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Translate the observer one cell, clamped at the grid boundary.
    MoveObserver(Direction),
    /// Translate the emitter one cell, clamped at the grid boundary,
    /// then inject a fresh disturbance at the resulting position.
    ///
    /// Movement and re-emission are coupled: the source radiates
    /// continuously while being relocated, and a boundary-blocked move
    /// still re-emits in place.
    MoveEmitter(Direction),
    /// Inject a disturbance across the emitter's span without moving.
    Inject,
    /// Terminate the run.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_cardinal() {
        assert_eq!(Direction::North.offset_2d(), (0, -1));
        assert_eq!(Direction::South.offset_2d(), (0, 1));
        assert_eq!(Direction::East.offset_2d(), (1, 0));
        assert_eq!(Direction::West.offset_2d(), (-1, 0));
    }

    #[test]
    fn opposite_offsets_cancel() {
        let (nx, ny) = Direction::North.offset_2d();
        let (sx, sy) = Direction::South.offset_2d();
        assert_eq!((nx + sx, ny + sy), (0, 0));
        let (ex, ey) = Direction::East.offset_2d();
        let (wx, wy) = Direction::West.offset_2d();
        assert_eq!((ex + wx, ey + wy), (0, 0));
    }
}
