//! Error types for grid construction and access.

use std::error::Error;
use std::fmt;

/// Errors from [`FieldGrid`](crate::FieldGrid) construction and access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Grid size is zero.
    EmptyGrid,
    /// Grid size exceeds the addressable maximum.
    DimensionTooLarge {
        /// The rejected size.
        value: u32,
        /// The maximum supported size.
        max: u32,
    },
    /// A directly-indexed cell lies outside the lattice.
    OutOfBounds {
        /// Column of the rejected access.
        x: i32,
        /// Row of the rejected access.
        y: i32,
        /// The grid size on both axes.
        size: u32,
    },
    /// A replacement buffer does not match the lattice shape.
    LengthMismatch {
        /// Cell count the grid requires.
        expected: usize,
        /// Length of the rejected buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum {max}")
            }
            Self::OutOfBounds { x, y, size } => {
                write!(f, "cell ({x}, {y}) outside {size}x{size} grid")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer has {actual} cells, grid requires {expected}")
            }
        }
    }
}

impl Error for GridError {}
