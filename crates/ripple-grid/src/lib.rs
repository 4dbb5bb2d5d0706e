//! Two-buffer amplitude lattice for the Ripple wave simulator.
//!
//! [`FieldGrid`] owns the discretized scalar field: a square `N×N`
//! lattice held in two time levels ("current" and "previous") because
//! the integration scheme is second-order in time. Neighbour lookups
//! for the stencil wrap modulo `N` (periodic boundary); direct indexing
//! for emitter and observer access is bounds-checked instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod wrap;

pub use error::GridError;
pub use grid::FieldGrid;
pub use wrap::{wrap_axis, wrapped_neighbours_flat};
