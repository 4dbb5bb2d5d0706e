//! Core types for the Ripple wave simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Ripple workspace:
//! tick identifiers, grid positions, and the closed command set the
//! interaction layer dispatches on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod id;
pub mod pos;

pub use command::{Command, Direction};
pub use id::TickId;
pub use pos::GridPos;
