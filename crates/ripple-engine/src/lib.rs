//! Simulation world, command dispatch, and frame loop for Ripple.
//!
//! [`RippleWorld`] owns the complete simulation state — field grid,
//! integrator, estimator, emitter, observer, and detection bookkeeping —
//! behind an explicit structure rather than process-wide globals. Each
//! [`step()`](RippleWorld::step) consumes the frame's pending commands,
//! samples the observer on the pre-step field, integrates one time
//! step, and yields a borrowed [`Frame`] for the external render sink.
//!
//! [`FrameLoop`] drives the world at a fixed cadence over crossbeam
//! channels; the keystroke source and the display surface stay outside
//! the crate behind [`CommandSender`] and [`RenderSink`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod frame_loop;
pub mod input;
pub mod metrics;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use frame_loop::{CommandSender, FrameLoop, KeyOutcome, RenderSink, SubmitError};
pub use input::{Binding, Key, KeyBindings};
pub use metrics::FrameMetrics;
pub use world::{BearingOverlay, Emitter, Frame, RippleWorld};
