//! Wave integration and bearing estimation for the Ripple simulator.
//!
//! Two operators over a [`FieldGrid`](ripple_grid::FieldGrid):
//!
//! - [`WaveIntegrator`] — advances the field one time step with the
//!   explicit finite-difference discretization of the damped 2D wave
//!   equation (periodic boundary).
//! - [`BearingEstimator`] — decides each frame whether the observer's
//!   cell exhibits a disturbance and, if so, estimates and smooths the
//!   bearing the disturbance arrived from.
//!
//! Both are stateless and builder-constructed; mutable detection state
//! lives in the caller-owned [`BearingTracker`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod estimator;
pub mod integrator;

pub use estimator::{BearingEstimate, BearingEstimator, BearingTracker};
pub use integrator::WaveIntegrator;
