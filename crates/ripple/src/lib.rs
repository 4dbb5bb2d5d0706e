//! Ripple: a real-time 2D wave-field simulator with arrival-bearing
//! estimation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Ripple sub-crates. For most users, adding `ripple` as a
//! single dependency is sufficient.
//!
//! A disturbance injected at the emitter propagates across a damped
//! periodic lattice; an observer samples its own cell each frame and,
//! once the wavefront arrives, infers the bearing the wave came from
//! using the local amplitude gradient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//! use ripple::types::GridPos;
//!
//! // A 32×32 world with the emitter east of the observer. The field
//! // starts at rest until an inject command arrives.
//! let config = WorldConfig {
//!     grid_size: 32,
//!     emitter: GridPos::new(20, 16),
//!     observer: GridPos::new(12, 16),
//!     ..Default::default()
//! };
//! let mut world = RippleWorld::new(config).unwrap();
//!
//! // Inject on the first frame, then step until the wavefront has had
//! // time to reach the observer.
//! let frame = world.step([Command::Inject]).unwrap();
//! assert!(frame.metrics.energy > 0.0);
//! for _ in 0..60 {
//!     let frame = world.step(std::iter::empty::<Command>()).unwrap();
//!     assert_eq!(frame.amplitude.len(), 32 * 32);
//! }
//!
//! let first = world.tracker().first_detection().unwrap();
//! assert!(first.0 > 0, "arrival takes time");
//! let overlay = world.overlay().unwrap();
//! // The wave came from the east, so the bearing line points east.
//! assert!(overlay.end.0 > overlay.start.0);
//! ```
//!
//! For interactive use, wrap the world in an
//! [`engine::FrameLoop`] and feed it key events through a
//! [`engine::CommandSender`] from another thread.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | IDs, positions, directions, commands |
//! | [`grid`] | `ripple-grid` | The two-buffer field lattice and wrap helpers |
//! | [`sim`] | `ripple-sim` | Wave integrator and bearing estimator |
//! | [`engine`] | `ripple-engine` | World, config, frame loop, key bindings |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: IDs, positions, directions, commands (`ripple-core`).
pub use ripple_core as types;

/// The field lattice and periodic-wrap helpers (`ripple-grid`).
///
/// Most users only need [`grid::FieldGrid`] from this module, also
/// available in the [`prelude`].
pub use ripple_grid as grid;

/// Wave integration and bearing estimation (`ripple-sim`).
///
/// [`sim::WaveIntegrator`] advances the field; [`sim::BearingEstimator`]
/// watches the observer's cell and maintains the smoothed arrival
/// bearing in a caller-owned [`sim::BearingTracker`].
pub use ripple_sim as sim;

/// World state, configuration, and the frame loop (`ripple-engine`).
///
/// [`engine::RippleWorld`] owns the simulation; [`engine::FrameLoop`]
/// drives it at a fixed cadence behind [`engine::RenderSink`] and
/// [`engine::CommandSender`].
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{Command, Direction, GridPos, TickId};

    // Field
    pub use ripple_grid::{FieldGrid, GridError};

    // Simulation operators
    pub use ripple_sim::{BearingEstimate, BearingEstimator, BearingTracker, WaveIntegrator};

    // World and frame loop
    pub use ripple_engine::{
        BearingOverlay, CommandSender, ConfigError, Frame, FrameLoop, FrameMetrics, Key,
        KeyBindings, RenderSink, RippleWorld, WorldConfig,
    };
}
