//! Per-frame diagnostics.

use ripple_core::TickId;

/// Measurements collected during a single
/// [`RippleWorld::step()`](crate::RippleWorld::step).
///
/// All durations are wall-clock microseconds. A fresh world reports
/// all-zero metrics until its first step.
#[derive(Clone, Debug, Default)]
pub struct FrameMetrics {
    /// Total frame time, including command dispatch.
    pub total_us: u64,
    /// Time spent applying this frame's commands.
    pub command_processing_us: u64,
    /// Time spent sampling the observer and updating the bearing.
    pub estimate_us: u64,
    /// Time spent computing and retiring the next field buffer.
    pub integrate_us: u64,
    /// Commands applied this frame.
    pub commands_applied: u32,
    /// Field energy (sum of squared amplitudes) after integration.
    pub energy: f64,
    /// Whether the observer detected a disturbance this frame.
    pub detected: bool,
    /// Tick of the first detection, once one has occurred.
    pub first_detection: Option<TickId>,
    /// Current smoothed bearing in degrees, if ever detected.
    pub bearing_degrees: Option<f64>,
}
