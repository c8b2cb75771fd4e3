//! The emitted telemetry row.

use fleet_core::{EventKind, GeoPoint};

/// One telemetry sample.
///
/// Produced exactly once per resampled point, plus any synthetic Idle samples
/// inserted after it.  Immutable once emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetrySample {
    /// Simulated seconds since the start of the run; `i * interval` for the
    /// i-th sample.
    pub sim_time_s:        u64,
    pub position:          GeoPoint,
    /// Always `>= 0`.
    pub speed_kmph:        f64,
    /// Degrees clockwise from north, in `[0, 360)`.
    pub heading_deg:       f64,
    pub event:             Option<EventKind>,
    /// Running fuel total in litres; non-decreasing across a run.
    pub fuel_l_cumulative: f64,
}
