//! Post-hoc aggregate over one run's samples.

use fleet_core::EventCounts;

use crate::TelemetrySample;

/// Read-only aggregate computed once per run.
///
/// The default value is the zero summary returned for empty geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSummary {
    /// Mean speed over ALL samples, stopped and Idle ones included.
    pub avg_speed_kmph: f64,
    /// Final cumulative fuel.
    pub fuel_used_l:    f64,
    pub events:         EventCounts,
}

impl SimulationSummary {
    /// Summarise `samples` with the event tallies gathered while emitting.
    pub fn from_samples(samples: &[TelemetrySample], events: EventCounts) -> Self {
        let Some(last) = samples.last() else {
            return Self::default();
        };
        let total: f64 = samples.iter().map(|s| s.speed_kmph).sum();
        Self {
            avg_speed_kmph: total / samples.len() as f64,
            fuel_used_l:    last.fuel_l_cumulative,
            events,
        }
    }
}
