//! Trip metadata reported alongside the written files.

use fleet_core::{EventCounts, TripId};
use serde::{Deserialize, Serialize};

/// Round `x` to `decimals` places, half away from zero.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

/// Summary of one generated trip, serialized as JSON next to the output path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripMeta {
    /// Length of the input route, km (3 decimals).
    pub distance_km:        f64,
    /// Mean speed over all simulated samples, km/h (1 decimal).
    pub sim_avg_speed_kmph: f64,
    /// Total simulated fuel, litres (2 decimals).
    pub fuel_used_l:        f64,
    pub events:             EventCounts,
    /// Rows written to the combined output.
    pub rows:               usize,
    /// Drive days spanned by those rows.
    pub days:               u32,
    #[serde(default)]
    pub per_day_files:      Vec<String>,
}

impl TripMeta {
    /// Build from full-precision figures, rounding for presentation.
    pub fn new(
        distance_km:    f64,
        avg_speed_kmph: f64,
        fuel_used_l:    f64,
        events:         EventCounts,
        rows:           usize,
        days:           u32,
    ) -> Self {
        Self {
            distance_km:        round_to(distance_km, 3),
            sim_avg_speed_kmph: round_to(avg_speed_kmph, 1),
            fuel_used_l:        round_to(fuel_used_l, 2),
            events,
            rows,
            days,
            per_day_files:      Vec::new(),
        }
    }

    pub fn with_per_day_files(mut self, files: Vec<String>) -> Self {
        self.per_day_files = files;
        self
    }
}

/// Default combined-CSV name: `<trip>-<start[..12]>-<end[..12]>.csv`, with
/// spaces replaced by `_`.
///
/// Labels are cut at 12 characters, not bytes.
pub fn default_file_name(trip_id: &TripId, start_label: &str, end_label: &str) -> String {
    fn part(label: &str) -> String {
        label.chars().take(12).map(|c| if c == ' ' { '_' } else { c }).collect()
    }
    format!("{}-{}-{}.csv", trip_id, part(start_label), part(end_label))
}
