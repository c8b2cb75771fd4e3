//! The `Trip` struct and its pipeline run.

use chrono::NaiveDateTime;
use fleet_core::{EventCounts, GeoPoint, TripRng};
use fleet_duty::{drive_days, schedule, schedule_single_window};
use fleet_output::{TelemetryRow, TripMeta};
use fleet_route::{path_length_m, resample};
use fleet_sim::simulate_with_rng;
use tracing::{info, warn};

use crate::{TripConfig, TripResult};

// ── TripSummary ───────────────────────────────────────────────────────────────

/// Simulation aggregate plus what scheduling produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TripSummary {
    /// Mean speed over all simulated samples (before any window truncation).
    pub avg_speed_kmph: f64,
    /// Total simulated fuel.
    pub fuel_used_l:    f64,
    pub events:         EventCounts,
    /// Scheduled rows; fewer than `samples` only in single-window mode.
    pub rows:           usize,
    pub samples:        usize,
    pub days:           u32,
    /// Input route length.
    pub distance_km:    f64,
    /// Points after resampling.
    pub points:         usize,
}

impl TripSummary {
    /// Presentation form for JSON output.
    pub fn to_meta(&self) -> TripMeta {
        TripMeta::new(
            self.distance_km,
            self.avg_speed_kmph,
            self.fuel_used_l,
            self.events,
            self.rows,
            self.days,
        )
    }
}

/// Rows and summary of one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripOutput {
    pub rows:    Vec<TelemetryRow>,
    pub summary: TripSummary,
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// A configured trip, ready to run.
///
/// Create via [`TripBuilder`][crate::TripBuilder].  Running does not consume
/// or mutate the trip, so the same trip can be re-run (with the same seed it
/// reproduces its output exactly).
#[derive(Debug, Clone)]
pub struct Trip {
    pub config:   TripConfig,
    pub geometry: Vec<GeoPoint>,
    /// Resolved local start time.
    pub start:    NaiveDateTime,
}

impl Trip {
    pub(crate) fn new(config: TripConfig, geometry: Vec<GeoPoint>, start: NaiveDateTime) -> Self {
        Self { config, geometry, start }
    }

    /// Run with a generator seeded from `config.seed`.
    pub fn run(&self) -> TripResult<TripOutput> {
        let mut rng = TripRng::new(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Resample → simulate → schedule, drawing from `rng`.
    pub fn run_with_rng(&self, rng: &mut TripRng) -> TripResult<TripOutput> {
        let cfg = &self.config;

        if self.geometry.len() < 2 {
            warn!(trip = %cfg.trip_id, points = self.geometry.len(), "route has fewer than two points");
        }
        let points = resample(&self.geometry, cfg.step_m);
        let run = simulate_with_rng(&points, cfg.interval, cfg.speed_profile, rng);

        let scheduled = if cfg.split_across_days {
            schedule(&run.samples, self.start, cfg.driver_hours_per_day, cfg.interval)?
        } else {
            schedule_single_window(&run.samples, self.start, cfg.driver_hours_per_day)?
        };

        let rows: Vec<TelemetryRow> = scheduled
            .iter()
            .map(|s| TelemetryRow::from_scheduled(s, &cfg.vehicle_id, &cfg.trip_id))
            .collect();

        let summary = TripSummary {
            avg_speed_kmph: run.summary.avg_speed_kmph,
            fuel_used_l:    run.summary.fuel_used_l,
            events:         run.summary.events,
            rows:           rows.len(),
            samples:        run.samples.len(),
            days:           drive_days(&scheduled),
            distance_km:    path_length_m(&self.geometry) / 1_000.0,
            points:         points.len(),
        };

        info!(
            trip = %cfg.trip_id,
            vehicle = %cfg.vehicle_id,
            profile = %cfg.speed_profile,
            rows = summary.rows,
            days = summary.days,
            distance_km = summary.distance_km,
            "trip simulated"
        );
        Ok(TripOutput { rows, summary })
    }
}
