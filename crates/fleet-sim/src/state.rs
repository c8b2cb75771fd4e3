//! Mutable per-run simulation state.

use fleet_core::{SampleInterval, SimClock};

/// Speeds at or below this are "stopped": idle fuel burn, excluded from the
/// moving average.
pub const STOPPED_KMPH: f64 = 0.5;

/// Engine-on, vehicle-stopped fuel burn in litres per hour.
pub const IDLE_BURN_LPH: f64 = 0.8;

/// Everything that carries over from one point to the next.
///
/// Created once per run and threaded by `&mut` through the step functions in
/// [`engine`][crate::engine]; nothing else holds a copy.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Speed the vehicle is currently travelling at.  Drives the event biases
    /// and the drift target of the next point.
    pub current_speed_kmph: f64,

    /// Heading of the most recent point; reused by inserted Idle samples.
    pub last_heading_deg: f64,

    /// Running fuel total in litres.
    pub fuel_l: f64,

    /// Sum and count of moving (`> STOPPED_KMPH`) sample speeds.
    moving_speed_sum: f64,
    moving_samples:   u64,

    /// Simulated-seconds clock for the next emitted sample.
    pub clock: SimClock,
}

impl SimState {
    /// Fresh state at `sim_time_s = 0` with the given starting speed.
    pub fn new(interval: SampleInterval, initial_speed_kmph: f64) -> Self {
        Self {
            current_speed_kmph: initial_speed_kmph,
            last_heading_deg:   0.0,
            fuel_l:             0.0,
            moving_speed_sum:   0.0,
            moving_samples:     0,
            clock:              SimClock::new(interval),
        }
    }

    /// Mean speed over moving samples so far, or `0.65 · cap` before the
    /// first moving sample.
    pub fn moving_avg_speed(&self, cap_kmph: f64) -> f64 {
        if self.moving_samples == 0 {
            cap_kmph * 0.65
        } else {
            self.moving_speed_sum / self.moving_samples as f64
        }
    }

    /// Add `speed_kmph` to the moving average if the vehicle is moving.
    pub fn record_speed(&mut self, speed_kmph: f64) {
        if speed_kmph > STOPPED_KMPH {
            self.moving_speed_sum += speed_kmph;
            self.moving_samples += 1;
        }
    }

    /// Burn fuel at `rate_lph` for one sampling interval; returns the new
    /// cumulative total.
    pub fn burn_fuel(&mut self, rate_lph: f64) -> f64 {
        self.fuel_l += rate_lph * self.clock.interval().as_hours();
        self.fuel_l
    }

    /// Number of moving samples recorded so far.
    pub fn moving_samples(&self) -> u64 {
        self.moving_samples
    }
}
