//! The simulation run: walks the resampled points and emits samples.

use fleet_core::{EventCounts, EventKind, GeoPoint, ProfileParams, SampleInterval, SpeedProfile, TripRng};
use tracing::{debug, trace};

use crate::behavior::{base_speed, event_odds, fuel_rate_lph, pick_event, resolve_speed};
use crate::{SimState, SimulationSummary, TelemetrySample};

/// Idle samples appended after every harsh braking (inclusive range).
const BRAKE_IDLE_RANGE: (u32, u32) = (1, 3);

/// Samples and summary of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub samples: Vec<TelemetrySample>,
    pub summary: SimulationSummary,
}

impl SimulationRun {
    /// The "nothing to simulate" outcome.
    pub fn empty() -> Self {
        Self { samples: Vec::new(), summary: SimulationSummary::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Simulate a trip over `points` (already resampled).
///
/// `seed = Some(s)` makes the run reproducible; `None` draws from OS entropy.
/// An empty `points` slice returns [`SimulationRun::empty`].
pub fn simulate(
    points:   &[GeoPoint],
    interval: SampleInterval,
    profile:  SpeedProfile,
    seed:     Option<u64>,
) -> SimulationRun {
    let mut rng = TripRng::new(seed);
    debug!(points = points.len(), %interval, %profile, ?seed, "starting simulation");
    simulate_with_rng(points, interval, profile, &mut rng)
}

/// Like [`simulate`] but draws from a caller-owned generator.
///
/// The generator must not be shared with another concurrently running trip.
pub fn simulate_with_rng(
    points:   &[GeoPoint],
    interval: SampleInterval,
    profile:  SpeedProfile,
    rng:      &mut TripRng,
) -> SimulationRun {
    if points.is_empty() {
        debug!("empty geometry; nothing to simulate");
        return SimulationRun::empty();
    }

    let params = profile.params();
    let cap = params.speed_cap_kmph;
    let initial = rng.uniform(cap * 0.5, cap * 0.7);

    let mut run = Run {
        params,
        rng,
        state:   SimState::new(interval, initial),
        samples: Vec::with_capacity(points.len() + points.len() / 4),
        events:  EventCounts::default(),
    };

    for (idx, &pt) in points.iter().enumerate() {
        let heading = heading_at(points, idx);
        run.step(pt, heading);
    }

    let summary = SimulationSummary::from_samples(&run.samples, run.events);
    debug!(
        samples = run.samples.len(),
        fuel_l = summary.fuel_used_l,
        avg_speed_kmph = summary.avg_speed_kmph,
        end = %run.state.clock,
        "simulation complete"
    );
    SimulationRun { samples: run.samples, summary }
}

/// Bearing into point `idx`; point 0 uses the bearing towards point 1.
fn heading_at(points: &[GeoPoint], idx: usize) -> f64 {
    match idx {
        0 if points.len() > 1 => points[0].bearing_deg(points[1]),
        0 => 0.0,
        i => points[i - 1].bearing_deg(points[i]),
    }
}

// ── Run ───────────────────────────────────────────────────────────────────────

/// Borrowed working set for one run.
struct Run<'r> {
    params:  &'static ProfileParams,
    rng:     &'r mut TripRng,
    state:   SimState,
    samples: Vec<TelemetrySample>,
    events:  EventCounts,
}

impl Run<'_> {
    /// Process one resampled point: resolve and emit its sample, then any
    /// idle block that follows it.
    fn step(&mut self, position: GeoPoint, heading: f64) {
        let cap = self.params.speed_cap_kmph;
        self.state.last_heading_deg = heading;

        let base = base_speed(cap, self.rng);
        let odds = event_odds(self.params, self.state.current_speed_kmph, base);
        let selected = pick_event(odds, self.rng.unit());
        let moving_avg = self.state.moving_avg_speed(cap);

        let (speed, event) = resolve_speed(
            selected,
            base,
            self.state.current_speed_kmph,
            moving_avg,
            cap,
            self.rng,
        );
        self.state.current_speed_kmph = speed;
        if event != selected {
            trace!(speed, moving_avg, "drift above threshold; tagged overspeed");
        }

        self.emit(position, heading, speed, event);

        let idle_steps = if event == Some(EventKind::HarshBraking) {
            Some(self.rng.int_inclusive(BRAKE_IDLE_RANGE.0, BRAKE_IDLE_RANGE.1))
        } else if self.rng.unit() < self.params.idle_probability {
            let (lo, hi) = self.params.idle_duration_range;
            Some(self.rng.int_inclusive(lo, hi))
        } else {
            None
        };

        if let Some(steps) = idle_steps {
            let heading = self.state.last_heading_deg;
            for _ in 0..steps {
                self.emit(position, heading, 0.0, Some(EventKind::Idle));
            }
            self.state.current_speed_kmph = 0.0;
        }
    }

    /// Append one sample at the current clock and advance it.
    fn emit(&mut self, position: GeoPoint, heading: f64, speed: f64, event: Option<EventKind>) {
        let fuel = self.state.burn_fuel(fuel_rate_lph(speed, event));
        if let Some(kind) = event {
            self.events.record(kind);
        }
        self.state.record_speed(speed);

        self.samples.push(TelemetrySample {
            sim_time_s:        self.state.clock.now(),
            position,
            speed_kmph:        speed,
            heading_deg:       heading,
            event,
            fuel_l_cumulative: fuel,
        });
        self.state.clock.advance();
    }
}
