//! Per-point driving behaviour: base speed, event selection, speed
//! resolution, and fuel rate.
//!
//! Everything here is a plain function of its arguments plus, where noted,
//! draws from the run's [`TripRng`].  The engine calls them in a fixed order
//! so a seeded run is reproducible.

use fleet_core::{EventKind, ProfileParams, TripRng};

use crate::state::{IDLE_BURN_LPH, STOPPED_KMPH};

/// Below this current speed the vehicle is treated as near-stopped.
const SLOW_KMPH: f64 = 8.0;

/// Base fuel burn while moving, L/h.
const FUEL_BASE_LPH: f64 = 0.6;
/// Additional burn per km/h, L/h.
const FUEL_PER_KMPH: f64 = 0.04;
/// Extra burn on a harsh-acceleration sample, L/h.
const FUEL_HARSH_ACCEL_LPH: f64 = 0.8;

// ── Base speed ────────────────────────────────────────────────────────────────

/// Cruise target for this point: uniform in `[0.6·cap, 0.85·cap]` plus
/// uniform noise in `[-4, 4]`, clamped to `[0, cap + 5]`.
///
/// Two draws, cruise first.
pub fn base_speed(cap_kmph: f64, rng: &mut TripRng) -> f64 {
    let cruise = rng.uniform(cap_kmph * 0.6, cap_kmph * 0.85);
    let noise = rng.uniform(-4.0, 4.0);
    (cruise + noise).clamp(0.0, cap_kmph + 5.0)
}

// ── Event selection ───────────────────────────────────────────────────────────

/// State-adjusted event probabilities for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventOdds {
    pub accel_p:     f64,
    pub brake_p:     f64,
    pub overspeed_p: f64,
}

/// Bias the profile's base probabilities by the vehicle's current state.
///
/// A near-stopped vehicle leans towards accelerating, a fast one towards
/// braking, and a cruise target already above the cap makes overspeed at
/// least 12 % likely.
pub fn event_odds(
    params:        &ProfileParams,
    current_speed: f64,
    base_speed:    f64,
) -> EventOdds {
    let cap = params.speed_cap_kmph;
    let (accel_adj, brake_adj) = if current_speed < SLOW_KMPH {
        (1.4, 0.2)
    } else if current_speed > cap * 0.9 {
        (0.6, 1.2)
    } else {
        (1.0, 1.0)
    };

    let overspeed_p = if base_speed > cap {
        params.overspeed_p.max(0.12)
    } else {
        params.overspeed_p
    };

    EventOdds {
        accel_p: params.harsh_accel_p * accel_adj,
        brake_p: params.harsh_brake_p * brake_adj,
        overspeed_p,
    }
}

/// Map one uniform draw `r ∈ [0, 1)` onto consecutive intervals
/// `[0, a)` → accel, `[a, a+b)` → brake, `[a+b, a+b+o)` → overspeed,
/// remainder → none.
pub fn pick_event(odds: EventOdds, r: f64) -> Option<EventKind> {
    let brake_end = odds.accel_p + odds.brake_p;
    if r < odds.accel_p {
        Some(EventKind::HarshAcceleration)
    } else if r < brake_end {
        Some(EventKind::HarshBraking)
    } else if r < brake_end + odds.overspeed_p {
        Some(EventKind::Overspeed)
    } else {
        None
    }
}

// ── Speed resolution ──────────────────────────────────────────────────────────

/// Resolve this point's speed given the selected event.
///
/// Returns the speed and the event to record.  The event differs from the
/// input only when a no-event drift still ends above
/// `max(moving_avg + 3, cap + 2)`: that sample is tagged Overspeed after the
/// fact, keeping its drift speed.
///
/// Draws from `rng` only in the accel (1), overspeed (2), and drift (1)
/// branches.
pub fn resolve_speed(
    event:         Option<EventKind>,
    base_speed:    f64,
    current_speed: f64,
    moving_avg:    f64,
    cap_kmph:      f64,
    rng:           &mut TripRng,
) -> (f64, Option<EventKind>) {
    match event {
        Some(EventKind::HarshBraking) => (0.0, event),
        Some(EventKind::HarshAcceleration) => {
            let boosted = current_speed + rng.uniform(10.0, 20.0);
            ((cap_kmph + 12.0).min(base_speed.max(boosted)), event)
        }
        Some(EventKind::Overspeed) => {
            let above_avg = moving_avg + rng.uniform(5.0, 12.0);
            let above_cap = cap_kmph + rng.uniform(4.0, 12.0);
            (above_avg.max(above_cap).min(cap_kmph + 25.0), event)
        }
        // Idle is only ever inserted after a point, never selected for one.
        Some(EventKind::Idle) | None => {
            let pull = rng.uniform(0.4, 0.7);
            let speed = (current_speed + (base_speed - current_speed) * pull)
                .clamp(0.0, cap_kmph + 8.0);
            if speed > (moving_avg + 3.0).max(cap_kmph + 2.0) {
                (speed, Some(EventKind::Overspeed))
            } else {
                (speed, None)
            }
        }
    }
}

// ── Fuel ──────────────────────────────────────────────────────────────────────

/// Instantaneous fuel burn in L/h for a sample at `speed_kmph`.
pub fn fuel_rate_lph(speed_kmph: f64, event: Option<EventKind>) -> f64 {
    if speed_kmph <= STOPPED_KMPH {
        return IDLE_BURN_LPH;
    }
    let harsh = if event == Some(EventKind::HarshAcceleration) {
        FUEL_HARSH_ACCEL_LPH
    } else {
        0.0
    };
    FUEL_BASE_LPH + FUEL_PER_KMPH * speed_kmph + harsh
}
