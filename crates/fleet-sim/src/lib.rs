//! `fleet-sim`: turns a resampled route into a telemetry time series.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`sample`]   | `TelemetrySample`: one emitted row                           |
//! | [`state`]    | `SimState`: speed, fuel, and moving-average accumulators     |
//! | [`behavior`] | Pure step functions: base speed, event selection, speed resolution, fuel rate |
//! | [`engine`]   | `simulate`, `simulate_with_rng`, `SimulationRun`              |
//! | [`summary`]  | `SimulationSummary`                                           |
//!
//! # Per-point step
//!
//! ```text
//! for each resampled point:
//!   ① heading    : bearing from the previous point
//!   ② base speed : uniform cruise target + noise, clamped
//!   ③ event      : state-biased draw: accel / brake / overspeed / none
//!   ④ speed      : resolved from the event; late Overspeed retag
//!   ⑤ fuel       : idle burn or speed-linear rate × interval
//!   ⑥ moving avg : moving samples only
//!   ⑦ emit       : then an optional block of Idle samples
//! ```
//!
//! All run state lives in one [`SimState`] and one [`TripRng`] owned by the
//! run, so independent trips can be simulated concurrently.
//!
//! [`TripRng`]: fleet_core::TripRng

pub mod behavior;
pub mod engine;
pub mod sample;
pub mod state;
pub mod summary;


pub use engine::{SimulationRun, simulate, simulate_with_rng};
pub use sample::TelemetrySample;
pub use state::SimState;
pub use summary::SimulationSummary;
