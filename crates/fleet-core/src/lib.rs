//! `fleet-core`: foundational types for the `fleet_twin` telemetry synthesizer.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `TripId`                                 |
//! | [`geo`]         | `GeoPoint`, haversine distance, forward bearing       |
//! | [`time`]        | `SampleInterval`, `SimClock`                          |
//! | [`rng`]         | `TripRng` (one per simulation run)                    |
//! | [`profile`]     | `SpeedProfile` enum, `ProfileParams` lookup data      |
//! | [`event`]       | `EventKind`, `EventCounts`                            |
//! | [`error`]       | `FleetError`, `FleetResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod event;
pub mod geo;
pub mod ids;
pub mod profile;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FleetError, FleetResult};
pub use event::{EventCounts, EventKind};
pub use geo::GeoPoint;
pub use ids::{TripId, VehicleId};
pub use profile::{ProfileParams, SpeedProfile};
pub use rng::TripRng;
pub use time::{SampleInterval, SimClock};
