//! `fleet-trip`: the end-to-end trip pipeline.
//!
//! # Pipeline
//!
//! ```text
//! geometry ──resample──▶ points ──simulate──▶ samples ──schedule──▶ rows
//!                                                         │
//!                              split_across_days = false ─┴▶ single window
//! ```
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`config`]  | `TripConfig` (serde + TOML)                           |
//! | [`builder`] | `TripBuilder`                                         |
//! | [`trip`]    | `Trip`, `TripOutput`, `TripSummary`                   |
//! | [`write`]   | `write_trip`, `WrittenTrip`                           |
//! | [`fleet`]   | `run_fleet`: many trips, one batch seed              |
//! | [`error`]   | `TripError`, `TripResult<T>`                          |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_fleet` runs trips on Rayon's thread pool.         |
//! | `sqlite`   | `write_trip_sqlite` via `fleet-output`'s SQLite backend. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let trip = TripBuilder::new(TripConfig::default(), geometry).build()?;
//! let out = trip.run()?;
//! let written = write_trip(&out, &out_dir, "trip.csv", false)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod fleet;
pub mod trip;
pub mod write;


pub use builder::TripBuilder;
pub use config::TripConfig;
pub use error::{TripError, TripResult};
pub use fleet::run_fleet;
pub use trip::{Trip, TripOutput, TripSummary};
pub use write::{WrittenTrip, write_trip};
#[cfg(feature = "sqlite")]
pub use write::write_trip_sqlite;
