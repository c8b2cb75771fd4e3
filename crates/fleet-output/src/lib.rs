//! `fleet-output`: telemetry writers and trip metadata.
//!
//! Backends, selected by Cargo feature:
//!
//! | Feature   | Backend          | Files created                                 |
//! |-----------|------------------|-----------------------------------------------|
//! | *(none)*  | CSV              | one combined `<name>.csv`                     |
//! | *(none)*  | Per-day CSV      | `<stem>-day1.csv`, `<stem>-day2.csv`, …       |
//! | `sqlite`  | SQLite           | `telemetry` table in one database file        |
//!
//! All backends implement [`OutputWriter`].  [`TripMeta`] is the JSON
//! summary reported next to the written files.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_output::{CsvWriter, OutputWriter, TelemetryRow};
//!
//! let mut w = CsvWriter::new(&out_dir.join("trip.csv"))?;
//! w.write_rows(&rows)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod meta;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::{CsvWriter, PerDayCsvWriter};
pub use error::{OutputError, OutputResult};
pub use meta::{TripMeta, default_file_name, round_to};
pub use row::{HEADER, TelemetryRow, TIMESTAMP_FORMAT};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
