//! `fleet-duty`: places simulated samples on the wall clock.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`calendar`] | `ScheduledSample`, `DutyCursor`, `schedule`, `drive_days` |
//! | [`window`]   | `schedule_single_window` (one window, no day split)       |
//! | [`start`]    | `parse_start_time`, `default_start_time`                  |
//! | [`error`]    | `DutyError`, `DutyResult<T>`                              |
//!
//! # Duty model (summary)
//!
//! Each drive day has a budget of `trunc(hours · 3600)` seconds.  Samples
//! are laid down one interval apart from the start time; once a day's budget
//! is spent the next sample opens a new day on the following calendar date
//! at the start time-of-day:
//!
//! ```text
//! day 1: 08:00 08:01 … 08:59 | day 2: 08:00 (next date) …
//! ```
//!
//! A day may overshoot its budget by at most one interval.

pub mod calendar;
pub mod error;
pub mod start;
pub mod window;


pub use calendar::{DutyCursor, ScheduledSample, drive_days, schedule};
pub use error::{DutyError, DutyResult};
pub use start::{DEFAULT_SHIFT_START_HOUR, default_start_time, parse_start_time, today_local};
pub use window::schedule_single_window;
