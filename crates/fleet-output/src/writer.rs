//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TelemetryRow};

/// Trait implemented by the CSV, per-day CSV, and SQLite writers.
pub trait OutputWriter {
    /// Append a batch of rows, in order.
    fn write_rows(&mut self, rows: &[TelemetryRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.  Writing after `finish`
    /// returns [`OutputError::Finished`](crate::OutputError::Finished).
    fn finish(&mut self) -> OutputResult<()>;
}
