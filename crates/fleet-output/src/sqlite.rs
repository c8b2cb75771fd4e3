//! SQLite output backend (feature `sqlite`).
//!
//! Writes rows to a `telemetry` table in a single database file.  Numbers are
//! stored at full precision; `timestamp` uses the CSV text format so the two
//! backends sort and compare identically.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TIMESTAMP_FORMAT, TelemetryRow};

/// Writes telemetry rows to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS telemetry (
                 timestamp         TEXT    NOT NULL,
                 vehicle_id        TEXT    NOT NULL,
                 trip_id           TEXT    NOT NULL,
                 drive_day         INTEGER NOT NULL,
                 lat               REAL    NOT NULL,
                 lon               REAL    NOT NULL,
                 speed_kmph        REAL    NOT NULL,
                 heading_deg       REAL    NOT NULL,
                 event             TEXT,
                 fuel_l_cumulative REAL    NOT NULL,
                 ts_s              INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_rows(&mut self, rows: &[TelemetryRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO telemetry \
                 (timestamp, vehicle_id, trip_id, drive_day, lat, lon, speed_kmph, \
                  heading_deg, event, fuel_l_cumulative, ts_s) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                    row.vehicle_id.as_str(),
                    row.trip_id.as_str(),
                    row.drive_day,
                    row.lat,
                    row.lon,
                    row.speed_kmph,
                    row.heading_deg,
                    row.event.map(|e| e.as_str()),
                    row.fuel_l_cumulative,
                    row.ts_s as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
