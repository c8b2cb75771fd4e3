//! CSV output backends.
//!
//! - [`CsvWriter`]: every row in one file.
//! - [`PerDayCsvWriter`]: one file per drive day, `<stem>-day<N>.csv`.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{HEADER, OutputError, OutputResult, TelemetryRow};

fn open_with_header(path: &Path) -> OutputResult<Writer<File>> {
    let mut w = Writer::from_path(path)?;
    w.write_record(HEADER)?;
    Ok(w)
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

/// Writes all rows to a single CSV file.
pub struct CsvWriter {
    path:     PathBuf,
    out:      Writer<File>,
    rows:     usize,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self {
            path:     path.to_path_buf(),
            out:      open_with_header(path)?,
            rows:     0,
            finished: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data rows written so far (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows
    }
}

impl OutputWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[TelemetryRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in rows {
            self.out.write_record(row.to_record())?;
        }
        self.rows += rows.len();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        debug!(path = %self.path.display(), rows = self.rows, "csv written");
        Ok(())
    }
}

// ── PerDayCsvWriter ───────────────────────────────────────────────────────────

/// Splits rows by `drive_day` into separate CSV files in one directory.
///
/// A new file is opened whenever the incoming row's drive day differs from
/// the current one, so rows should arrive grouped by day (the scheduler
/// already produces them that way).
pub struct PerDayCsvWriter {
    dir:      PathBuf,
    stem:     String,
    current:  Option<(u32, Writer<File>)>,
    paths:    Vec<PathBuf>,
    finished: bool,
}

impl PerDayCsvWriter {
    /// Files will be created as `dir/<stem>-day<N>.csv`.
    pub fn new(dir: &Path, stem: impl Into<String>) -> Self {
        Self {
            dir:      dir.to_path_buf(),
            stem:     stem.into(),
            current:  None,
            paths:    Vec::new(),
            finished: false,
        }
    }

    /// Path of the file for drive day `day`.
    pub fn day_path(&self, day: u32) -> PathBuf {
        self.dir.join(format!("{}-day{day}.csv", self.stem))
    }

    /// Files opened so far, in the order their days first appeared.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn writer_for(&mut self, day: u32) -> OutputResult<&mut Writer<File>> {
        match self.current.take() {
            Some((d, w)) if d == day => Ok(&mut self.current.insert((d, w)).1),
            prev => {
                if let Some((_, mut w)) = prev {
                    w.flush()?;
                }
                let path = self.day_path(day);
                let w = open_with_header(&path)?;
                debug!(day, path = %path.display(), "opened per-day csv");
                self.paths.push(path);
                Ok(&mut self.current.insert((day, w)).1)
            }
        }
    }
}

impl OutputWriter for PerDayCsvWriter {
    fn write_rows(&mut self, rows: &[TelemetryRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in rows {
            self.writer_for(row.drive_day)?.write_record(row.to_record())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if let Some((_, mut w)) = self.current.take() {
            w.flush()?;
        }
        Ok(())
    }
}
