//! Writing a trip's rows to disk.

use std::path::{Path, PathBuf};

#[cfg(feature = "sqlite")]
use fleet_output::SqliteWriter;
use fleet_output::{CsvWriter, OutputWriter, PerDayCsvWriter, TripMeta};
use tracing::info;

use crate::{TripOutput, TripResult};

/// Where a trip was written, with its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenTrip {
    /// The combined CSV.
    pub path: PathBuf,
    /// `per_day_files` is filled when per-day output was requested.
    pub meta: TripMeta,
}

/// Write `output` as `dir/file_name`, plus `<stem>-day<N>.csv` files next to
/// it when `per_day_files` is set.
///
/// `dir` is created if missing.
pub fn write_trip(
    output:        &TripOutput,
    dir:           &Path,
    file_name:     &str,
    per_day_files: bool,
) -> TripResult<WrittenTrip> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut combined = CsvWriter::new(&path)?;
    combined.write_rows(&output.rows)?;
    combined.finish()?;

    let mut per_day = Vec::new();
    if per_day_files {
        let stem = Path::new(file_name)
            .file_stem()
            .map_or_else(|| file_name.to_owned(), |s| s.to_string_lossy().into_owned());
        let mut w = PerDayCsvWriter::new(dir, stem);
        w.write_rows(&output.rows)?;
        w.finish()?;
        per_day = w.paths().iter().map(|p| p.display().to_string()).collect();
    }

    info!(path = %path.display(), rows = output.rows.len(), per_day = per_day.len(), "trip written");
    Ok(WrittenTrip {
        path,
        meta: output.summary.to_meta().with_per_day_files(per_day),
    })
}

/// Append `output`'s rows to the `telemetry` table of the SQLite database at
/// `db`, creating the file (and its directory) if missing.
#[cfg(feature = "sqlite")]
pub fn write_trip_sqlite(output: &TripOutput, db: &Path) -> TripResult<TripMeta> {
    if let Some(parent) = db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut w = SqliteWriter::new(db)?;
    w.write_rows(&output.rows)?;
    w.finish()?;

    info!(db = %db.display(), rows = output.rows.len(), "trip written to sqlite");
    Ok(output.summary.to_meta())
}
