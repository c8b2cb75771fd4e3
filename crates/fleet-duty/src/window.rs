//! Single-window scheduling: no day split.

use chrono::{NaiveDateTime, TimeDelta};
use fleet_sim::TelemetrySample;
use tracing::debug;

use crate::{DutyError, DutyResult, ScheduledSample};

/// Stamp each sample at `start + sim_time_s` and drop everything that falls
/// after `start + hours`.
///
/// All kept rows are on drive day 1.  A non-positive budget keeps only the
/// samples stamped exactly at `start`.
pub fn schedule_single_window(
    samples:              &[TelemetrySample],
    start:                NaiveDateTime,
    driver_hours_per_day: f64,
) -> DutyResult<Vec<ScheduledSample>> {
    let budget_s = ((driver_hours_per_day * 3600.0).trunc() as i64).max(0);
    let end = offset_by(start, budget_s)?;

    let mut out = Vec::with_capacity(samples.len());
    for &sample in samples {
        let offset = i64::try_from(sample.sim_time_s)
            .map_err(|_| DutyError::OutOfRange(format!("sim time {}s", sample.sim_time_s)))?;
        let timestamp = offset_by(start, offset)?;
        // Samples are in time order, so nothing after this fits either.
        if timestamp > end {
            break;
        }
        out.push(ScheduledSample { sample, timestamp, drive_day: 1, on_duty: true });
    }

    debug!(
        kept = out.len(),
        dropped = samples.len() - out.len(),
        %end,
        "scheduled into single window"
    );
    Ok(out)
}

fn offset_by(start: NaiveDateTime, secs: i64) -> DutyResult<NaiveDateTime> {
    TimeDelta::try_seconds(secs)
        .and_then(|d| start.checked_add_signed(d))
        .ok_or_else(|| DutyError::OutOfRange(format!("{start} + {secs}s")))
}
