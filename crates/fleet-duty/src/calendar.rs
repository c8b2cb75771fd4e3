//! Multi-day duty scheduling.
//!
//! # Budget model
//!
//! A driver may be on duty for `budget_s = trunc(hours · 3600)` seconds per
//! day.  A [`DutyCursor`] walks the wall clock one sampling interval at a
//! time, debiting the budget.  When the budget is spent and the current day
//! already holds at least one sample, the cursor rolls over:
//!
//! ```text
//! cursor    = (cursor.date() + 1 day) at start.time()
//! remaining = budget_s
//! day      += 1
//! ```
//!
//! The "already holds a sample" guard makes a non-positive budget degrade
//! to exactly one sample per day instead of looping.

use chrono::{NaiveDateTime, TimeDelta};
use fleet_core::SampleInterval;
use fleet_sim::TelemetrySample;
use tracing::{debug, warn};

use crate::{DutyError, DutyResult};

// ── ScheduledSample ───────────────────────────────────────────────────────────

/// A [`TelemetrySample`] placed on the calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledSample {
    pub sample:    TelemetrySample,
    /// Local wall-clock time of the sample.
    pub timestamp: NaiveDateTime,
    /// 1-based drive day.
    pub drive_day: u32,
    /// Always `true` in the current model; off-duty rows are never emitted.
    pub on_duty:   bool,
}

// ── DutyCursor ────────────────────────────────────────────────────────────────

/// Wall-clock cursor that hands out one `(timestamp, drive_day)` slot per
/// call to [`next_slot`](Self::next_slot).
#[derive(Debug, Clone)]
pub struct DutyCursor {
    start:       NaiveDateTime,
    step:        TimeDelta,
    step_s:      i64,
    budget_s:    i64,
    cursor:      NaiveDateTime,
    remaining_s: i64,
    day:         u32,
    /// Slots handed out on the current day.
    day_samples: u32,
}

impl DutyCursor {
    pub fn new(start: NaiveDateTime, driver_hours_per_day: f64, interval: SampleInterval) -> Self {
        // `as` saturates and maps NaN to 0.
        let budget_s = (driver_hours_per_day * 3600.0).trunc() as i64;
        if budget_s <= 0 {
            warn!(
                driver_hours_per_day,
                "non-positive duty budget; scheduling one sample per day"
            );
        }
        let step_s = i64::from(interval.as_secs());
        Self {
            start,
            step: TimeDelta::seconds(step_s),
            step_s,
            budget_s,
            cursor: start,
            remaining_s: budget_s,
            day: 1,
            day_samples: 0,
        }
    }

    /// Per-day budget in whole seconds.
    pub fn budget_s(&self) -> i64 {
        self.budget_s
    }

    /// Claim the next slot, rolling over to a new day first if needed.
    pub fn next_slot(&mut self) -> DutyResult<(NaiveDateTime, u32)> {
        if self.remaining_s <= 0 && self.day_samples > 0 {
            self.roll_over()?;
        }
        let slot = (self.cursor, self.day);

        self.cursor = self
            .cursor
            .checked_add_signed(self.step)
            .ok_or_else(|| DutyError::OutOfRange(format!("{} + {}s", self.cursor, self.step_s)))?;
        self.remaining_s -= self.step_s;
        self.day_samples += 1;
        Ok(slot)
    }

    fn roll_over(&mut self) -> DutyResult<()> {
        let next_date = self
            .cursor
            .date()
            .succ_opt()
            .ok_or_else(|| DutyError::OutOfRange(format!("day after {}", self.cursor.date())))?;
        debug!(day = self.day, samples = self.day_samples, %next_date, "duty day complete");

        self.cursor = next_date.and_time(self.start.time());
        self.remaining_s = self.budget_s;
        self.day += 1;
        self.day_samples = 0;
        Ok(())
    }
}

// ── schedule ──────────────────────────────────────────────────────────────────

/// Assign a timestamp and drive day to every sample, in order.
///
/// The output has exactly one entry per input.  Timestamps are strictly
/// increasing and drive days are non-decreasing, starting at 1.
pub fn schedule(
    samples:              &[TelemetrySample],
    start:                NaiveDateTime,
    driver_hours_per_day: f64,
    interval:             SampleInterval,
) -> DutyResult<Vec<ScheduledSample>> {
    let mut cursor = DutyCursor::new(start, driver_hours_per_day, interval);
    let mut out = Vec::with_capacity(samples.len());

    for &sample in samples {
        let (timestamp, drive_day) = cursor.next_slot()?;
        out.push(ScheduledSample { sample, timestamp, drive_day, on_duty: true });
    }

    debug!(
        samples = out.len(),
        days = drive_days(&out),
        budget_s = cursor.budget_s(),
        %start,
        "scheduled across duty days"
    );
    Ok(out)
}

/// Number of drive days spanned by `scheduled` (0 when empty).
pub fn drive_days(scheduled: &[ScheduledSample]) -> u32 {
    scheduled.last().map_or(0, |s| s.drive_day)
}
