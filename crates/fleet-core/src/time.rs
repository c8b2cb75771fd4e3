//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is an integer count of seconds since the start of a run
//! (`sim_time_s`).  Every emitted sample advances it by exactly one
//! [`SampleInterval`], so all time arithmetic is exact and the i-th sample
//! always sits at `i * interval`.
//!
//! `SampleInterval` can only hold a positive number of seconds.  Validation
//! happens once at construction; nothing downstream can advance a clock by
//! zero.

use std::fmt;

use crate::{FleetError, FleetResult};

// ── SampleInterval ────────────────────────────────────────────────────────────

/// Seconds between consecutive telemetry samples.  Always `> 0`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct SampleInterval(u32);

impl SampleInterval {
    /// One sample per minute.
    pub const DEFAULT: SampleInterval = SampleInterval(60);

    /// Validate `secs`.  Zero, negative, and values beyond `u32::MAX` fail.
    pub fn new(secs: i64) -> FleetResult<Self> {
        match u32::try_from(secs) {
            Ok(s) if s > 0 => Ok(SampleInterval(s)),
            _ => Err(FleetError::InvalidInterval(secs)),
        }
    }

    #[inline]
    pub fn as_secs(self) -> u32 {
        self.0
    }

    /// The interval expressed in hours, for rate × time products.
    #[inline]
    pub fn as_hours(self) -> f64 {
        self.0 as f64 / 3_600.0
    }
}

impl Default for SampleInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for SampleInterval {
    type Error = FleetError;
    fn try_from(secs: i64) -> Result<Self, Self::Error> {
        SampleInterval::new(secs)
    }
}

impl From<SampleInterval> for i64 {
    fn from(interval: SampleInterval) -> i64 {
        interval.0 as i64
    }
}

impl fmt::Display for SampleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Simulated-seconds counter advanced once per emitted sample.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug)]
pub struct SimClock {
    interval: SampleInterval,
    now_s:    u64,
}

impl SimClock {
    /// A clock at `sim_time_s = 0`.
    pub fn new(interval: SampleInterval) -> Self {
        Self { interval, now_s: 0 }
    }

    /// Current simulated second.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now_s
    }

    #[inline]
    pub fn interval(&self) -> SampleInterval {
        self.interval
    }

    /// Advance by one sampling interval.
    #[inline]
    pub fn advance(&mut self) {
        self.now_s += self.interval.0 as u64;
    }

    /// Break elapsed time into (day, hour, minute) components.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let days = self.now_s / 86_400;
        let hours = ((self.now_s % 86_400) / 3_600) as u32;
        let minutes = ((self.now_s % 3_600) / 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "t={}s (day {} {:02}:{:02})", self.now_s, d, h, m)
    }
}
