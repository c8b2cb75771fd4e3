//! Driving-event tags and per-kind tallies.

use std::str::FromStr;

use crate::FleetError;

/// A notable driving event attached to a sample.  A sample carries at most
/// one (`Option<EventKind>`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    HarshAcceleration,
    HarshBraking,
    Overspeed,
    /// Engine running, vehicle stationary.
    Idle,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::HarshAcceleration,
        EventKind::HarshBraking,
        EventKind::Overspeed,
        EventKind::Idle,
    ];

    /// Label used in CSV/SQLite `event` columns.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::HarshAcceleration => "HarshAcceleration",
            EventKind::HarshBraking      => "HarshBraking",
            EventKind::Overspeed         => "Overspeed",
            EventKind::Idle              => "Idle",
        }
    }
}

impl FromStr for EventKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FleetError::UnknownEvent(s.to_owned()))
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EventCounts ───────────────────────────────────────────────────────────────

/// Number of samples tagged with each [`EventKind`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventCounts {
    #[cfg_attr(feature = "serde", serde(rename = "HarshAcceleration"))]
    pub harsh_acceleration: u32,
    #[cfg_attr(feature = "serde", serde(rename = "HarshBraking"))]
    pub harsh_braking:      u32,
    #[cfg_attr(feature = "serde", serde(rename = "Overspeed"))]
    pub overspeed:          u32,
    #[cfg_attr(feature = "serde", serde(rename = "Idle"))]
    pub idle:               u32,
}

impl EventCounts {
    /// Count one occurrence of `kind`.
    #[inline]
    pub fn record(&mut self, kind: EventKind) {
        *self.slot(kind) += 1;
    }

    pub fn get(&self, kind: EventKind) -> u32 {
        match kind {
            EventKind::HarshAcceleration => self.harsh_acceleration,
            EventKind::HarshBraking      => self.harsh_braking,
            EventKind::Overspeed         => self.overspeed,
            EventKind::Idle              => self.idle,
        }
    }

    /// Sum over all kinds.
    pub fn total(&self) -> u32 {
        EventKind::ALL.iter().map(|&k| self.get(k)).sum()
    }

    fn slot(&mut self, kind: EventKind) -> &mut u32 {
        match kind {
            EventKind::HarshAcceleration => &mut self.harsh_acceleration,
            EventKind::HarshBraking      => &mut self.harsh_braking,
            EventKind::Overspeed         => &mut self.overspeed,
            EventKind::Idle              => &mut self.idle,
        }
    }
}
