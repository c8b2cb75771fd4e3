//! Driving-style profiles.
//!
//! Each `SpeedProfile` variant maps to one immutable [`ProfileParams`] bundle.
//! The mapping is an exhaustive `match`, so adding a variant without its
//! parameters is a compile error rather than a silent fallback.

use std::str::FromStr;

use crate::FleetError;

/// Static tuning for one driving style.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProfileParams {
    /// Per-trip speed cap in km/h.
    pub speed_cap_kmph: f64,
    /// Base probability of a harsh acceleration per point.
    pub harsh_accel_p: f64,
    /// Base probability of a harsh braking per point.
    pub harsh_brake_p: f64,
    /// Base probability of an overspeed per point.
    pub overspeed_p: f64,
    /// Probability of an idle block after a point (when not braking).
    pub idle_probability: f64,
    /// Min/max consecutive idle samples in one block (inclusive).
    pub idle_duration_range: (u32, u32),
}

const ECO: ProfileParams = ProfileParams {
    speed_cap_kmph:      40.0,
    harsh_accel_p:       0.04,
    harsh_brake_p:       0.03,
    overspeed_p:         0.02,
    idle_probability:    0.08,
    idle_duration_range: (1, 3),
};

const NORMAL: ProfileParams = ProfileParams {
    speed_cap_kmph:      60.0,
    harsh_accel_p:       0.06,
    harsh_brake_p:       0.05,
    overspeed_p:         0.05,
    idle_probability:    0.12,
    idle_duration_range: (1, 4),
};

const AGGRESSIVE: ProfileParams = ProfileParams {
    speed_cap_kmph:      85.0,
    harsh_accel_p:       0.10,
    harsh_brake_p:       0.06,
    overspeed_p:         0.08,
    idle_probability:    0.07,
    idle_duration_range: (1, 2),
};

/// The driving style used for a whole trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpeedProfile {
    /// Low cap, gentle events.
    Eco,
    #[default]
    Normal,
    /// High cap, frequent harsh events, short idles.
    Aggressive,
}

impl SpeedProfile {
    pub const ALL: [SpeedProfile; 3] =
        [SpeedProfile::Eco, SpeedProfile::Normal, SpeedProfile::Aggressive];

    /// The parameter bundle for this profile.
    pub fn params(self) -> &'static ProfileParams {
        match self {
            SpeedProfile::Eco        => &ECO,
            SpeedProfile::Normal     => &NORMAL,
            SpeedProfile::Aggressive => &AGGRESSIVE,
        }
    }

    /// Lower-case label, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SpeedProfile::Eco        => "eco",
            SpeedProfile::Normal     => "normal",
            SpeedProfile::Aggressive => "aggressive",
        }
    }
}

impl FromStr for SpeedProfile {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eco"        => Ok(SpeedProfile::Eco),
            "normal"     => Ok(SpeedProfile::Normal),
            "aggressive" => Ok(SpeedProfile::Aggressive),
            _ => Err(FleetError::UnknownProfile(s.to_owned())),
        }
    }
}

impl std::fmt::Display for SpeedProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
