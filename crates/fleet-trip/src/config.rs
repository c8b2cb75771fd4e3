//! Trip configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! speed_profile        = "aggressive"
//! driver_hours_per_day = 1.5
//! start_time_local     = "2025-03-01 06:30"
//! ```

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use fleet_core::{SampleInterval, SpeedProfile, TripId, VehicleId};
use fleet_duty::{default_start_time, parse_start_time};
use fleet_route::DEFAULT_STEP_M;
use serde::{Deserialize, Serialize};

use crate::TripResult;

/// Tunables for one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripConfig {
    /// Seconds between samples.
    #[serde(rename = "sample_every_s")]
    pub interval:             SampleInterval,
    pub speed_profile:        SpeedProfile,
    /// Resampling distance in metres.
    pub step_m:               f64,
    /// On-duty budget per drive day.
    pub driver_hours_per_day: f64,
    /// `None` draws from OS entropy; runs are then not reproducible.
    pub seed:                 Option<u64>,
    pub vehicle_id:           VehicleId,
    pub trip_id:              TripId,
    /// Local start time; `None` means today at 08:00.
    pub start_time_local:     Option<String>,
    /// Spread samples over several drive days (`false`: one truncated window).
    pub split_across_days:    bool,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            interval:             SampleInterval::DEFAULT,
            speed_profile:        SpeedProfile::Normal,
            step_m:               DEFAULT_STEP_M,
            driver_hours_per_day: 6.0,
            seed:                 None,
            vehicle_id:           VehicleId::new("WB4222"),
            trip_id:              TripId::new("trip-0002"),
            start_time_local:     None,
            split_across_days:    true,
        }
    }
}

impl TripConfig {
    /// Parse a TOML document.  Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> TripResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> TripResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Resolve the start time against `today`.
    pub fn start_time(&self, today: NaiveDate) -> TripResult<NaiveDateTime> {
        match &self.start_time_local {
            Some(s) => Ok(parse_start_time(s)?),
            None => Ok(default_start_time(today)),
        }
    }

    /// Check everything that can be checked without running the trip.
    ///
    /// The interval is already valid by construction; this catches a
    /// malformed start time.
    pub fn validate(&self) -> TripResult<()> {
        if let Some(s) = &self.start_time_local {
            parse_start_time(s)?;
        }
        Ok(())
    }
}
