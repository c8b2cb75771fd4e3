//! The telemetry row written by every backend.

use chrono::NaiveDateTime;
use fleet_core::{EventKind, TripId, VehicleId};
use fleet_duty::ScheduledSample;

/// Column names, in output order.
pub const HEADER: [&str; 11] = [
    "timestamp",
    "vehicleID",
    "tripID",
    "drive_day",
    "lat",
    "lon",
    "speed_kmph",
    "heading_deg",
    "event",
    "fuel_l_cumulative",
    "ts_s",
];

/// `chrono` format of the `timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One output row: a scheduled sample tagged with its vehicle and trip.
///
/// Values are kept at full precision; rounding happens only when a backend
/// formats them.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRow {
    pub timestamp:         NaiveDateTime,
    pub vehicle_id:        VehicleId,
    pub trip_id:           TripId,
    pub drive_day:         u32,
    pub lat:               f64,
    pub lon:               f64,
    pub speed_kmph:        f64,
    pub heading_deg:       f64,
    pub event:             Option<EventKind>,
    pub fuel_l_cumulative: f64,
    /// Simulated seconds since the start of the run.
    pub ts_s:              u64,
}

impl TelemetryRow {
    pub fn from_scheduled(s: &ScheduledSample, vehicle_id: &VehicleId, trip_id: &TripId) -> Self {
        Self {
            timestamp:         s.timestamp,
            vehicle_id:        vehicle_id.clone(),
            trip_id:           trip_id.clone(),
            drive_day:         s.drive_day,
            lat:               s.sample.position.lat,
            lon:               s.sample.position.lon,
            speed_kmph:        s.sample.speed_kmph,
            heading_deg:       s.sample.heading_deg,
            event:             s.sample.event,
            fuel_l_cumulative: s.sample.fuel_l_cumulative,
            ts_s:              s.sample.sim_time_s,
        }
    }

    /// The row formatted for text output, in [`HEADER`] order.
    ///
    /// lat/lon to 6 decimals, speed and heading to 1, fuel to 3; a missing
    /// event is an empty field.
    pub fn to_record(&self) -> [String; 11] {
        [
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.vehicle_id.to_string(),
            self.trip_id.to_string(),
            self.drive_day.to_string(),
            format!("{:.6}", self.lat),
            format!("{:.6}", self.lon),
            format!("{:.1}", self.speed_kmph),
            format!("{:.1}", self.heading_deg),
            self.event.map_or_else(String::new, |e| e.as_str().to_owned()),
            format!("{:.3}", self.fuel_l_cumulative),
            self.ts_s.to_string(),
        ]
    }
}
