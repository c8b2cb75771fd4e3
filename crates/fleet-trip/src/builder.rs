//! Fluent builder for constructing a [`Trip`].

use chrono::NaiveDate;
use fleet_core::{GeoPoint, SampleInterval, SpeedProfile, TripId, VehicleId};
use fleet_duty::today_local;

use crate::{Trip, TripConfig, TripResult};

/// Fluent builder for [`Trip`].
///
/// # Required inputs
///
/// - [`TripConfig`]: interval, profile, duty hours, identifiers, …
/// - Route geometry: ordered `GeoPoint`s (may be empty)
///
/// # Optional inputs
///
/// | Method           | Default                         |
/// |------------------|---------------------------------|
/// | `.today(d)`      | Local date when `build` runs    |
/// | `.seed(s)`       | `config.seed`                   |
/// | `.profile(p)`    | `config.speed_profile`          |
/// | `.interval(i)`   | `config.interval`               |
///
/// `today` only matters when the config has no explicit start time.
///
/// # Example
///
/// ```rust,ignore
/// let trip = TripBuilder::new(config, geometry)
///     .seed(42)
///     .today(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
///     .build()?;
/// let out = trip.run()?;
/// ```
pub struct TripBuilder {
    config:   TripConfig,
    geometry: Vec<GeoPoint>,
    today:    Option<NaiveDate>,
}

impl TripBuilder {
    pub fn new(config: TripConfig, geometry: Vec<GeoPoint>) -> Self {
        Self { config, geometry, today: None }
    }

    /// Date used to resolve a missing start time.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn profile(mut self, profile: SpeedProfile) -> Self {
        self.config.speed_profile = profile;
        self
    }

    pub fn interval(mut self, interval: SampleInterval) -> Self {
        self.config.interval = interval;
        self
    }

    pub fn vehicle(mut self, id: impl Into<VehicleId>) -> Self {
        self.config.vehicle_id = id.into();
        self
    }

    pub fn trip_id(mut self, id: impl Into<TripId>) -> Self {
        self.config.trip_id = id.into();
        self
    }

    /// Validate the configuration, resolve the start time, and return a
    /// ready-to-run [`Trip`].
    pub fn build(self) -> TripResult<Trip> {
        self.config.validate()?;
        let today = self.today.unwrap_or_else(today_local);
        let start = self.config.start_time(today)?;
        Ok(Trip::new(self.config, self.geometry, start))
    }
}
