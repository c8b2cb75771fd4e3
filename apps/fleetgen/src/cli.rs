//! Command-line arguments and how they override a [`TripConfig`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use fleet_core::{SampleInterval, SpeedProfile};
use fleet_trip::TripConfig;

#[derive(Debug, Parser)]
#[command(
    name = "fleetgen",
    about = "Generate synthetic fleet telemetry for a route",
    long_about = None,
    group(ArgGroup::new("route").required(true).args(["geometry", "from"])),
)]
pub struct Cli {
    /// Route geometry CSV with `lat,lon` columns
    #[arg(long, value_name = "FILE")]
    pub geometry: Option<PathBuf>,

    /// Start coordinate as "lat,lon" (straight-line route to --to)
    #[arg(long, value_name = "LAT,LON", requires = "to", allow_hyphen_values = true)]
    pub from: Option<String>,

    /// End coordinate as "lat,lon"
    #[arg(long, value_name = "LAT,LON", requires = "from", allow_hyphen_values = true)]
    pub to: Option<String>,

    /// TOML trip configuration; flags below override its values
    #[arg(long, value_name = "FILE", env = "FLEETGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Driving style: eco, normal, or aggressive
    #[arg(long = "speed-profile", visible_alias = "profile")]
    pub profile: Option<SpeedProfile>,

    /// Seconds between samples
    #[arg(long, visible_alias = "sample-every-s", allow_hyphen_values = true)]
    pub interval: Option<i64>,

    /// Resampling distance along the route, metres
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<f64>,

    /// On-duty hours per drive day
    #[arg(long, visible_alias = "driver-hours", allow_hyphen_values = true)]
    pub hours: Option<f64>,

    /// Local start time, "YYYY-MM-DD HH:MM" (default: today 08:00)
    #[arg(long)]
    pub start: Option<String>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub vehicle_id: Option<String>,

    #[arg(long)]
    pub trip_id: Option<String>,

    /// Directory the CSV files are written to
    #[arg(long, env = "FLEETGEN_OUT_DIR", default_value = "output")]
    pub out_dir: PathBuf,

    /// File name of the combined CSV (default: derived from trip and endpoints)
    #[arg(long)]
    pub out_name: Option<String>,

    /// Also write one CSV per drive day
    #[arg(long)]
    pub per_day_files: bool,

    /// Also append the rows to this SQLite database
    #[cfg(feature = "sqlite")]
    #[arg(long, value_name = "FILE")]
    pub sqlite: Option<PathBuf>,

    /// Keep everything in one duty window instead of splitting across days
    #[arg(long)]
    pub single_window: bool,
}

impl Cli {
    /// Load `--config` (or defaults) and apply every flag that was given.
    pub fn trip_config(&self) -> Result<TripConfig> {
        let mut config = match &self.config {
            Some(path) => TripConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TripConfig::default(),
        };
        self.apply(&mut config)?;
        Ok(config)
    }

    fn apply(&self, config: &mut TripConfig) -> Result<()> {
        if let Some(profile) = self.profile {
            config.speed_profile = profile;
        }
        if let Some(secs) = self.interval {
            config.interval = SampleInterval::new(secs)?;
        }
        if let Some(step) = self.step {
            config.step_m = step;
        }
        if let Some(hours) = self.hours {
            config.driver_hours_per_day = hours;
        }
        if let Some(start) = &self.start {
            config.start_time_local = Some(start.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(id) = &self.vehicle_id {
            config.vehicle_id = id.as_str().into();
        }
        if let Some(id) = &self.trip_id {
            config.trip_id = id.as_str().into();
        }
        if self.single_window {
            config.split_across_days = false;
        }
        Ok(())
    }
}
