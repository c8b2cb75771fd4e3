//! fleetgen: synthesize fleet telemetry for one route.
//!
//! Resamples the route, simulates the drive, spreads it over duty days, and
//! writes the rows as CSV.  The outcome is printed to stdout as one JSON
//! object:
//!
//! ```text
//! {"ok": true, "message": "CSV generated", "path": "output/…csv", "meta": {…}}
//! {"ok": false, "message": "…"}
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the `info` default).

mod cli;


use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use fleet_core::GeoPoint;
use fleet_output::{TripMeta, default_file_name};
use fleet_route::{load_geometry_csv, straight_route};
use fleet_trip::{TripBuilder, write_trip};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Report {
    ok:      bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path:    Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta:    Option<TripMeta>,
}

impl Report {
    fn failure(err: &anyhow::Error) -> Self {
        Self { ok: false, message: format!("{err:#}"), path: None, meta: None }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let (report, code) = match run(&cli) {
        Ok(report) => (report, ExitCode::SUCCESS),
        Err(err) => {
            error!(error = %format!("{err:#}"), "telemetry generation failed");
            (Report::failure(&err), ExitCode::FAILURE)
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(%err, "failed to encode report");
            return ExitCode::FAILURE;
        }
    }
    code
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build, run, and write one trip as described by `cli`.
fn run(cli: &Cli) -> Result<Report> {
    let config = cli.trip_config()?;
    let (geometry, start_label, end_label) = load_route(cli)?;
    info!(points = geometry.len(), from = %start_label, to = %end_label, "route loaded");

    let trip_id = config.trip_id.clone();
    let trip = TripBuilder::new(config, geometry).build()?;
    let output = trip.run()?;
    if output.rows.is_empty() {
        bail!("no telemetry generated (empty geometry?)");
    }

    let file_name = cli
        .out_name
        .clone()
        .unwrap_or_else(|| default_file_name(&trip_id, &start_label, &end_label));
    let written = write_trip(&output, &cli.out_dir, &file_name, cli.per_day_files)
        .with_context(|| format!("failed to write output under {}", cli.out_dir.display()))?;

    #[cfg(feature = "sqlite")]
    if let Some(db) = &cli.sqlite {
        fleet_trip::write_trip_sqlite(&output, db)
            .with_context(|| format!("failed to write sqlite database {}", db.display()))?;
    }

    Ok(Report {
        ok:      true,
        message: "CSV generated".to_owned(),
        path:    Some(written.path.display().to_string()),
        meta:    Some(written.meta),
    })
}

/// Geometry plus start/end labels used in the default file name.
fn load_route(cli: &Cli) -> Result<(Vec<GeoPoint>, String, String)> {
    if let Some(path) = &cli.geometry {
        let points = load_geometry_csv(path)
            .with_context(|| format!("failed to load geometry {}", path.display()))?;
        let label = |p: Option<&GeoPoint>| p.map_or_else(String::new, |p| format!("{:.4},{:.4}", p.lat, p.lon));
        let (start, end) = (label(points.first()), label(points.last()));
        return Ok((points, start, end));
    }
    match (&cli.from, &cli.to) {
        (Some(from), Some(to)) => Ok((straight_route(from, to)?, from.clone(), to.clone())),
        _ => bail!("either --geometry or both --from and --to are required"),
    }
}
