//! Route geometry input.
//!
//! # CSV format
//!
//! One row per polyline vertex, in travel order:
//!
//! ```csv
//! lat,lon
//! 22.572600,88.363900
//! 22.574100,88.366200
//! ```
//!
//! `latitude`/`longitude` are accepted as header aliases.  Rows with
//! coordinates outside the WGS-84 ranges are rejected with the row number.
//!
//! # Coordinate pairs
//!
//! Endpoints may also be given as `"lat,lon"` strings; [`straight_route`]
//! turns two of them into a two-vertex route.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use fleet_core::GeoPoint;

use crate::{RouteError, RouteResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointRecord {
    #[serde(alias = "latitude")]
    lat: f64,
    #[serde(alias = "longitude")]
    lon: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a route polyline from a CSV file.
pub fn load_geometry_csv(path: &Path) -> RouteResult<Vec<GeoPoint>> {
    let file = std::fs::File::open(path)?;
    let points = load_geometry_reader(file)?;
    debug!(path = %path.display(), points = points.len(), "loaded route geometry");
    Ok(points)
}

/// Like [`load_geometry_csv`] but accepts any `Read` source.
pub fn load_geometry_reader<R: Read>(reader: R) -> RouteResult<Vec<GeoPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut points = Vec::new();
    for (i, result) in csv_reader.deserialize::<PointRecord>().enumerate() {
        // Row 1 is the header.
        let row = i + 2;
        let rec = result.map_err(|e| RouteError::Parse { row, message: e.to_string() })?;
        let p = GeoPoint::new(rec.lat, rec.lon);
        if !p.is_valid() {
            return Err(RouteError::Parse {
                row,
                message: format!("coordinate {p} out of range"),
            });
        }
        points.push(p);
    }
    Ok(points)
}

/// Parse a `"lat,lon"` decimal-degree pair.
pub fn parse_coordinate(s: &str) -> RouteResult<GeoPoint> {
    let invalid = || RouteError::InvalidCoordinate(s.to_owned());

    let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    let p = GeoPoint::new(lat, lon);
    if p.is_valid() { Ok(p) } else { Err(invalid()) }
}

/// A two-vertex route between two `"lat,lon"` endpoints.
pub fn straight_route(from: &str, to: &str) -> RouteResult<Vec<GeoPoint>> {
    Ok(vec![parse_coordinate(from)?, parse_coordinate(to)?])
}
