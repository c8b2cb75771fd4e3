//! Integration tests for fleet-output.

use chrono::{NaiveDate, NaiveDateTime};
use fleet_core::{EventKind, TripId, VehicleId};

use crate::TelemetryRow;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(h, m, s).unwrap()
}

fn row(day: u32, ts_s: u64, event: Option<EventKind>) -> TelemetryRow {
    TelemetryRow {
        timestamp:         at(8, 0, 0) + chrono::Duration::seconds(ts_s as i64),
        vehicle_id:        VehicleId::new("WB4222"),
        trip_id:           TripId::new("trip-0002"),
        drive_day:         day,
        lat:               22.572_612_345,
        lon:               88.363_900_049,
        speed_kmph:        42.449,
        heading_deg:       359.96,
        event,
        fuel_l_cumulative: 0.123_456,
        ts_s,
    }
}

fn read_all(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

// ── Row ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use fleet_core::GeoPoint;
    use fleet_duty::ScheduledSample;
    use fleet_sim::TelemetrySample;

    use super::*;

    #[test]
    fn record_formatting() {
        let rec = row(1, 60, None).to_record();
        assert_eq!(rec[0], "2025-03-14 08:01:00");
        assert_eq!(rec[1], "WB4222");
        assert_eq!(rec[2], "trip-0002");
        assert_eq!(rec[3], "1");
        assert_eq!(rec[4], "22.572612");
        assert_eq!(rec[5], "88.363900");
        assert_eq!(rec[6], "42.4");
        assert_eq!(rec[7], "360.0");
        assert_eq!(rec[8], "");
        assert_eq!(rec[9], "0.123");
        assert_eq!(rec[10], "60");
    }

    #[test]
    fn event_label_in_record() {
        let rec = row(1, 0, Some(EventKind::HarshBraking)).to_record();
        assert_eq!(rec[8], "HarshBraking");
    }

    fn scheduled() -> ScheduledSample {
        ScheduledSample {
            sample: TelemetrySample {
                sim_time_s:        120,
                position:          GeoPoint::new(1.5, 2.5),
                speed_kmph:        33.0,
                heading_deg:       45.0,
                event:             Some(EventKind::Idle),
                fuel_l_cumulative: 0.5,
            },
            timestamp: at(9, 30, 0),
            drive_day: 3,
            on_duty:   true,
        }
    }

    #[test]
    fn from_scheduled_copies_every_field() {
        let s = scheduled();
        let r = TelemetryRow::from_scheduled(&s, &VehicleId::new("V1"), &TripId::new("T1"));
        assert_eq!(r.timestamp, at(9, 30, 0));
        assert_eq!(r.vehicle_id.as_str(), "V1");
        assert_eq!(r.trip_id.as_str(), "T1");
        assert_eq!(r.drive_day, 3);
        assert_eq!((r.lat, r.lon), (1.5, 2.5));
        assert_eq!(r.speed_kmph, 33.0);
        assert_eq!(r.heading_deg, 45.0);
        assert_eq!(r.event, Some(EventKind::Idle));
        assert_eq!(r.fuel_l_cumulative, 0.5);
        assert_eq!(r.ts_s, 120);
    }

    #[test]
    fn scheduled_sample_serializes_to_json() {
        let s = scheduled();
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["timestamp"], "2025-03-14T09:30:00");
        assert_eq!(json["drive_day"], 3);
        assert_eq!(json["sample"]["sim_time_s"], 120);
        let back: ScheduledSample = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CsvWriter, HEADER, OutputError, OutputWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_written_on_create() {
        let dir = tmp();
        let path = dir.path().join("trip.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_all(&path);
        assert_eq!(headers, HEADER);
        assert!(rows.is_empty());
    }

    #[test]
    fn rows_round_trip_in_order() {
        let dir = tmp();
        let path = dir.path().join("trip.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.write_rows(&[row(1, 0, None), row(1, 60, Some(EventKind::Overspeed))]).unwrap();
        w.write_rows(&[row(2, 120, None)]).unwrap();
        assert_eq!(w.rows_written(), 3);
        w.finish().unwrap();

        let (_, rows) = read_all(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][10], "0");
        assert_eq!(&rows[1][8], "Overspeed");
        assert_eq!(&rows[2][3], "2");
        assert_eq!(&rows[2][0], "2025-03-14 08:02:00");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(&dir.path().join("a.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn write_after_finish_rejected() {
        let dir = tmp();
        let mut w = CsvWriter::new(&dir.path().join("a.csv")).unwrap();
        w.finish().unwrap();
        assert!(matches!(w.write_rows(&[row(1, 0, None)]), Err(OutputError::Finished)));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope").join("a.csv")).is_err());
    }
}

// ── Per-day CSV ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod per_day_tests {
    use super::*;
    use crate::{HEADER, OutputWriter, PerDayCsvWriter};

    #[test]
    fn one_file_per_drive_day() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = PerDayCsvWriter::new(dir.path(), "trip-0002-A-B");
        w.write_rows(&[row(1, 0, None), row(1, 60, None)]).unwrap();
        w.write_rows(&[row(2, 120, None), row(3, 180, None), row(3, 240, None)]).unwrap();
        w.finish().unwrap();

        let names: Vec<String> = w
            .paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["trip-0002-A-B-day1.csv", "trip-0002-A-B-day2.csv", "trip-0002-A-B-day3.csv"]
        );

        let counts: Vec<usize> = w.paths().iter().map(|p| read_all(p).1.len()).collect();
        assert_eq!(counts, [2, 1, 2]);
        for p in w.paths() {
            assert_eq!(read_all(p).0, HEADER);
        }
        let (_, day3) = read_all(&w.day_path(3));
        assert!(day3.iter().all(|r| &r[3] == "3"));
    }

    #[test]
    fn no_rows_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = PerDayCsvWriter::new(dir.path(), "empty");
        w.write_rows(&[]).unwrap();
        w.finish().unwrap();
        assert!(w.paths().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rusqlite::Connection;

    use super::*;
    use crate::{OutputWriter, SqliteWriter};

    #[test]
    fn rows_inserted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.db");
        let mut w = SqliteWriter::new(&path).unwrap();
        w.write_rows(&[row(1, 0, None), row(1, 60, Some(EventKind::Idle)), row(2, 120, None)])
            .unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let conn = Connection::open(&path).unwrap();
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM telemetry", [], |r| r.get(0)).unwrap();
        assert_eq!(n, 3);
        let nulls: i64 = conn
            .query_row("SELECT COUNT(*) FROM telemetry WHERE event IS NULL", [], |r| r.get(0))
            .unwrap();
        assert_eq!(nulls, 2);
        let (ts, day): (String, i64) = conn
            .query_row(
                "SELECT timestamp, drive_day FROM telemetry WHERE ts_s = 120",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(ts, "2025-03-14 08:02:00");
        assert_eq!(day, 2);
    }
}

// ── Meta ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod meta_tests {
    use approx::assert_relative_eq;
    use fleet_core::EventCounts;

    use super::*;
    use crate::{TripMeta, default_file_name, round_to};

    #[test]
    fn rounding() {
        assert_relative_eq!(round_to(41.96, 1), 42.0);
        assert_relative_eq!(round_to(1.23456, 2), 1.23);
        assert_relative_eq!(round_to(-0.125, 2), -0.13);
        assert_relative_eq!(round_to(12.3456789, 3), 12.346);
    }

    #[test]
    fn meta_rounds_for_presentation() {
        let m = TripMeta::new(12.34567, 38.456, 2.34567, EventCounts::default(), 100, 2);
        assert_relative_eq!(m.distance_km, 12.346);
        assert_relative_eq!(m.sim_avg_speed_kmph, 38.5);
        assert_relative_eq!(m.fuel_used_l, 2.35);
        assert!(m.per_day_files.is_empty());
    }

    #[test]
    fn json_shape() {
        let mut events = EventCounts::default();
        events.record(EventKind::Overspeed);
        events.record(EventKind::Idle);
        events.record(EventKind::Idle);
        let m = TripMeta::new(1.0, 30.0, 0.5, events, 10, 1)
            .with_per_day_files(vec!["a-day1.csv".into()]);

        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["rows"], 10);
        assert_eq!(v["days"], 1);
        assert_eq!(v["events"]["Overspeed"], 1);
        assert_eq!(v["events"]["Idle"], 2);
        assert_eq!(v["events"]["HarshBraking"], 0);
        assert_eq!(v["per_day_files"][0], "a-day1.csv");
        assert!(v.get("sim_avg_speed_kmph").is_some());
    }

    #[test]
    fn default_name_truncates_labels_and_replaces_spaces() {
        let name = default_file_name(&TripId::new("trip-0002"), "Kolkata Howrah Station", "Durgapur");
        assert_eq!(name, "trip-0002-Kolkata_Howr-Durgapur.csv");
    }

    #[test]
    fn default_name_with_coordinate_labels() {
        let name = default_file_name(&TripId::new("t"), "22.5726,88.3639", "23.52,87.31");
        assert_eq!(name, "t-22.5726,88.3-23.52,87.31.csv");
    }
}
