//! Unit tests for fleet-route.

use fleet_core::GeoPoint;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The point `metres` due north of `p` (same meridian).
fn north_of(p: GeoPoint, metres: f64) -> GeoPoint {
    let d_lat = (metres / fleet_core::geo::EARTH_RADIUS_M).to_degrees();
    GeoPoint::new(p.lat + d_lat, p.lon)
}

fn origin() -> GeoPoint {
    GeoPoint::new(22.5726, 88.3639)
}

// ── resample ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resample_tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{path_length_m, resample};

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(resample(&[], 100.0).is_empty());
    }

    #[test]
    fn single_point_is_returned_alone() {
        let p = origin();
        assert_eq!(resample(&[p], 100.0), vec![p]);
    }

    #[test]
    fn one_kilometre_at_100m_gives_ten_or_eleven_points() {
        let a = origin();
        let b = north_of(a, 1_000.0);
        let out = resample(&[a, b], 100.0);
        assert!((10..=11).contains(&out.len()), "got {} points", out.len());
        assert_eq!(out[0], a);
        assert_eq!(*out.last().unwrap(), b);
    }

    #[test]
    fn kilometre_off_by_float_noise_has_no_sliver_at_the_end() {
        let a = origin();
        let by_degrees = GeoPoint::new(a.lat + 1_000.0 / 111_194.9, a.lon);
        for b in [by_degrees, north_of(a, 1_000.001), north_of(a, 999.999)] {
            let out = resample(&[a, b], 100.0);
            assert_eq!(out.len(), 11, "length {} m", a.distance_m(b));
            assert_eq!(*out.last().unwrap(), b);
            let n = out.len();
            assert!(out[n - 2].distance_m(out[n - 1]) > 99.0);
        }
    }

    #[test]
    fn endpoints_preserved_exactly() {
        let pts = vec![
            GeoPoint::new(22.5726, 88.3639),
            GeoPoint::new(22.5741, 88.3662),
            GeoPoint::new(22.5790, 88.3701),
            GeoPoint::new(22.5802, 88.3755),
        ];
        for step in [7.0, 50.0, 100.0, 333.3, 5_000.0] {
            let out = resample(&pts, step);
            assert_eq!(out[0], pts[0], "step {step}");
            assert_eq!(*out.last().unwrap(), pts[3], "step {step}");
        }
    }

    #[test]
    fn spacing_is_step_within_a_segment() {
        let a = origin();
        let b = north_of(a, 1_234.0);
        let out = resample(&[a, b], 100.0);
        // Every gap except the final (partial) one is a full step.
        for w in out[..out.len() - 1].windows(2) {
            assert_abs_diff_eq!(w[0].distance_m(w[1]), 100.0, epsilon = 1e-3);
        }
        assert_abs_diff_eq!(out[out.len() - 2].distance_m(b), 34.0, epsilon = 1e-3);
    }

    #[test]
    fn spacing_carries_across_segments() {
        let a = origin();
        let pts = vec![a, north_of(a, 250.0), north_of(a, 430.0), north_of(a, 1_000.0)];
        let out = resample(&pts, 100.0);
        assert_eq!(out.len(), 11);
        for w in out.windows(2) {
            assert_abs_diff_eq!(w[0].distance_m(w[1]), 100.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn short_segments_accumulate_carry() {
        let a = origin();
        let pts: Vec<GeoPoint> = (0..=10).map(|i| north_of(a, 30.0 * i as f64)).collect();
        let out = resample(&pts, 100.0);
        // 0 m, 100 m, 200 m, 300 m (the last vertex).
        assert_eq!(out.len(), 4);
        assert_abs_diff_eq!(a.distance_m(out[1]), 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(a.distance_m(out[2]), 200.0, epsilon = 1e-3);
    }

    #[test]
    fn duplicate_points_do_not_affect_output() {
        let a = origin();
        let b = north_of(a, 450.0);
        let plain = resample(&[a, b], 100.0);
        let duplicated = resample(&[a, a, b, b], 100.0);
        assert_eq!(plain, duplicated);
    }

    #[test]
    fn all_identical_points_collapse_to_one() {
        let a = origin();
        assert_eq!(resample(&[a, a, a], 100.0), vec![a]);
    }

    #[test]
    fn non_positive_step_keeps_endpoints_only() {
        let a = origin();
        let b = north_of(a, 500.0);
        let c = north_of(a, 900.0);
        assert_eq!(resample(&[a, b, c], 0.0), vec![a, c]);
        assert_eq!(resample(&[a, b, c], -10.0), vec![a, c]);
        assert_eq!(resample(&[a, b, c], f64::NAN), vec![a, c]);
    }

    #[test]
    fn step_longer_than_route() {
        let a = origin();
        let b = north_of(a, 40.0);
        assert_eq!(resample(&[a, b], 100.0), vec![a, b]);
    }

    #[test]
    fn path_length_sums_segments() {
        let a = origin();
        let pts = vec![a, north_of(a, 250.0), north_of(a, 1_000.0)];
        assert_abs_diff_eq!(path_length_m(&pts), 1_000.0, epsilon = 1e-3);
        assert_eq!(path_length_m(&[a]), 0.0);
        assert_eq!(path_length_m(&[]), 0.0);
    }
}

// ── loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{RouteError, load_geometry_reader, parse_coordinate, straight_route};

    #[test]
    fn reads_lat_lon_rows_in_order() {
        let csv = "lat,lon\n22.5726,88.3639\n22.5741, 88.3662\n";
        let pts = load_geometry_reader(Cursor::new(csv)).unwrap();
        assert_eq!(pts, vec![GeoPoint::new(22.5726, 88.3639), GeoPoint::new(22.5741, 88.3662)]);
    }

    #[test]
    fn accepts_long_header_names() {
        let csv = "latitude,longitude\n1.5,2.5\n";
        let pts = load_geometry_reader(Cursor::new(csv)).unwrap();
        assert_eq!(pts, vec![GeoPoint::new(1.5, 2.5)]);
    }

    #[test]
    fn header_only_is_empty_geometry() {
        let pts = load_geometry_reader(Cursor::new("lat,lon\n")).unwrap();
        assert!(pts.is_empty());
    }

    #[test]
    fn out_of_range_row_reports_row_number() {
        let csv = "lat,lon\n1.0,2.0\n91.0,2.0\n";
        match load_geometry_reader(Cursor::new(csv)) {
            Err(RouteError::Parse { row, .. }) => assert_eq!(row, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_row_is_a_parse_error() {
        let csv = "lat,lon\nabc,2.0\n";
        assert!(matches!(
            load_geometry_reader(Cursor::new(csv)),
            Err(RouteError::Parse { row: 2, .. })
        ));
    }

    #[test]
    fn parse_coordinate_pair() {
        assert_eq!(parse_coordinate("22.57, 88.36").unwrap(), GeoPoint::new(22.57, 88.36));
        assert!(matches!(parse_coordinate("Kolkata"), Err(RouteError::InvalidCoordinate(_))));
        assert!(parse_coordinate("22.57").is_err());
        assert!(parse_coordinate("200,10").is_err());
    }

    #[test]
    fn straight_route_has_two_vertices() {
        let route = straight_route("0,0", "0.01,0").unwrap();
        assert_eq!(route, vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.01, 0.0)]);
    }
}
