//! Fixed-step distance resampling of a route polyline.
//!
//! # Algorithm
//!
//! ```text
//! carry = 0                       // metres travelled since the last emitted point
//! for each segment (a → b) of length L > 0:
//!     d = step - carry
//!     while d ≤ L:
//!         emit lerp(a, b, d / L)  // exactly `b` when d is within step/1000 of L
//!         d += step
//!     carry = L - (last emitted d)   or   carry + L if nothing was emitted
//! ```
//!
//! Consecutive emitted points are therefore `step_m` apart measured along the
//! path.  The first input point is always the first output point and the last
//! input point is always the last, whether or not it falls on a step boundary.
//! Zero-length segments (duplicate consecutive points) are skipped without
//! touching `carry`.

use fleet_core::GeoPoint;
use tracing::{debug, warn};

/// Default spacing between resampled points, in metres.
pub const DEFAULT_STEP_M: f64 = 100.0;

/// Offsets within this fraction of a step of a segment end emit the end point
/// itself, so float noise in the segment length never yields a sliver gap.
const SNAP_FRACTION: f64 = 1e-3;

/// Resample `points` so consecutive outputs are `step_m` metres apart along
/// the path.
///
/// - Empty input → empty output.
/// - One point → that point alone.
/// - A non-positive or non-finite `step_m` yields only the two endpoints.
pub fn resample(points: &[GeoPoint], step_m: f64) -> Vec<GeoPoint> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut out = vec![first];

    if !(step_m > 0.0 && step_m.is_finite()) {
        warn!(step_m, "non-positive resampling step; keeping endpoints only");
        if last != first {
            out.push(last);
        }
        return out;
    }

    let snap_m = step_m * SNAP_FRACTION;
    let mut carry = 0.0_f64;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg = a.distance_m(b);
        if !(seg > 0.0 && seg.is_finite()) {
            continue;
        }

        let first_offset = step_m - carry;
        let mut last_offset: Option<f64> = None;
        let mut k = 0_u64;
        loop {
            // Multiply instead of accumulating so long segments don't drift.
            let d = first_offset + k as f64 * step_m;
            if d > seg + snap_m {
                break;
            }
            if seg - d <= snap_m {
                out.push(b);
                last_offset = Some(seg);
            } else {
                out.push(a.lerp(b, d / seg));
                last_offset = Some(d);
            }
            k += 1;
        }

        carry = match last_offset {
            Some(d) => seg - d,
            None => carry + seg,
        };
    }

    if out.last() != Some(&last) {
        out.push(last);
    }

    debug!(input = points.len(), output = out.len(), step_m, "resampled route");
    out
}

/// Total great-circle length of the polyline in metres.
pub fn path_length_m(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}
