//! Batch runs: many independent trips under one batch seed.
//!
//! Trip `i` draws from `TripRng::for_trip(batch_seed, i)`, so a batch's
//! output does not depend on thread scheduling.  A trip's own
//! `config.seed` is ignored here.

use fleet_core::TripRng;
use tracing::info;

use crate::{Trip, TripOutput, TripResult};

/// Run every trip, returning results in input order.
///
/// One failing trip does not stop the others.  With the `parallel` Cargo
/// feature the trips run on Rayon's thread pool.
pub fn run_fleet(trips: &[Trip], batch_seed: u64) -> Vec<TripResult<TripOutput>> {
    info!(trips = trips.len(), batch_seed, "running fleet batch");

    #[cfg(not(feature = "parallel"))]
    {
        trips
            .iter()
            .enumerate()
            .map(|(i, trip)| trip.run_with_rng(&mut TripRng::for_trip(batch_seed, i as u64)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        trips
            .par_iter()
            .enumerate()
            .map(|(i, trip)| trip.run_with_rng(&mut TripRng::for_trip(batch_seed, i as u64)))
            .collect()
    }
}
