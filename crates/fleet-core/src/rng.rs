//! Deterministic per-run RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every simulation run owns exactly one `TripRng`.  It is never shared and
//! never global, so independent trips can run on different threads without
//! coordination.
//!
//! - `TripRng::seeded(seed)`: identical seed + inputs ⇒ identical output.
//! - `TripRng::from_entropy()`: OS entropy; the run is not reproducible.
//! - `TripRng::for_trip(batch_seed, index)`: per-trip seed inside a batch:
//!
//!   seed = batch_seed XOR (index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trip indices uniformly across the seed space.
//! Adding trips to the end of a batch does not disturb earlier trips' seeds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Random source owned by a single simulation run.
///
/// The type is `!Sync` by virtue of `&mut self` access; hand each worker its
/// own instance.
pub struct TripRng(SmallRng);

impl TripRng {
    /// Seeded generator; the same seed always yields the same stream.
    pub fn seeded(seed: u64) -> Self {
        TripRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        TripRng(SmallRng::from_entropy())
    }

    /// `seeded` when a seed is given, `from_entropy` otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    /// Derive the seed for trip `index` of a batch seeded with `batch_seed`.
    #[inline]
    pub fn trip_seed(batch_seed: u64, index: u64) -> u64 {
        batch_seed ^ index.wrapping_mul(MIXING_CONSTANT)
    }

    /// Seeded generator for trip `index` of a batch.
    pub fn for_trip(batch_seed: u64, index: u64) -> Self {
        Self::seeded(Self::trip_seed(batch_seed, index))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform `f64` in `[lo, hi]`.  `lo == hi` returns `lo`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }

    /// Uniform integer in `[lo, hi]` (both inclusive).  `lo >= hi` returns `lo`.
    #[inline]
    pub fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }
}
