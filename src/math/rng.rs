//! Deterministic random source for placement and asset generation.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded generator owned by whoever needs reproducible draws.
///
/// ChaCha8 keeps the stream identical across platforms and `rand` releases,
/// so a seed always names the same patch.
#[derive(Clone, Debug)]
pub struct PatchRng {
    inner: ChaCha8Rng,
}

impl PatchRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Restart the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Uniform f32 in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        self.inner.random::<f32>()
    }

    /// Uniform f32 in [min, max). Returns `min` for an empty range.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.next_f32() * (max - min)
    }

    /// Uniform angle in [0, TAU).
    pub fn angle(&mut self) -> f32 {
        let a = self.next_f32() * TAU;
        // u close to 1 can round up to TAU in f32
        if a >= TAU { 0.0 } else { a }
    }
}
