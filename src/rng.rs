//! Defines the seeded random stream that builds tables and point sets.
//!
//! Unlike per-sample hashing, every builder here consumes one sequential stream,
//! so the order of draws is part of the output. Keep it stable.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// A seeded random stream.
/// Two streams made from the same seed produce the same draws in the same order.
#[derive(Debug, Clone)]
pub struct NoiseRng(StdRng);

impl NoiseRng {
    /// Starts a fresh stream for this `seed`.
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self(StdRng::seed_from_u64(u64::from(seed)))
    }

    /// Draws an `f32` in range [0, 1).
    #[inline]
    pub fn unorm(&mut self) -> f32 {
        self.0.random::<f32>()
    }

    /// Draws an arbitrary byte.
    #[inline]
    pub fn byte(&mut self) -> u8 {
        self.0.random::<u8>()
    }

    /// Uniformly shuffles `values` in place.
    #[inline]
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.0);
    }
}
