//! Contains the lookup tables behind gradient noise.

use std::sync::LazyLock;

use alloc::{boxed::Box, vec::Vec};
use bevy_math::Vec2;

use crate::rng::NoiseRng;

/// The number of distinct lattice indices and gradient directions.
pub const TABLE_SIZE: usize = 256;

/// A shuffled permutation of `0..TABLE_SIZE`, stored twice in a row.
///
/// The duplication lets `perm[perm[x] + y]` index without wrapping for any `x, y < TABLE_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable(Box<[u16]>);

impl PermutationTable {
    /// Shuffles `0..TABLE_SIZE` with `rng` and duplicates the result.
    pub fn new(rng: &mut NoiseRng) -> Self {
        let mut half: Vec<u16> = (0..TABLE_SIZE as u16).collect();
        rng.shuffle(&mut half);
        let mut table = Vec::with_capacity(TABLE_SIZE * 2);
        table.extend_from_slice(&half);
        table.extend_from_slice(&half);
        Self(table.into_boxed_slice())
    }

    /// Builds the table for a fresh stream seeded by `seed`.
    #[inline]
    pub fn from_seed(seed: u32) -> Self {
        Self::new(&mut NoiseRng::new(seed))
    }

    /// Gets the entry at `index`. Valid indices are `0..2 * TABLE_SIZE`.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.0[index] as usize
    }

    /// Hashes a lattice corner, each coordinate already reduced modulo [`TABLE_SIZE`], to a gradient index.
    #[inline]
    pub fn hash(&self, x: usize, y: usize) -> usize {
        self.get(self.get(x) + y)
    }

    /// The full table, both halves.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }
}

/// Unit vectors at evenly spaced angles around the circle.
/// This depends only on [`TABLE_SIZE`], so one instance is shared by everything.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable([Vec2; TABLE_SIZE]);

static SHARED_GRADIENTS: LazyLock<GradientTable> = LazyLock::new(GradientTable::new);

impl GradientTable {
    /// Computes the vector for angle `2π·i/TABLE_SIZE` at each index `i`.
    pub fn new() -> Self {
        let step = core::f32::consts::TAU / TABLE_SIZE as f32;
        Self(core::array::from_fn(|i| {
            let (sin, cos) = (i as f32 * step).sin_cos();
            Vec2::new(cos, sin)
        }))
    }

    /// The process-wide read-only table.
    #[inline]
    pub fn shared() -> &'static Self {
        &SHARED_GRADIENTS
    }

    /// Gets the gradient at `index`, which must be below [`TABLE_SIZE`].
    #[inline]
    pub fn get(&self, index: usize) -> Vec2 {
        self.0[index]
    }
}

impl Default for GradientTable {
    fn default() -> Self {
        Self::new()
    }
}
