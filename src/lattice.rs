//! Contains the gradient lattice sampler, the core of perlin-style noise.

use bevy_math::{Curve, Vec2, VectorSpace};

use crate::{
    curves::Quintic,
    rng::NoiseRng,
    tables::{GradientTable, PermutationTable, TABLE_SIZE},
};

/// Samples smooth noise by mixing the gradients at the four corners of a lattice cell.
///
/// The lattice repeats every [`TABLE_SIZE`] cells. Within a cell, the local coordinates are faded by the [`Curve`] `C` before interpolating.
/// Results are typically in (-1, 1).
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeGradients<C = Quintic> {
    permutation: PermutationTable,
    gradients: &'static GradientTable,
    /// The fade [`Curve`].
    pub curve: C,
}

impl<C: Default> LatticeGradients<C> {
    /// Builds the lattice for this `seed` with the default curve.
    pub fn from_seed(seed: u32) -> Self {
        Self::new(&mut NoiseRng::new(seed), C::default())
    }
}

impl<C> LatticeGradients<C> {
    /// Builds the lattice from the next draws of `rng`.
    pub fn new(rng: &mut NoiseRng, curve: C) -> Self {
        Self {
            permutation: PermutationTable::new(rng),
            gradients: GradientTable::shared(),
            curve,
        }
    }

    /// The permutation table in use.
    #[inline]
    pub fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    #[inline]
    fn corner_dot(&self, corner: (usize, usize), offset: Vec2) -> f32 {
        let index = self.permutation.hash(corner.0, corner.1);
        self.gradients.get(index).dot(offset)
    }
}

impl<C: Curve<f32>> LatticeGradients<C> {
    /// Samples the lattice at `loc`.
    #[inline]
    pub fn sample(&self, loc: Vec2) -> f32 {
        let floored = loc.floor();
        let offset = loc - floored;

        let x0 = wrap(floored.x);
        let y0 = wrap(floored.y);
        let x1 = (x0 + 1) % TABLE_SIZE;
        let y1 = (y0 + 1) % TABLE_SIZE;

        // points
        let ld = self.corner_dot((x0, y0), offset);
        let lu = self.corner_dot((x0, y1), offset - Vec2::Y);
        let rd = self.corner_dot((x1, y0), offset - Vec2::X);
        let ru = self.corner_dot((x1, y1), offset - Vec2::ONE);
        let mix = offset.map(|t| self.curve.sample_unchecked(t));

        // lerp
        let l = VectorSpace::lerp(ld, rd, mix.x);
        let r = VectorSpace::lerp(lu, ru, mix.x);
        VectorSpace::lerp(l, r, mix.y)
    }
}

/// Reduces a floored coordinate to a lattice index.
#[inline]
fn wrap(floored: f32) -> usize {
    (floored as i64).rem_euclid(TABLE_SIZE as i64) as usize
}
