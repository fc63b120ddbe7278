//! Contains logic for layering octaves of noise on top of each other.

use bevy_math::{Curve, Vec2};

use crate::{
    curves::Quintic, error::NoiseError, field::FieldSource, lattice::LatticeGradients,
    params::GradientParams, rng::NoiseRng,
};

/// Represents fractal brownian motion over a [`LatticeGradients`].
///
/// Octave `i` samples at `frequency · LACUNARITY^i` and contributes `persistence · GAIN^i` of its value.
///
/// ```
/// # use bevy_math::Vec2;
/// # use texnoise::{lattice::LatticeGradients, layering::FractalLayers};
/// let lattice = LatticeGradients::<texnoise::curves::Quintic>::from_seed(1);
/// let fbm = FractalLayers {
///     octaves: 4,
///     persistence: 1.0,
///     frequency: Vec2::splat(16.0 / 512.0),
/// };
/// let value = fbm.fractal(&lattice, Vec2::new(100.0, 42.0));
/// assert!(value.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalLayers {
    /// The number of octaves. Must be at least 1 to produce anything.
    pub octaves: u32,
    /// The weight of the first octave.
    pub persistence: f32,
    /// The base frequency, per axis, mapping input locations onto the lattice.
    pub frequency: Vec2,
}

impl FractalLayers {
    /// Each octave is sampled at this many times the frequency of the last.
    pub const LACUNARITY: f32 = 2.0;
    /// Each octave contributes this much as the last.
    pub const GAIN: f32 = 0.5;

    /// Sums every octave of `lattice` at `loc`.
    #[inline]
    pub fn fractal<C: Curve<f32>>(&self, lattice: &LatticeGradients<C>, loc: Vec2) -> f32 {
        let mut total = 0.0;
        let mut amplitude = self.persistence;
        let mut frequency = self.frequency;
        for _ in 0..self.octaves {
            total += amplitude * lattice.sample(loc * frequency);
            amplitude *= Self::GAIN;
            frequency *= Self::LACUNARITY;
        }
        total
    }

    /// The sum of every octave's weight, which bounds the magnitude of [`fractal`](Self::fractal) relative to one sample.
    pub fn total_weight(&self) -> f32 {
        let mut total = 0.0;
        let mut amplitude = self.persistence;
        for _ in 0..self.octaves {
            total += amplitude;
            amplitude *= Self::GAIN;
        }
        total
    }
}

/// Gradient noise: [`FractalLayers`] of a [`LatticeGradients`] sampled at each pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientNoise<C = Quintic> {
    /// The lattice, built from the seed.
    pub lattice: LatticeGradients<C>,
    /// The octaves, scaled so that the first spans the canvas with the configured grid size.
    pub layers: FractalLayers,
}

impl<C: Default> GradientNoise<C> {
    /// Builds the lattice for `params`, which should already be validated.
    pub fn new(params: &GradientParams) -> Self {
        Self {
            lattice: LatticeGradients::new(&mut NoiseRng::new(params.seed), C::default()),
            layers: FractalLayers {
                octaves: params.octaves,
                persistence: params.persistence,
                frequency: params.canvas.cells_per_pixel(params.grid_size),
            },
        }
    }
}

impl<C: Curve<f32> + Sync> FieldSource for GradientNoise<C> {
    #[inline]
    fn sample_pixel(&self, x: u32, y: u32) -> Result<f32, NoiseError> {
        Ok(self
            .layers
            .fractal(&self.lattice, Vec2::new(x as f32, y as f32)))
    }
}
