//! Contains common imports

pub use crate::{
    GenerationCache, NoiseError, NoiseKind, OutputImage,
    cell_noise::{CellularNoise, WorleyMode},
    curves::{FadeCurve, Linear, Quintic, Smoothstep},
    field::{FieldSource, NoiseField},
    generate_cellular, generate_gradient, generate_white,
    lattice::LatticeGradients,
    layering::{FractalLayers, GradientNoise},
    params::{Canvas, CellularParams, GradientParams, PointLayout, WhiteParams},
    points::PointSet,
    rng::NoiseRng,
};
