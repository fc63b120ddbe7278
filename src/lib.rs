#![allow(
    clippy::doc_markdown,
    reason = "These rules should not apply to the readme."
)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod cache;
pub mod cell_noise;
pub mod curves;
pub mod error;
pub mod field;
pub mod image;
pub mod lattice;
pub mod layering;
pub mod misc_noise;
pub mod params;
pub mod points;
pub mod prelude;
pub mod rng;
pub mod tables;

pub use cache::GenerationCache;
pub use error::NoiseError;
pub use image::OutputImage;

use cell_noise::CellularNoise;
use curves::{FadeCurve, Linear, Quintic, Smoothstep};
use field::NoiseField;
use layering::GradientNoise;
use params::{Canvas, CellularParams, GradientParams, WhiteParams};

/// Selects a noise algorithm together with the parameters that fully determine its output.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(tag = "kind", rename_all = "snake_case"))]
pub enum NoiseKind {
    /// Fractal gradient noise. See [`generate_gradient`].
    Gradient(GradientParams),
    /// Cellular distance noise. See [`generate_cellular`].
    Cellular(CellularParams),
    /// Seeded white noise. See [`generate_white`].
    White(WhiteParams),
}

impl NoiseKind {
    /// Generates the image these parameters describe.
    pub fn generate(&self) -> Result<OutputImage, NoiseError> {
        match self {
            Self::Gradient(params) => generate_gradient(params),
            Self::Cellular(params) => generate_cellular(params),
            Self::White(params) => generate_white(params),
        }
    }

    /// Rejects parameters no generation could honor.
    pub fn validate(&self) -> Result<(), NoiseError> {
        match self {
            Self::Gradient(params) => params.validate(),
            Self::Cellular(params) => params.validate(),
            Self::White(params) => params.validate(),
        }
    }

    /// The canvas that will be generated.
    pub fn canvas(&self) -> Canvas {
        match self {
            Self::Gradient(params) => params.canvas,
            Self::Cellular(params) => params.canvas,
            Self::White(params) => params.canvas,
        }
    }
}

impl From<GradientParams> for NoiseKind {
    fn from(value: GradientParams) -> Self {
        Self::Gradient(value)
    }
}

impl From<CellularParams> for NoiseKind {
    fn from(value: CellularParams) -> Self {
        Self::Cellular(value)
    }
}

impl From<WhiteParams> for NoiseKind {
    fn from(value: WhiteParams) -> Self {
        Self::White(value)
    }
}

#[inline]
fn note_tiling(tileable: bool) {
    if tileable {
        tracing::debug!("tiling requested; edges are sampled without wrapping");
    }
}

/// Generates fractal gradient noise, stretched onto gray RGB.
///
/// ```
/// # use texnoise::{generate_gradient, params::GradientParams};
/// let params = GradientParams::default()
///     .with_size(64)
///     .with_grid_size(4)
///     .with_octaves(1)
///     .with_persistence(1.0)
///     .with_seed(1);
/// let image = generate_gradient(&params).unwrap();
/// assert_eq!(image.as_bytes().len(), 64 * 64 * 3);
/// assert_eq!(image, generate_gradient(&params).unwrap());
/// ```
#[tracing::instrument(
    level = "debug",
    skip(params),
    fields(width = params.canvas.width, height = params.canvas.height, seed = params.seed)
)]
pub fn generate_gradient(params: &GradientParams) -> Result<OutputImage, NoiseError> {
    params.validate()?;
    note_tiling(params.tileable);
    let field = match params.fade {
        FadeCurve::Quintic => {
            NoiseField::sample(params.canvas, &GradientNoise::<Quintic>::new(params))
        }
        FadeCurve::Smoothstep => {
            NoiseField::sample(params.canvas, &GradientNoise::<Smoothstep>::new(params))
        }
        FadeCurve::Linear => NoiseField::sample(params.canvas, &GradientNoise::<Linear>::new(params)),
    }?;
    Ok(field.normalize())
}

/// Generates cellular noise, stretched onto gray RGB.
///
/// Fails with [`NoiseError::DegenerateDivision`] if the [`Quotient`](cell_noise::WorleyMode::Quotient) mode meets a pixel exactly on a seed point.
///
/// ```
/// # use texnoise::{generate_cellular, params::CellularParams, cell_noise::WorleyMode};
/// let params = CellularParams::default()
///     .with_size(32)
///     .with_grid_size(4)
///     .with_seed(7)
///     .with_mode(WorleyMode::F1);
/// let image = generate_cellular(&params).unwrap();
/// assert!(image.pixels().any(|[gray, ..]| gray == 0));
/// ```
#[tracing::instrument(
    level = "debug",
    skip(params),
    fields(width = params.canvas.width, height = params.canvas.height, seed = params.seed, mode = %params.mode)
)]
pub fn generate_cellular(params: &CellularParams) -> Result<OutputImage, NoiseError> {
    params.validate()?;
    note_tiling(params.tileable);
    let noise = CellularNoise::new(params);
    let field = NoiseField::sample(params.canvas, &noise).inspect_err(|err| {
        if let NoiseError::DegenerateDivision { x, y } = err {
            tracing::warn!(x, y, "cellular noise divided by a zero distance");
        }
    })?;
    Ok(field.normalize())
}

/// Generates seeded white noise.
#[tracing::instrument(
    level = "debug",
    skip(params),
    fields(width = params.canvas.width, height = params.canvas.height, seed = params.seed)
)]
pub fn generate_white(params: &WhiteParams) -> Result<OutputImage, NoiseError> {
    params.validate()?;
    Ok(misc_noise::white(params))
}
