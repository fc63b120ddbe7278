//! Contains the error type shared by every generator.

use alloc::string::String;

use thiserror::Error;

/// Represents why a generation could not produce an image.
///
/// Every variant is deterministic: retrying with the same parameters fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    /// A canvas or grid dimension is out of its allowed range.
    #[error("invalid {name}: {value}")]
    InvalidDimension {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// Fractal noise needs between 1 and [`MAX_OCTAVES`](crate::params::MAX_OCTAVES) octaves.
    #[error("invalid octave count: {0} (must be from 1 to 8)")]
    InvalidOctaveCount(u32),
    /// Persistence must be finite and non-negative.
    #[error("invalid persistence: {0}")]
    InvalidPersistence(f32),
    /// The `F2 / F1` combination was evaluated where the nearest point coincides with the pixel.
    #[error("degenerate division at pixel ({x}, {y}): nearest distance is zero")]
    DegenerateDivision {
        /// The pixel column.
        x: u32,
        /// The pixel row.
        y: u32,
    },
    /// A combination mode label that names no [`WorleyMode`](crate::cell_noise::WorleyMode).
    #[error("unknown cellular mode: {0:?}")]
    UnknownMode(String),
}
