//! Contains the parameters that fully determine each generator's output.
//!
//! Defaults match the usual starting point for a 512 pixel texture.

use core::ops::RangeInclusive;

use bevy_math::Vec2;

use crate::{cell_noise::WorleyMode, curves::FadeCurve, error::NoiseError};

/// The default canvas side length, in pixels.
pub const DEFAULT_SIZE: u32 = 512;
/// The default number of lattice or grid cells per canvas side.
pub const DEFAULT_GRID_SIZE: u32 = 16;
/// The default number of fractal octaves.
pub const DEFAULT_OCTAVES: u32 = 4;
/// The default seed.
pub const DEFAULT_SEED: u32 = 1;
/// The longest canvas side, in pixels.
pub const MAX_SIZE: u32 = 4096;
/// The fewest grid cells per side. The neighborhood search needs two distinct cells to find two points.
pub const MIN_GRID_SIZE: u32 = 2;
/// The most lattice cells per side for gradient noise. The lattice repeats past this.
pub const MAX_GRADIENT_GRID_SIZE: u32 = 256;
/// The most grid cells per side for cellular noise.
pub const MAX_CELLULAR_GRID_SIZE: u32 = 64;
/// The most fractal octaves.
pub const MAX_OCTAVES: u32 = 8;
/// The most points a [`PointLayout::Scattered`] set may hold, since every pixel checks all of them.
pub const MAX_SCATTERED_POINTS: u32 = 64;

/// Checks that a dimension lies in `range`.
#[inline]
fn within(name: &'static str, value: u32, range: RangeInclusive<u32>) -> Result<(), NoiseError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(NoiseError::InvalidDimension { name, value })
    }
}

/// The size of the canvas being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// A square canvas.
    pub const fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// The canvas size as a vector.
    #[inline]
    pub fn extent(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// The number of pixels.
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Errors if either side is zero or longer than [`MAX_SIZE`].
    pub fn validate(self) -> Result<(), NoiseError> {
        within("width", self.width, 1..=MAX_SIZE)?;
        within("height", self.height, 1..=MAX_SIZE)
    }

    /// Maps pixel locations so that `cells` lattice or grid cells span each side.
    #[inline]
    pub fn cells_per_pixel(self, cells: u32) -> Vec2 {
        Vec2::splat(cells as f32) / self.extent()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::square(DEFAULT_SIZE)
    }
}

/// Parameters for gradient (perlin-style) fractal noise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct GradientParams {
    /// The canvas.
    #[cfg_attr(feature = "serialize", serde(flatten))]
    pub canvas: Canvas,
    /// Lattice cells per canvas side at the first octave, from [`MIN_GRID_SIZE`] to [`MAX_GRADIENT_GRID_SIZE`].
    pub grid_size: u32,
    /// How many octaves to sum, from 1 to [`MAX_OCTAVES`].
    pub octaves: u32,
    /// The weight of the first octave. Finite and non-negative.
    pub persistence: f32,
    /// Drives the permutation table.
    pub seed: u32,
    /// How corners blend within a lattice cell.
    pub fade: FadeCurve,
    /// Requests seamless tiling. Accepted but not yet applied: edges do not wrap.
    pub tileable: bool,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            grid_size: DEFAULT_GRID_SIZE,
            octaves: DEFAULT_OCTAVES,
            persistence: 1.0,
            seed: DEFAULT_SEED,
            fade: FadeCurve::default(),
            tileable: false,
        }
    }
}

impl GradientParams {
    /// Sets a square canvas.
    pub fn with_size(mut self, size: u32) -> Self {
        self.canvas = Canvas::square(size);
        self
    }

    /// Sets the canvas.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = Canvas { width, height };
        self
    }

    /// Sets the grid size.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the octave count.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the persistence.
    pub fn with_persistence(mut self, persistence: f32) -> Self {
        self.persistence = persistence;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the fade curve.
    pub fn with_fade(mut self, fade: FadeCurve) -> Self {
        self.fade = fade;
        self
    }

    /// Sets whether tiling is requested.
    pub fn with_tileable(mut self, tileable: bool) -> Self {
        self.tileable = tileable;
        self
    }

    /// Rejects parameters no generation could honor.
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.canvas.validate()?;
        within("grid_size", self.grid_size, MIN_GRID_SIZE..=MAX_GRADIENT_GRID_SIZE)?;
        if !(1..=MAX_OCTAVES).contains(&self.octaves) {
            return Err(NoiseError::InvalidOctaveCount(self.octaves));
        }
        if !self.persistence.is_finite() || self.persistence < 0.0 {
            return Err(NoiseError::InvalidPersistence(self.persistence));
        }
        Ok(())
    }
}

/// How the seed points of cellular noise are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
pub enum PointLayout {
    /// One jittered point per cell of a `grid_size × grid_size` grid, searched by neighborhood.
    JitteredGrid {
        /// Cells per canvas side, from [`MIN_GRID_SIZE`] to [`MAX_CELLULAR_GRID_SIZE`].
        grid_size: u32,
    },
    /// `num_points` points anywhere on the canvas, searched exhaustively.
    Scattered {
        /// How many points. At most [`MAX_SCATTERED_POINTS`].
        num_points: u32,
    },
}

impl Default for PointLayout {
    fn default() -> Self {
        Self::JitteredGrid {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl PointLayout {
    /// Errors if the layout has too few points to search or too many to scan.
    pub fn validate(self) -> Result<(), NoiseError> {
        match self {
            Self::JitteredGrid { grid_size } => {
                within("grid_size", grid_size, MIN_GRID_SIZE..=MAX_CELLULAR_GRID_SIZE)
            }
            Self::Scattered { num_points } => {
                within("num_points", num_points, 1..=MAX_SCATTERED_POINTS)
            }
        }
    }
}

/// Parameters for cellular (worley-style) noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct CellularParams {
    /// The canvas.
    #[cfg_attr(feature = "serialize", serde(flatten))]
    pub canvas: Canvas,
    /// Where the seed points go.
    pub layout: PointLayout,
    /// Drives the point positions.
    pub seed: u32,
    /// Requests seamless tiling. Accepted but not yet applied: edges do not wrap.
    pub tileable: bool,
    /// How the two nearest distances combine.
    pub mode: WorleyMode,
}

impl Default for CellularParams {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            layout: PointLayout::default(),
            seed: DEFAULT_SEED,
            tileable: false,
            mode: WorleyMode::default(),
        }
    }
}

impl CellularParams {
    /// Sets a square canvas.
    pub fn with_size(mut self, size: u32) -> Self {
        self.canvas = Canvas::square(size);
        self
    }

    /// Sets the canvas.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = Canvas { width, height };
        self
    }

    /// Uses a jittered grid with `grid_size` cells per side.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.layout = PointLayout::JitteredGrid { grid_size };
        self
    }

    /// Uses `num_points` scattered points.
    pub fn with_num_points(mut self, num_points: u32) -> Self {
        self.layout = PointLayout::Scattered { num_points };
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether tiling is requested.
    pub fn with_tileable(mut self, tileable: bool) -> Self {
        self.tileable = tileable;
        self
    }

    /// Sets the combination mode.
    pub fn with_mode(mut self, mode: WorleyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rejects parameters no generation could honor.
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.canvas.validate()?;
        self.layout.validate()
    }
}

/// Parameters for seeded white noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct WhiteParams {
    /// The canvas.
    #[cfg_attr(feature = "serialize", serde(flatten))]
    pub canvas: Canvas,
    /// Drives every pixel.
    pub seed: u32,
    /// Draws each channel independently instead of one gray value per pixel.
    pub colored: bool,
}

impl Default for WhiteParams {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            seed: DEFAULT_SEED,
            colored: false,
        }
    }
}

impl WhiteParams {
    /// Sets a square canvas.
    pub fn with_size(mut self, size: u32) -> Self {
        self.canvas = Canvas::square(size);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether channels are independent.
    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Rejects parameters no generation could honor.
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.canvas.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GradientParams::default().validate(), Ok(()));
        assert_eq!(CellularParams::default().validate(), Ok(()));
        assert_eq!(WhiteParams::default().validate(), Ok(()));
        assert_eq!(GradientParams::default().canvas, Canvas::square(512));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GradientParams::default().with_size(0).validate(),
            Err(NoiseError::InvalidDimension {
                name: "width",
                value: 0
            })
        );
        assert_eq!(
            GradientParams::default().with_canvas(8, 0).validate(),
            Err(NoiseError::InvalidDimension {
                name: "height",
                value: 0
            })
        );
        assert_eq!(
            GradientParams::default().with_grid_size(0).validate(),
            Err(NoiseError::InvalidDimension {
                name: "grid_size",
                value: 0
            })
        );
        assert_eq!(
            CellularParams::default().with_grid_size(0).validate(),
            Err(NoiseError::InvalidDimension {
                name: "grid_size",
                value: 0
            })
        );
        assert_eq!(
            CellularParams::default().with_num_points(0).validate(),
            Err(NoiseError::InvalidDimension {
                name: "num_points",
                value: 0
            })
        );
        assert!(WhiteParams::default().with_size(0).validate().is_err());
    }

    #[test]
    fn scattered_points_are_bounded() {
        let at_limit = CellularParams::default().with_num_points(MAX_SCATTERED_POINTS);
        assert_eq!(at_limit.validate(), Ok(()));
        let over = CellularParams::default().with_num_points(MAX_SCATTERED_POINTS + 1);
        assert!(matches!(
            over.validate(),
            Err(NoiseError::InvalidDimension {
                name: "num_points",
                ..
            })
        ));
    }

    #[test]
    fn ranges_are_checked_at_their_limits() {
        let gradient = GradientParams::default();
        for grid_size in [MIN_GRID_SIZE, MAX_GRADIENT_GRID_SIZE] {
            assert_eq!(gradient.with_grid_size(grid_size).validate(), Ok(()));
        }
        for grid_size in [1, MAX_GRADIENT_GRID_SIZE + 1, u32::MAX] {
            assert_eq!(
                gradient.with_grid_size(grid_size).validate(),
                Err(NoiseError::InvalidDimension {
                    name: "grid_size",
                    value: grid_size
                })
            );
        }
        assert_eq!(gradient.with_octaves(MAX_OCTAVES).validate(), Ok(()));
        assert_eq!(
            gradient.with_octaves(MAX_OCTAVES + 1).validate(),
            Err(NoiseError::InvalidOctaveCount(MAX_OCTAVES + 1))
        );

        let cellular = CellularParams::default().with_size(8);
        for grid_size in [MIN_GRID_SIZE, MAX_CELLULAR_GRID_SIZE] {
            assert_eq!(cellular.with_grid_size(grid_size).validate(), Ok(()));
        }
        for grid_size in [1, MAX_CELLULAR_GRID_SIZE + 1, u32::MAX] {
            assert_eq!(
                cellular.with_grid_size(grid_size).validate(),
                Err(NoiseError::InvalidDimension {
                    name: "grid_size",
                    value: grid_size
                })
            );
        }

        assert_eq!(WhiteParams::default().with_size(MAX_SIZE).validate(), Ok(()));
        assert_eq!(
            GradientParams::default()
                .with_canvas(8, MAX_SIZE + 1)
                .validate(),
            Err(NoiseError::InvalidDimension {
                name: "height",
                value: MAX_SIZE + 1
            })
        );
    }

    #[test]
    fn octaves_and_persistence_are_checked() {
        assert_eq!(
            GradientParams::default().with_octaves(0).validate(),
            Err(NoiseError::InvalidOctaveCount(0))
        );
        assert_eq!(
            GradientParams::default().with_persistence(-0.5).validate(),
            Err(NoiseError::InvalidPersistence(-0.5))
        );
        assert!(matches!(
            GradientParams::default()
                .with_persistence(f32::NAN)
                .validate(),
            Err(NoiseError::InvalidPersistence(_))
        ));
        assert_eq!(
            GradientParams::default().with_persistence(0.0).validate(),
            Ok(())
        );
    }

    #[test]
    fn cells_per_pixel_spans_canvas() {
        let canvas = Canvas {
            width: 64,
            height: 32,
        };
        assert_eq!(canvas.cells_per_pixel(4), Vec2::new(4.0 / 64.0, 4.0 / 32.0));
        assert_eq!(canvas.area(), 2048);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn reads_partial_json_config() {
        let params: CellularParams =
            serde_json::from_str(r#"{ "width": 32, "height": 32, "seed": 7, "mode": "F2 - F1" }"#)
                .unwrap();
        assert_eq!(params.canvas, Canvas::square(32));
        assert_eq!(params.seed, 7);
        assert_eq!(params.mode, WorleyMode::Difference);
        assert_eq!(params.layout, PointLayout::default());

        let params: CellularParams =
            serde_json::from_str(r#"{ "layout": { "scattered": { "num_points": 12 } } }"#).unwrap();
        assert_eq!(params.layout, PointLayout::Scattered { num_points: 12 });
        assert_eq!(params.canvas, Canvas::default());

        let params: GradientParams = serde_json::from_str(
            r#"{ "octaves": 2, "persistence": 0.5, "fade": "smoothstep" }"#,
        )
        .unwrap();
        assert_eq!(
            params,
            GradientParams::default()
                .with_octaves(2)
                .with_persistence(0.5)
                .with_fade(FadeCurve::Smoothstep)
        );
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn config_survives_json() {
        let params = CellularParams::default()
            .with_size(64)
            .with_num_points(9)
            .with_mode(WorleyMode::Quotient);
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"F2 / F1\""));
        assert_eq!(serde_json::from_str::<CellularParams>(&json).unwrap(), params);
    }
}
