//! Contains the cellular distance sampler and the ways its distances combine into a value.

use core::{fmt, str::FromStr};

use alloc::string::ToString;
use bevy_math::Vec2;

use crate::{
    error::NoiseError,
    field::FieldSource,
    params::{CellularParams, PointLayout},
    points::PointSet,
    rng::NoiseRng,
};

/// The distances to the nearest and second nearest seed points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestTwo {
    /// The nearest distance, F1.
    pub d1: f32,
    /// The second nearest distance, F2. Never less than [`d1`](Self::d1).
    pub d2: f32,
}

impl NearestTwo {
    /// Both distances start out infinitely far.
    pub const FAR: Self = Self {
        d1: f32::INFINITY,
        d2: f32::INFINITY,
    };

    /// Considers another candidate distance, keeping the two smallest in order.
    #[inline]
    pub fn include(&mut self, distance: f32) {
        if distance < self.d1 {
            self.d2 = self.d1;
            self.d1 = distance;
        } else if distance < self.d2 {
            self.d2 = distance;
        }
    }
}

/// Finds the two nearest points of `points` to `loc`.
///
/// For a [`PointSet::JitteredGrid`], `loc` is in grid space and only the 3×3 cells around it are searched,
/// with cell indices wrapping around the grid. Each cell is searched once, even when a small grid wraps onto itself. Point coordinates are used as stored,
/// so cells wrapped in from the far side of the grid are measured at their true, far, distance.
///
/// For a [`PointSet::Scattered`], `loc` is in canvas space and every point is checked.
///
/// When fewer than two points are found, the missing distances stay infinite.
pub fn nearest_two(loc: Vec2, points: &PointSet) -> NearestTwo {
    let mut nearest = NearestTwo::FAR;
    match points {
        PointSet::JitteredGrid { grid_size, .. } => {
            let grid = i64::from(*grid_size);
            let cell_x = (loc.x.floor() as i64).rem_euclid(grid);
            let cell_y = (loc.y.floor() as i64).rem_euclid(grid);
            for near_x in neighbor_cells(cell_x, grid) {
                for near_y in neighbor_cells(cell_y, grid) {
                    if let Some(point) = points.cell_point(near_x, near_y) {
                        nearest.include(loc.distance(point));
                    }
                }
            }
        }
        PointSet::Scattered { points } => {
            for point in points {
                nearest.include(loc.distance(*point));
            }
        }
    }
    nearest
}

/// The distinct cell indices within one cell of `cell` along an axis of `grid` cells, wrapping around.
/// Small grids wrap onto themselves, so fewer than three may remain.
#[inline]
fn neighbor_cells(cell: i64, grid: i64) -> impl Iterator<Item = u32> {
    let mut cells = [0u32; 3];
    let mut len = 0;
    for offset in -1..=1 {
        let near = (cell + offset).rem_euclid(grid) as u32;
        if !cells[..len].contains(&near) {
            cells[len] = near;
            len += 1;
        }
    }
    cells.into_iter().take(len)
}

/// Selects how [`NearestTwo`] distances become a single value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum WorleyMode {
    /// The nearest distance. This makes round, bright-edged cells.
    #[default]
    #[cfg_attr(feature = "serialize", serde(rename = "F1"))]
    F1,
    /// The second nearest distance.
    #[cfg_attr(feature = "serialize", serde(rename = "F2"))]
    F2,
    /// `F2 + F1`.
    #[cfg_attr(feature = "serialize", serde(rename = "F2 + F1"))]
    Sum,
    /// `F2 - F1`. This is zero along cell borders.
    #[cfg_attr(feature = "serialize", serde(rename = "F2 - F1"))]
    Difference,
    /// `F2 * F1`.
    #[cfg_attr(feature = "serialize", serde(rename = "F2 * F1"))]
    Product,
    /// `F2 / F1`. Undefined where F1 is zero.
    #[cfg_attr(feature = "serialize", serde(rename = "F2 / F1"))]
    Quotient,
}

impl WorleyMode {
    /// Every mode, in display order.
    pub const ALL: [Self; 6] = [
        Self::F1,
        Self::F2,
        Self::Sum,
        Self::Difference,
        Self::Product,
        Self::Quotient,
    ];

    /// The conventional label, like `"F2 - F1"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::Sum => "F2 + F1",
            Self::Difference => "F2 - F1",
            Self::Product => "F2 * F1",
            Self::Quotient => "F2 / F1",
        }
    }

    /// Combines the distances.
    /// Returns `None` only for [`Quotient`](Self::Quotient) when `d1` is zero.
    #[inline]
    pub fn combine(self, distances: NearestTwo) -> Option<f32> {
        let NearestTwo { d1, d2 } = distances;
        match self {
            Self::F1 => Some(d1),
            Self::F2 => Some(d2),
            Self::Sum => Some(d2 + d1),
            Self::Difference => Some(d2 - d1),
            Self::Product => Some(d2 * d1),
            Self::Quotient => (d1 != 0.0).then(|| d2 / d1),
        }
    }
}

/// Cellular noise: each pixel is a [`WorleyMode`] combination of its distances to the nearest seed points.
#[derive(Debug, Clone, PartialEq)]
pub struct CellularNoise {
    points: PointSet,
    mode: WorleyMode,
    /// Maps pixel locations into the space the points live in.
    scale: Vec2,
}

impl CellularNoise {
    /// Builds the point set for `params`, which should already be validated.
    pub fn new(params: &CellularParams) -> Self {
        let mut rng = NoiseRng::new(params.seed);
        let (points, scale) = match params.layout {
            PointLayout::JitteredGrid { grid_size } => (
                PointSet::jittered_grid(grid_size, &mut rng),
                params.canvas.cells_per_pixel(grid_size),
            ),
            PointLayout::Scattered { num_points } => (
                PointSet::scattered(num_points, params.canvas.extent(), &mut rng),
                Vec2::ONE,
            ),
        };
        Self {
            points,
            mode: params.mode,
            scale,
        }
    }

    /// The seed points, in the space returned by [`Self::point_space`].
    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// The combination mode.
    #[inline]
    pub fn mode(&self) -> WorleyMode {
        self.mode
    }

    /// Maps a pixel location into the space of the seed points.
    #[inline]
    pub fn point_space(&self, pixel: Vec2) -> Vec2 {
        pixel * self.scale
    }

    /// The nearest two distances for the pixel at column `x`, row `y`.
    #[inline]
    pub fn distances(&self, x: u32, y: u32) -> NearestTwo {
        let loc = self.point_space(Vec2::new(x as f32, y as f32));
        nearest_two(loc, &self.points)
    }
}

impl FieldSource for CellularNoise {
    #[inline]
    fn sample_pixel(&self, x: u32, y: u32) -> Result<f32, NoiseError> {
        self.mode
            .combine(self.distances(x, y))
            .ok_or(NoiseError::DegenerateDivision { x, y })
    }
}

impl fmt::Display for WorleyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorleyMode {
    type Err = NoiseError;

    /// Parses a [`label`](Self::label). Surrounding whitespace and the spacing around the operator are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: alloc::string::String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().replace(' ', "").eq_ignore_ascii_case(&compact))
            .ok_or_else(|| NoiseError::UnknownMode(s.to_string()))
    }
}
