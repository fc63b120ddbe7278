//! Contains the seed points behind cellular noise.

use alloc::vec::Vec;
use bevy_math::Vec2;

use crate::rng::NoiseRng;

/// Seed points for cellular noise, fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub enum PointSet {
    /// One point per cell of a `grid_size × grid_size` grid, each jittered within its cell.
    /// Coordinates are in grid space: the point for cell `(cx, cy)` lies in `[cx, cx+1) × [cy, cy+1)`.
    JitteredGrid {
        /// The number of cells per side.
        grid_size: u32,
        /// The points, row-major by cell: index `cy * grid_size + cx`.
        points: Vec<Vec2>,
    },
    /// Points drawn independently and uniformly over the canvas, in canvas space.
    Scattered {
        /// The points, in draw order.
        points: Vec<Vec2>,
    },
}

impl PointSet {
    /// Draws one point per cell, visiting cells row by row.
    pub fn jittered_grid(grid_size: u32, rng: &mut NoiseRng) -> Self {
        let cells = grid_size as usize * grid_size as usize;
        let mut points = Vec::with_capacity(cells);
        for cy in 0..grid_size {
            for cx in 0..grid_size {
                let x = jitter_within(cx as f32, rng.unorm());
                let y = jitter_within(cy as f32, rng.unorm());
                points.push(Vec2::new(x, y));
            }
        }
        Self::JitteredGrid { grid_size, points }
    }

    /// Draws `num_points` points uniformly over `[0, extent.x) × [0, extent.y)`.
    pub fn scattered(num_points: u32, extent: Vec2, rng: &mut NoiseRng) -> Self {
        let points = (0..num_points)
            .map(|_| Vec2::new(rng.unorm(), rng.unorm()) * extent)
            .collect();
        Self::Scattered { points }
    }

    /// All the points, regardless of layout.
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        match self {
            Self::JitteredGrid { points, .. } | Self::Scattered { points } => points,
        }
    }

    /// Gets the point of grid cell `(cx, cy)`, each already reduced modulo the grid size.
    /// Returns `None` for scattered sets, which have no cells.
    #[inline]
    pub fn cell_point(&self, cx: u32, cy: u32) -> Option<Vec2> {
        match self {
            Self::JitteredGrid { grid_size, points } => {
                let index = cy as usize * *grid_size as usize + cx as usize;
                points.get(index).copied()
            }
            Self::Scattered { .. } => None,
        }
    }
}

/// Offsets `cell` by `t` in [0, 1), staying strictly below the next cell edge.
#[inline]
fn jitter_within(cell: f32, t: f32) -> f32 {
    let edge = cell + 1.0;
    let value = cell + t;
    if value < edge {
        value
    } else {
        // Rounding carried the sum onto the edge; step back one ulp.
        f32::from_bits(edge.to_bits() - 1)
    }
}
