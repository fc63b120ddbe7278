//! Contains the raw scalar field produced by sampling every pixel.

use alloc::{vec, vec::Vec};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{error::NoiseError, params::Canvas};

/// Something that produces one raw value per pixel.
///
/// Implementors are immutable once built, so pixels can be sampled in any order and on any thread.
pub trait FieldSource: Sync {
    /// Samples the pixel at column `x`, row `y`.
    fn sample_pixel(&self, x: u32, y: u32) -> Result<f32, NoiseError>;
}

/// A `width × height` row-major grid of raw values.
/// Values may be negative and have no fixed bound; see [`NoiseField::normalize`] to make an image.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    canvas: Canvas,
    values: Vec<f32>,
}

impl NoiseField {
    /// Samples every pixel of `canvas` from `source`.
    /// Any failing pixel fails the whole field, reporting the first failure in row-major order.
    /// `canvas` must have a non-zero width.
    pub fn sample(canvas: Canvas, source: &impl FieldSource) -> Result<Self, NoiseError> {
        let mut values = vec![0.0; canvas.area()];
        let width = canvas.width as usize;

        let fill_row = |(y, row): (usize, &mut [f32])| -> Result<(), NoiseError> {
            for (x, value) in row.iter_mut().enumerate() {
                *value = source.sample_pixel(x as u32, y as u32)?;
            }
            Ok(())
        };

        #[cfg(feature = "parallel")]
        if let Some(Err(err)) = values
            .par_chunks_mut(width)
            .enumerate()
            .map(fill_row)
            .find_first(Result::is_err)
        {
            return Err(err);
        }
        #[cfg(not(feature = "parallel"))]
        values.chunks_mut(width).enumerate().try_for_each(fill_row)?;

        Ok(Self { canvas, values })
    }

    /// Wraps existing row-major `values`.
    /// Returns `None` if their count doesn't match the canvas.
    pub fn from_values(canvas: Canvas, values: Vec<f32>) -> Option<Self> {
        (values.len() == canvas.area()).then_some(Self { canvas, values })
    }

    /// The canvas this field covers.
    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// All values, row-major.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The value at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        self.values
            .get(y as usize * self.canvas.width as usize + x as usize)
            .copied()
    }

    /// The smallest and largest values, or `None` for an empty field.
    pub fn range(&self) -> Option<(f32, f32)> {
        let mut values = self.values.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    pub(crate) fn into_parts(self) -> (Canvas, Vec<f32>) {
        (self.canvas, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Coordinates;

    impl FieldSource for Coordinates {
        fn sample_pixel(&self, x: u32, y: u32) -> Result<f32, NoiseError> {
            Ok(x as f32 + 100.0 * y as f32)
        }
    }

    struct FailsAt(u32, u32);

    impl FieldSource for FailsAt {
        fn sample_pixel(&self, x: u32, y: u32) -> Result<f32, NoiseError> {
            if (x, y) == (self.0, self.1) {
                Err(NoiseError::DegenerateDivision { x, y })
            } else {
                Ok(1.0)
            }
        }
    }

    #[test]
    fn rows_are_laid_out_row_major() {
        let canvas = Canvas {
            width: 5,
            height: 3,
        };
        let field = NoiseField::sample(canvas, &Coordinates).unwrap();
        assert_eq!(field.values().len(), 15);
        assert_eq!(field.get(4, 2), Some(204.0));
        assert_eq!(field.values()[7], 102.0);
        assert_eq!(field.get(5, 0), None);
        assert_eq!(field.range(), Some((0.0, 204.0)));
    }

    #[test]
    fn one_failing_pixel_fails_the_field() {
        let canvas = Canvas::square(8);
        assert_eq!(
            NoiseField::sample(canvas, &FailsAt(3, 6)),
            Err(NoiseError::DegenerateDivision { x: 3, y: 6 })
        );
    }

    struct FailsBeyond(u32, u32);

    impl FieldSource for FailsBeyond {
        fn sample_pixel(&self, x: u32, y: u32) -> Result<f32, NoiseError> {
            if x >= self.0 && y >= self.1 {
                Err(NoiseError::DegenerateDivision { x, y })
            } else {
                Ok(0.0)
            }
        }
    }

    #[test]
    fn many_failures_report_the_first() {
        let canvas = Canvas::square(64);
        for _ in 0..8 {
            assert_eq!(
                NoiseField::sample(canvas, &FailsBeyond(5, 9)),
                Err(NoiseError::DegenerateDivision { x: 5, y: 9 })
            );
        }
    }

    #[test]
    fn wrapping_checks_length() {
        let canvas = Canvas::square(2);
        assert!(NoiseField::from_values(canvas, vec![0.0; 4]).is_some());
        assert!(NoiseField::from_values(canvas, vec![0.0; 3]).is_none());
    }
}
