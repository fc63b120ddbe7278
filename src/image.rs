//! Contains the RGB byte image every generator produces, and the normalization that makes one from a [`NoiseField`].

use alloc::vec::Vec;

use crate::{field::NoiseField, params::Canvas};

/// A row-major `width × height × 3` buffer of 8-bit RGB values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputImage {
    canvas: Canvas,
    data: Vec<u8>,
}

impl OutputImage {
    /// Builds an image from pixels in row-major order.
    /// Missing pixels are black and extra pixels are ignored.
    pub fn from_pixels(canvas: Canvas, pixels: impl IntoIterator<Item = [u8; 3]>) -> Self {
        let mut data = Vec::with_capacity(canvas.area() * 3);
        for rgb in pixels.into_iter().take(canvas.area()) {
            data.extend_from_slice(&rgb);
        }
        data.resize(canvas.area() * 3, 0);
        Self { canvas, data }
    }

    /// Builds an image by repeating each gray value across all three channels.
    pub fn from_gray(canvas: Canvas, gray: impl IntoIterator<Item = u8>) -> Self {
        Self::from_pixels(canvas, gray.into_iter().map(|v| [v, v, v]))
    }

    /// Wraps existing RGB bytes.
    /// Returns `None` if their count doesn't match the canvas.
    pub fn from_rgb(canvas: Canvas, data: Vec<u8>) -> Option<Self> {
        (data.len() == canvas.area() * 3).then_some(Self { canvas, data })
    }

    /// The width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// The height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// The canvas this image covers.
    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The raw bytes, `[r, g, b]` per pixel, row by row.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Takes the raw bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let start = (y as usize * self.canvas.width as usize + x as usize) * 3;
        let rgb = self.data.get(start..start + 3)?;
        Some([rgb[0], rgb[1], rgb[2]])
    }

    /// Iterates pixels row by row.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }
}

impl NoiseField {
    /// Stretches the field onto [0, 255] and broadcasts it to gray RGB.
    ///
    /// The minimum maps to 0 and the maximum to 255, with values truncated in between.
    /// A constant field has no range to stretch, so it becomes all zeros.
    pub fn normalize(self) -> OutputImage {
        let range = self.range();
        let (canvas, values) = self.into_parts();
        let gray = values.into_iter().map(move |v| match range {
            Some((min, max)) if max > min => ((v - min) / (max - min) * 255.0) as u8,
            _ => 0,
        });
        OutputImage::from_gray(canvas, gray)
    }
}
