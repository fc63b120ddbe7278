//! A grab bag of noise that needs no lattice or point set.

use crate::{image::OutputImage, params::WhiteParams, rng::NoiseRng};

/// Draws seeded white noise directly as bytes.
///
/// Pixels are drawn row by row from one stream: one gray byte each, or three independent channel bytes when [`WhiteParams::colored`] is set.
/// There is no range to normalize; every byte value is equally likely.
pub fn white(params: &WhiteParams) -> OutputImage {
    let mut rng = NoiseRng::new(params.seed);
    let area = params.canvas.area();
    if params.colored {
        let pixels = (0..area).map(|_| [rng.byte(), rng.byte(), rng.byte()]);
        OutputImage::from_pixels(params.canvas, pixels)
    } else {
        OutputImage::from_gray(params.canvas, (0..area).map(|_| rng.byte()))
    }
}
