//! Source image decoding.

use palette_ramp_core::{PixelSource, RampError, Rgb};
use std::path::Path;

/// A decoded source raster, ready for palette extraction.
///
/// Wraps the codec's RGB buffer so the core's [`PixelSource`] seam can be
/// implemented here without the core depending on the codec.
pub struct DecodedImage(image::RgbImage);

/// Opens an image file and converts it to an 8-bit RGB raster.
///
/// Decode failures are mapped to `RampError::Io`.
pub fn open_rgb(path: &Path) -> Result<DecodedImage, RampError> {
    image::open(path)
        .map(|img| DecodedImage(img.to_rgb8()))
        .map_err(|e| RampError::Io(e.to_string()))
}

impl PixelSource for DecodedImage {
    fn width(&self) -> usize {
        self.0.width() as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Rgb {
        let px = self.0.get_pixel(x as u32, y as u32);
        Rgb::new(px[0], px[1], px[2])
    }
}
