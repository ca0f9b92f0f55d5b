//! PNG encoding of a finished [`Canvas`].

use palette_ramp_core::{Canvas, RampError};
use std::path::Path;

/// Writes a canvas to disk as a PNG image.
///
/// Returns `RampError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `RampError::Io` on encode/write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), RampError> {
    let w = u32::try_from(canvas.width()).map_err(|_| RampError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| RampError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, canvas.data().to_vec())
        .ok_or_else(|| RampError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| RampError::Io(e.to_string()))
}
