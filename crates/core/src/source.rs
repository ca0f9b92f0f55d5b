//! Seam to the external image codec.
//!
//! The core never decodes image files. It only needs to read pixels from an
//! already-decoded raster at known coordinates, so that boundary is a trait
//! the codec crate implements. All implementations must be deterministic:
//! same coordinates, same color.

use crate::color::Rgb;

/// A decoded source raster the palette extractor can sample.
pub trait PixelSource {
    /// Raster width in pixels.
    fn width(&self) -> usize;

    /// Color of the pixel at `(x, y)`.
    ///
    /// Callers only sample coordinates with `x < width()` on the top row;
    /// implementations may panic outside that range.
    fn pixel(&self, x: usize, y: usize) -> Rgb;
}

/// In-memory pixel source backed by a slice of colors, one per column.
///
/// Row coordinates are ignored: every row repeats the top row. Used by
/// tests and by callers that already hold a color sequence.
#[derive(Debug, Clone)]
pub struct RowSource {
    colors: Vec<Rgb>,
}

impl RowSource {
    /// Creates a source whose columns are the given colors, one pixel each.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }
}

impl PixelSource for RowSource {
    fn width(&self) -> usize {
        self.colors.len()
    }

    fn pixel(&self, x: usize, _y: usize) -> Rgb {
        self.colors[x]
    }
}
