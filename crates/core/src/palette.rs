//! Ordered color sequence extracted from a source image.
//!
//! Order is significant: it defines left-to-right adjacency for gradients
//! and is preserved through planning and rasterization.

use crate::color::Rgb;
use crate::error::RampError;
use crate::source::PixelSource;

/// An ordered, non-empty sequence of swatch colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Creates a palette from a vector of colors.
    ///
    /// Returns `RampError::EmptyPalette` if the vector is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, RampError> {
        if colors.is_empty() {
            return Err(RampError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    ///
    /// Each string can be "#rrggbb" or "rrggbb" (case insensitive).
    pub fn from_hex(hexes: &[&str]) -> Result<Self, RampError> {
        let colors: Result<Vec<Rgb>, RampError> = hexes.iter().map(|h| Rgb::from_hex(h)).collect();
        Self::new(colors?)
    }

    /// Extracts a palette from a source raster at a fixed horizontal stride.
    ///
    /// The source width must be an exact multiple of `stride`; each swatch
    /// is sampled from the top row at `(i * stride, 0)`, preserving index
    /// order. Returns `RampError::StrideMismatch` if the division is not
    /// exact (including a zero-width source), and `RampError::InvalidConfig`
    /// if `stride` is zero.
    pub fn extract<S: PixelSource>(source: &S, stride: usize) -> Result<Self, RampError> {
        if stride == 0 {
            return Err(RampError::InvalidConfig(
                "sample_stride must be positive".to_string(),
            ));
        }
        let width = source.width();
        if width == 0 || width % stride != 0 {
            return Err(RampError::StrideMismatch { width, stride });
        }
        let count = width / stride;
        let colors = (0..count).map(|i| source.pixel(i * stride, 0)).collect();
        Ok(Self { colors })
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors. (Always false for
    /// constructed palettes.)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in extraction order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}
