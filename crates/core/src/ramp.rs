//! Driver: palette in, finished canvas out.
//!
//! One run is a fixed sequence with no hidden state: validate the config,
//! size the canvas from the color count, plan the three primitive lists,
//! rasterize them in pass order. The same palette and config always
//! produce a byte-identical buffer.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::LayoutConfig;
use crate::error::RampError;
use crate::layout;
use crate::raster;

/// Generates the gradient sheet for an ordered color sequence.
///
/// Returns `RampError::InvalidConfig` for an undrawable config and
/// `RampError::EmptyPalette` for an empty color slice. The canvas is sized
/// so that every planned block fits; a bounds error from rasterization
/// would indicate a planner bug, not bad input.
pub fn generate(colors: &[Rgb], cfg: &LayoutConfig) -> Result<Canvas, RampError> {
    cfg.validate()?;
    if colors.is_empty() {
        return Err(RampError::EmptyPalette);
    }
    let (width, height) = layout::canvas_size(colors.len(), cfg);
    let mut canvas = Canvas::new(width, height)?;
    let plan = layout::plan(colors, cfg);
    raster::render(&mut canvas, &plan)?;
    Ok(canvas)
}
