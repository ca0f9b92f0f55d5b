//! Rasterization of drawing primitives into a canvas.
//!
//! Primitives are painted in three passes with last-write-wins semantics:
//! fills first, then gradients (disjoint from the fills), then caps (which
//! may overlay the top and bottom of the gradient slots). Every rectangle
//! is bounds-checked against the canvas before any pixel is written.

use crate::canvas::Canvas;
use crate::error::RampError;
use crate::layout::{FillBlock, GradientBlock, LayoutPlan};

/// Paints a solid-fill block.
pub fn draw_fill(canvas: &mut Canvas, block: &FillBlock) -> Result<(), RampError> {
    canvas.fill_rect(&block.rect, block.color)
}

/// Paints a gradient block, interpolating column by column.
///
/// Column `c` of the rectangle is filled top to bottom with
/// `start.lerp(end, c / (width - 1))`; the ramp varies only horizontally.
/// Column 0 is exactly `start` and column `width - 1` exactly `end`; a
/// one-pixel-wide block uses `start` alone.
pub fn draw_gradient(canvas: &mut Canvas, block: &GradientBlock) -> Result<(), RampError> {
    let rect = &block.rect;
    canvas.check_rect(rect)?;
    for c in 0..rect.width {
        let color = if rect.width == 1 {
            block.start
        } else {
            block.start
                .lerp(block.end, c as f64 / (rect.width - 1) as f64)
        };
        for y in rect.y..rect.bottom() {
            canvas.put_pixel(rect.x + c, y, color)?;
        }
    }
    Ok(())
}

/// Paints a complete plan in pass order: fills, gradients, caps.
pub fn render(canvas: &mut Canvas, plan: &LayoutPlan) -> Result<(), RampError> {
    for block in &plan.fills {
        draw_fill(canvas, block)?;
    }
    for block in &plan.gradients {
        draw_gradient(canvas, block)?;
    }
    for block in &plan.caps {
        draw_fill(canvas, block)?;
    }
    Ok(())
}
