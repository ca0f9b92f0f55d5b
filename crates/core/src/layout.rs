//! Layout planning: maps an ordered color sequence to drawing primitives.
//!
//! The output sheet is a grid of columns. Each column holds up to
//! `per_column` swatches in a fill slot (left) and their transitions in a
//! gradient slot (right), so every column is two cells wide. Planning runs
//! three passes over the same sequence:
//!
//! 1. fill blocks — one solid W×H cell per color;
//! 2. gradient blocks — one W×H ramp per adjacent pair that stays within a
//!    column, shifted down by the gradient offset;
//! 3. cap blocks — half-height solid blocks closing the gradient slot at
//!    the top of the first cell and the bottom of the last cell of each
//!    column, which a two-stop ramp cannot reach.
//!
//! All three passes derive positions from the same [`slot`] helper instead
//! of carrying a mutable cursor, so their geometry cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::config::LayoutConfig;
use crate::geometry::Rect;

/// A solid-fill instruction: one color, one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlock {
    pub color: Rgb,
    pub rect: Rect,
}

/// A column-wise linear interpolation instruction spanning the rectangle's
/// width, from `start` at the left edge to `end` at the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientBlock {
    pub start: Rgb,
    pub end: Rgb,
    pub rect: Rect,
}

/// The complete set of drawing primitives for one sheet, in paint order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub fills: Vec<FillBlock>,
    pub gradients: Vec<GradientBlock>,
    pub caps: Vec<FillBlock>,
}

/// Grid position of the cell holding the color at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    x: usize,
    y: usize,
    first_in_column: bool,
    last_in_column: bool,
}

/// Column-wrap geometry: every `per_column` colors the x-origin advances by
/// two cell widths (fill slot + gradient slot) and y resets to the top.
fn slot(index: usize, cfg: &LayoutConfig) -> Slot {
    Slot {
        x: (index / cfg.per_column) * 2 * cfg.cell_width,
        y: (index % cfg.per_column) * cfg.cell_height,
        first_in_column: index % cfg.per_column == 0,
        last_in_column: (index + 1) % cfg.per_column == 0,
    }
}

/// Output canvas dimensions for `count` colors: two cell widths per column,
/// one full column of cells tall.
pub fn canvas_size(count: usize, cfg: &LayoutConfig) -> (usize, usize) {
    let columns = count.div_ceil(cfg.per_column);
    (
        2 * columns * cfg.cell_width,
        cfg.per_column * cfg.cell_height,
    )
}

/// Plans all three primitive lists for the given colors.
pub fn plan(colors: &[Rgb], cfg: &LayoutConfig) -> LayoutPlan {
    LayoutPlan {
        fills: fill_blocks(colors, cfg),
        gradients: gradient_blocks(colors, cfg),
        caps: cap_blocks(colors, cfg),
    }
}

/// Fill pass: one solid cell per color in its column slot.
pub fn fill_blocks(colors: &[Rgb], cfg: &LayoutConfig) -> Vec<FillBlock> {
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let s = slot(i, cfg);
            FillBlock {
                color,
                rect: Rect::new(s.x, s.y, cfg.cell_width, cfg.cell_height),
            }
        })
        .collect()
}

/// Gradient pass: one ramp per adjacent pair `(colors[i], colors[i+1])`.
///
/// A pair is skipped when it straddles a column boundary
/// (`(i + 1) % per_column == 0`) or when `i + 1` is the last index
/// (`i + 1 == len - 1`): the boundary or sequence end breaks adjacency
/// within a column, so no ramp is drawn there.
pub fn gradient_blocks(colors: &[Rgb], cfg: &LayoutConfig) -> Vec<GradientBlock> {
    let len = colors.len();
    if len < 2 {
        return Vec::new();
    }
    (0..len - 1)
        .filter(|&i| !((i + 1) % cfg.per_column == 0 || i + 1 == len - 1))
        .map(|i| {
            let s = slot(i, cfg);
            GradientBlock {
                start: colors[i],
                end: colors[i + 1],
                rect: Rect::new(
                    s.x + cfg.cell_width,
                    s.y + cfg.gradient_offset_y,
                    cfg.cell_width,
                    cfg.cell_height,
                ),
            }
        })
        .collect()
}

/// Cap pass: half-height solid blocks at each column's extremities.
///
/// The first cell of a column gets a cap flush with the cell top; the last
/// cell (column boundary or sequence end) gets one shifted down by the
/// gradient offset. A single-cell column gets only the bottom variant.
pub fn cap_blocks(colors: &[Rgb], cfg: &LayoutConfig) -> Vec<FillBlock> {
    let len = colors.len();
    colors
        .iter()
        .enumerate()
        .filter_map(|(i, &color)| {
            let s = slot(i, cfg);
            let last = s.last_in_column || i + 1 == len;
            if !(s.first_in_column || last) {
                return None;
            }
            let offset = if last { cfg.gradient_offset_y } else { 0 };
            Some(FillBlock {
                color,
                rect: Rect::new(
                    s.x + cfg.cell_width,
                    s.y + offset,
                    cfg.cell_width,
                    cfg.cell_height / 2,
                ),
            })
        })
        .collect()
}
