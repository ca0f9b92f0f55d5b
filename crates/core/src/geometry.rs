//! Rectangle value type used by drawing primitives.

use serde::{Deserialize, Serialize};

/// An absolute pixel-space rectangle. Immutable value type.
///
/// Extents are half-open on both axes: the rectangle covers exactly
/// `width` columns starting at `x` and `height` rows starting at `y`.
/// Callers constructing blocks must keep `width` and `height` positive;
/// the rasterizer rejects rectangles that do not fit the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Creates a rectangle from origin and size.
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column covered.
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row covered.
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }
}
