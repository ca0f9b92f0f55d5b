//! Mutable RGB8 pixel buffer.
//!
//! A [`Canvas`] stores `width * height` pixels, three bytes each, in
//! row-major layout. It is created once by the driver, mutated in place by
//! the rasterizer passes, then handed to the codec boundary for encoding.
//! All writes are bounds-checked; nothing is ever silently clipped.

use crate::color::Rgb;
use crate::error::RampError;
use crate::geometry::Rect;

/// A mutable pixel buffer of fixed dimensions, three channels per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Creates a black canvas of the given dimensions.
    ///
    /// Returns `RampError::InvalidDimensions` if either dimension is zero
    /// or if the buffer length would overflow `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, RampError> {
        if width == 0 || height == 0 {
            return Err(RampError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RampError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of the pixel at `(x, y)`. Callers check bounds first.
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 3
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// Returns `RampError::OutOfBounds` if the coordinate lies outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Result<Rgb, RampError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(&Rect::new(x, y, 1, 1)));
        }
        let i = self.offset(x, y);
        Ok(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Writes the pixel at `(x, y)`.
    ///
    /// Returns `RampError::OutOfBounds` if the coordinate lies outside the canvas.
    pub fn put_pixel(&mut self, x: usize, y: usize, color: Rgb) -> Result<(), RampError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(&Rect::new(x, y, 1, 1)));
        }
        let i = self.offset(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        Ok(())
    }

    /// Returns true if the rectangle lies entirely within the canvas.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.right() <= self.width && rect.bottom() <= self.height
    }

    /// Checks that a rectangle fits the canvas, erroring with the offending
    /// geometry if it does not.
    pub fn check_rect(&self, rect: &Rect) -> Result<(), RampError> {
        if self.contains(rect) {
            Ok(())
        } else {
            Err(self.out_of_bounds(rect))
        }
    }

    /// Fills a rectangle with a flat color.
    ///
    /// The rectangle is half-open on both axes: exactly `rect.width`
    /// columns and `rect.height` rows are painted. Returns
    /// `RampError::OutOfBounds` if the rectangle does not fit; the canvas
    /// is left untouched in that case.
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgb) -> Result<(), RampError> {
        self.check_rect(rect)?;
        for y in rect.y..rect.bottom() {
            let row = self.offset(rect.x, y);
            for px in self.data[row..row + rect.width * 3].chunks_exact_mut(3) {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
        }
        Ok(())
    }

    fn out_of_bounds(&self, rect: &Rect) -> RampError {
        RampError::OutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            canvas_width: self.width,
            canvas_height: self.height,
        }
    }
}
