#![deny(unsafe_code)]
//! Core types and layout logic for the palette-ramp gradient sheet generator.
//!
//! Provides the `Rgb` color type, `LayoutConfig` geometry, `Palette`
//! extraction over a `PixelSource`, the column-wrap layout planner, the
//! `Canvas` pixel buffer, the rasterizer, and the `generate` driver.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod ramp;
pub mod raster;
pub mod source;

pub use canvas::Canvas;
pub use color::Rgb;
pub use config::LayoutConfig;
pub use error::RampError;
pub use geometry::Rect;
pub use layout::{FillBlock, GradientBlock, LayoutPlan};
pub use palette::Palette;
pub use ramp::generate;
pub use source::{PixelSource, RowSource};
