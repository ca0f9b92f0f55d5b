#![deny(unsafe_code)]
//! PNG boundary for palette-ramp.
//!
//! This crate keeps the `image` codec out of `palette-ramp-core`: it
//! decodes source images into a `PixelSource`, encodes finished canvases,
//! and wires the two around the core pipeline. The CLI depends on this
//! crate rather than duplicating the extract/generate/save sequence.

pub mod decode;
pub mod snapshot;

use palette_ramp_core::{generate, LayoutConfig, Palette, RampError};
use std::path::Path;

/// What one completed render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of swatch colors extracted from the source image.
    pub colors: usize,
    /// Output image width in pixels.
    pub width: usize,
    /// Output image height in pixels.
    pub height: usize,
}

/// Extracts the swatch palette from a source image file.
pub fn extract_file(input: &Path, stride: usize) -> Result<Palette, RampError> {
    let img = decode::open_rgb(input)?;
    Palette::extract(&img, stride)
}

/// Runs the full pipeline: decode, extract, generate, encode.
///
/// Nothing is written on failure; extraction errors abort before any
/// layout work starts.
pub fn render_file(
    input: &Path,
    output: &Path,
    cfg: &LayoutConfig,
) -> Result<RenderSummary, RampError> {
    let palette = extract_file(input, cfg.sample_stride)?;
    let canvas = generate(palette.colors(), cfg)?;
    snapshot::write_png(&canvas, output)?;
    Ok(RenderSummary {
        colors: palette.len(),
        width: canvas.width(),
        height: canvas.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_ramp_core::Rgb;

    fn test_cfg(stride: usize) -> LayoutConfig {
        LayoutConfig {
            sample_stride: stride,
            cell_width: 10,
            cell_height: 10,
            per_column: 4,
            gradient_offset_y: 5,
        }
    }

    /// Writes a source PNG whose top row holds `colors` as stride-wide swatches.
    fn write_source(path: &Path, colors: &[Rgb], stride: usize) {
        let mut img = image::RgbImage::new((colors.len() * stride) as u32, 2);
        for (i, c) in colors.iter().enumerate() {
            for dx in 0..stride {
                img.put_pixel((i * stride + dx) as u32, 0, image::Rgb([c.r, c.g, c.b]));
            }
        }
        img.save(path).unwrap();
    }

    #[test]
    fn extract_file_reads_swatches_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("swatches.png");
        let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];
        write_source(&input, &colors, 20);

        let palette = extract_file(&input, 20).unwrap();
        assert_eq!(palette.colors(), &colors);
    }

    #[test]
    fn extract_file_rejects_inexact_stride() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("swatches.png");
        write_source(&input, &[Rgb::new(1, 2, 3); 3], 20); // width 60

        assert!(matches!(
            extract_file(&input, 25),
            Err(RampError::StrideMismatch {
                width: 60,
                stride: 25,
            })
        ));
    }

    #[test]
    fn render_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("swatches.png");
        let output = dir.path().join("sheet.png");
        let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];
        write_source(&input, &colors, 20);

        let summary = render_file(&input, &output, &test_cfg(20)).unwrap();
        assert_eq!(
            summary,
            RenderSummary {
                colors: 3,
                width: 20,
                height: 40,
            }
        );

        let sheet = image::open(&output).unwrap().to_rgb8();
        assert_eq!((sheet.width(), sheet.height()), (20, 40));
        // Swatch cells hold their input colors.
        assert_eq!(sheet.get_pixel(5, 5).0, [255, 0, 0]);
        assert_eq!(sheet.get_pixel(5, 15).0, [0, 255, 0]);
        assert_eq!(sheet.get_pixel(5, 25).0, [0, 0, 255]);
        // Red->green ramp endpoints in the gradient slot.
        assert_eq!(sheet.get_pixel(10, 10).0, [255, 0, 0]);
        assert_eq!(sheet.get_pixel(19, 10).0, [0, 255, 0]);
    }

    #[test]
    fn render_file_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("swatches.png");
        let out_a = dir.path().join("a.png");
        let out_b = dir.path().join("b.png");
        let colors: Vec<Rgb> = (0..10u8).map(|i| Rgb::new(i * 25, 128, 255 - i * 25)).collect();
        write_source(&input, &colors, 5);

        let cfg = test_cfg(5);
        render_file(&input, &out_a, &cfg).unwrap();
        render_file(&input, &out_b, &cfg).unwrap();

        let a = image::open(&out_a).unwrap().to_rgb8();
        let b = image::open(&out_b).unwrap().to_rgb8();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn render_file_writes_nothing_on_extraction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("swatches.png");
        let output = dir.path().join("sheet.png");
        write_source(&input, &[Rgb::new(1, 2, 3); 3], 20); // width 60

        let result = render_file(&input, &output, &test_cfg(25));
        assert!(matches!(result, Err(RampError::StrideMismatch { .. })));
        assert!(!output.exists());
    }
}
