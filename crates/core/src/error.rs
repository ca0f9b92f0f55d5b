//! Error types for the palette-ramp core.

use thiserror::Error;

/// Errors produced by layout and rasterization operations.
#[derive(Debug, Error)]
pub enum RampError {
    /// Width or height was zero (or overflowed) when creating a canvas.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The source image width is not an exact multiple of the sample stride.
    #[error("source width {width} is not an exact multiple of sample stride {stride}")]
    StrideMismatch { width: usize, stride: usize },

    /// A palette was constructed with no colors.
    #[error("palette requires at least 1 color")]
    EmptyPalette,

    /// A pixel coordinate or rectangle fell outside the canvas bounds.
    ///
    /// The layout planner never produces such a rectangle for a validated
    /// config, so hitting this indicates a caller-side sizing bug.
    #[error("rect at ({x}, {y}) sized ({width}, {height}) exceeds canvas of size ({canvas_width}, {canvas_height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        canvas_width: usize,
        canvas_height: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A layout config failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An I/O or codec failure, propagated from the image boundary.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_mismatch_includes_both_values() {
        let err = RampError::StrideMismatch {
            width: 130,
            stride: 20,
        };
        let msg = format!("{err}");
        assert!(msg.contains("130"), "missing width in: {msg}");
        assert!(msg.contains("20"), "missing stride in: {msg}");
    }

    #[test]
    fn out_of_bounds_includes_rect_and_canvas() {
        let err = RampError::OutOfBounds {
            x: 10,
            y: 20,
            width: 30,
            height: 40,
            canvas_width: 35,
            canvas_height: 45,
        };
        let msg = format!("{err}");
        for part in ["10", "20", "30", "40", "35", "45"] {
            assert!(msg.contains(part), "missing {part} in: {msg}");
        }
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = RampError::InvalidColor("bad hex".into());
        assert!(format!("{err}").contains("bad hex"));
    }

    #[test]
    fn invalid_config_includes_message() {
        let err = RampError::InvalidConfig("stride must be positive".into());
        assert!(format!("{err}").contains("stride"));
    }

    #[test]
    fn ramp_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RampError>();
    }

    #[test]
    fn ramp_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<RampError>();
    }
}
