//! Geometric constants for one layout run.
//!
//! A [`LayoutConfig`] captures everything the planner and driver need:
//! the input sample stride and the output cell geometry. Two identical
//! configs applied to the same palette produce byte-identical output.

use crate::error::RampError;
use serde::{Deserialize, Serialize};

/// Geometric constants for one layout run.
///
/// All values are fixed before a run starts and treated as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance in pixels between color samples in the source image.
    pub sample_stride: usize,
    /// Width of one output cell (both the fill slot and the gradient slot).
    pub cell_width: usize,
    /// Height of one output cell.
    pub cell_height: usize,
    /// Number of swatches stacked vertically before wrapping to a new column.
    pub per_column: usize,
    /// Vertical offset applied to gradient and cap blocks within a cell.
    pub gradient_offset_y: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sample_stride: 1,
            cell_width: 100,
            cell_height: 100,
            per_column: 8,
            gradient_offset_y: 50,
        }
    }
}

impl LayoutConfig {
    /// Validates that the config describes a drawable layout.
    ///
    /// Beyond positivity, `gradient_offset_y + cell_height / 2` must not
    /// exceed `cell_height`: the cap blocks at a column's extremities are
    /// half a cell tall and shifted down by the gradient offset, and the
    /// driver sizes the canvas assuming they stay inside the column band.
    pub fn validate(&self) -> Result<(), RampError> {
        if self.sample_stride == 0 {
            return Err(RampError::InvalidConfig(
                "sample_stride must be positive".to_string(),
            ));
        }
        if self.cell_width == 0 {
            return Err(RampError::InvalidConfig(
                "cell_width must be positive".to_string(),
            ));
        }
        if self.per_column == 0 {
            return Err(RampError::InvalidConfig(
                "per_column must be positive".to_string(),
            ));
        }
        if self.cell_height < 2 {
            return Err(RampError::InvalidConfig(
                "cell_height must be at least 2 (cap blocks are half a cell tall)".to_string(),
            ));
        }
        if self.gradient_offset_y + self.cell_height / 2 > self.cell_height {
            return Err(RampError::InvalidConfig(format!(
                "gradient_offset_y {} plus half cell height {} exceeds cell_height {}",
                self.gradient_offset_y,
                self.cell_height / 2,
                self.cell_height
            )));
        }
        Ok(())
    }
}
