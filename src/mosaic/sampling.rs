//! How a cell's representative color is measured

use std::fmt;

use crate::io::error::{MosaicError, Result};
use crate::raster::color::{Color, average_color};
use crate::raster::{Cell, PixelBuffer};

/// Strategy for measuring the color of one grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellSampling {
    /// Truncated mean over every pixel of the cell
    #[default]
    Mean,
    /// Color of the cell's top-left pixel, repeated for the whole cell
    Anchor,
}

impl fmt::Display for CellSampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Anchor => write!(f, "anchor"),
        }
    }
}

/// Representative color of `cell` under `sampling`
///
/// # Errors
///
/// Returns [`MosaicError::OutOfBounds`] if the cell reaches outside `buffer`
pub fn cell_color(buffer: &PixelBuffer, cell: Cell, sampling: CellSampling) -> Result<Color> {
    match sampling {
        CellSampling::Mean => {
            let colors = cell
                .pixels()
                .map(|(row, col)| buffer.get_pixel(row, col))
                .collect::<Result<Vec<_>>>()?;
            average_color(colors).ok_or(MosaicError::OutOfBounds {
                row: cell.top_row,
                col: cell.left_col,
                width: buffer.width(),
                height: buffer.height(),
            })
        }
        CellSampling::Anchor => buffer.get_pixel(cell.top_row, cell.left_col),
    }
}
