//! Flat-color mosaics: one color per square cell or per diagonal half-cell

use crate::io::error::Result;
use crate::mosaic::sampling::{CellSampling, cell_color};
use crate::raster::color::{Color, average_color};
use crate::raster::geometry::{square_cells, triangle_split};
use crate::raster::{Cell, PixelBuffer};

/// Replace every cell of `buffer` with its representative color
///
/// Mutates in place. Output is fully determined by the input pixels, the
/// cell size and the sampling strategy.
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only if cell geometry is inconsistent
/// with the buffer
pub fn solid_square_mosaic(
    buffer: &mut PixelBuffer,
    step: u32,
    sampling: CellSampling,
) -> Result<()> {
    for cell in square_cells(buffer.width(), buffer.height(), step) {
        let color = cell_color(buffer, cell, sampling)?;
        fill_cell(buffer, cell, color)?;
    }
    Ok(())
}

/// Replace every cell of `buffer` with two flat triangles
///
/// Each cell is split along the diagonal from its own top-left corner; each
/// half is painted with the mean of its own pixels. Halves with no pixels
/// (a one-row strip along the bottom edge has no left half) are skipped.
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only if cell geometry is inconsistent
/// with the buffer
pub fn solid_triangle_mosaic(buffer: &mut PixelBuffer, step: u32) -> Result<()> {
    for cell in square_cells(buffer.width(), buffer.height(), step) {
        let (left, right) = triangle_split(cell, cell.top_row, cell.left_col);
        paint_half(buffer, &left)?;
        paint_half(buffer, &right)?;
    }
    Ok(())
}

fn paint_half(buffer: &mut PixelBuffer, pixels: &[(u32, u32)]) -> Result<()> {
    let colors = pixels
        .iter()
        .map(|&(row, col)| buffer.get_pixel(row, col))
        .collect::<Result<Vec<_>>>()?;

    let Some(color) = average_color(colors) else {
        return Ok(());
    };

    for &(row, col) in pixels {
        buffer.set_pixel(row, col, color)?;
    }
    Ok(())
}

/// Paint every pixel of `cell` with `color`
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] if the cell reaches outside `buffer`
pub fn fill_cell(buffer: &mut PixelBuffer, cell: Cell, color: Color) -> Result<()> {
    for (row, col) in cell.pixels() {
        buffer.set_pixel(row, col, color)?;
    }
    Ok(())
}
