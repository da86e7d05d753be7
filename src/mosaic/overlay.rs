//! Grid-line overlays that visualize cell boundaries

use crate::io::configuration::GRID_LINE_COLOR;
use crate::io::error::Result;
use crate::raster::PixelBuffer;

/// Mark interior cell boundaries with the grid line color
///
/// Column `c` is a vertical line when `c` is a non-zero multiple of `step`;
/// row `r` likewise for horizontal lines. The outer edge at 0 is left alone.
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only if line geometry is inconsistent
/// with the buffer
pub fn square_grid_lines(buffer: &mut PixelBuffer, step: u32) -> Result<()> {
    let step = step.max(1);
    let (width, height) = (buffer.width(), buffer.height());

    for row in 0..height {
        for col in (step..width).step_by(step as usize) {
            buffer.set_pixel(row, col, GRID_LINE_COLOR)?;
        }
    }

    for row in (step..height).step_by(step as usize) {
        for col in 0..width {
            buffer.set_pixel(row, col, GRID_LINE_COLOR)?;
        }
    }

    Ok(())
}

/// Mark cell boundaries plus the diagonal of every cell
///
/// The diagonal is a staircase: on row `r` it sits at column offset
/// `r % step` inside each cell, so it restarts at every cell row.
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only if line geometry is inconsistent
/// with the buffer
pub fn triangle_grid_lines(buffer: &mut PixelBuffer, step: u32) -> Result<()> {
    let step = step.max(1);
    let (width, height) = (buffer.width(), buffer.height());

    for row in 0..height {
        let offset = row % step;
        for col in (offset..width).step_by(step as usize) {
            buffer.set_pixel(row, col, GRID_LINE_COLOR)?;
        }
    }

    square_grid_lines(buffer, step)
}
