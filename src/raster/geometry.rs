//! Grid partitioning of a raster into square cells and diagonal half-cells

use std::fmt;

use crate::io::configuration::{DEFAULT_GRID_VALUE, MAX_GRID_VALUE, MIN_GRID_VALUE};
use crate::io::error::{MosaicError, Result};

/// Validated cell size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridValue(u32);

impl GridValue {
    /// Validate a caller-supplied cell size
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidGridValue`] if `value` lies outside
    /// `MIN_GRID_VALUE..=MAX_GRID_VALUE`
    pub const fn new(value: u32) -> Result<Self> {
        if value < MIN_GRID_VALUE || value > MAX_GRID_VALUE {
            return Err(MosaicError::InvalidGridValue {
                value,
                min: MIN_GRID_VALUE,
                max: MAX_GRID_VALUE,
            });
        }
        Ok(Self(value))
    }

    /// Cell side length in pixels
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for GridValue {
    fn default() -> Self {
        Self(DEFAULT_GRID_VALUE)
    }
}

impl fmt::Display for GridValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rectangular region of the grid, clipped to the raster edges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// First row covered by the cell
    pub top_row: u32,
    /// First column covered by the cell
    pub left_col: u32,
    /// Rows covered (equal to the grid value except along the bottom edge)
    pub height: u32,
    /// Columns covered (equal to the grid value except along the right edge)
    pub width: u32,
}

impl Cell {
    /// Row one past the last covered row
    pub const fn bottom_row(&self) -> u32 {
        self.top_row + self.height
    }

    /// Column one past the last covered column
    pub const fn right_col(&self) -> u32 {
        self.left_col + self.width
    }

    /// Number of pixels in the cell
    pub const fn area(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Every `(row, col)` in the cell, row-major
    pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (self.top_row..self.bottom_row())
            .flat_map(move |row| (self.left_col..self.right_col()).map(move |col| (row, col)))
    }
}

/// Lazy row-major walk over the cells of a `width x height` raster
#[derive(Clone, Debug)]
pub struct SquareCells {
    width: u32,
    height: u32,
    step: u32,
    next_row: u32,
    next_col: u32,
}

impl Iterator for SquareCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next_row >= self.height || self.width == 0 {
            return None;
        }

        let cell = Cell {
            top_row: self.next_row,
            left_col: self.next_col,
            height: self.step.min(self.height - self.next_row),
            width: self.step.min(self.width - self.next_col),
        };

        self.next_col = self.next_col.saturating_add(self.step);
        if self.next_col >= self.width {
            self.next_col = 0;
            self.next_row = self.next_row.saturating_add(self.step);
        }

        Some(cell)
    }
}

/// Partition a raster into square cells of side `step`
///
/// Cells start at `(0, 0)`; the last cell in each row and column is clipped
/// to the raster edge. A zero step is treated as one.
pub const fn square_cells(width: u32, height: u32, step: u32) -> SquareCells {
    SquareCells {
        width,
        height,
        step: if step == 0 { 1 } else { step },
        next_row: 0,
        next_col: 0,
    }
}

/// Number of cells [`square_cells`] yields
pub const fn cell_count(width: u32, height: u32, step: u32) -> usize {
    let step = if step == 0 { 1 } else { step };
    width.div_ceil(step) as usize * height.div_ceil(step) as usize
}

/// Which side of a cell's diagonal a pixel falls on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleHalf {
    /// Below the diagonal
    Left,
    /// On or above the diagonal
    Right,
}

impl TriangleHalf {
    /// Classify a pixel relative to a corner
    ///
    /// Pixels whose column offset is at least their row offset belong to
    /// the right half; the diagonal itself is part of it.
    pub const fn of(row: u32, col: u32, corner_row: u32, corner_col: u32) -> Self {
        let row_offset = row as i64 - corner_row as i64;
        let col_offset = col as i64 - corner_col as i64;
        if col_offset >= row_offset {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// Split a cell's pixels along the diagonal through `(corner_row, corner_col)`
///
/// Returns `(left, right)` coordinate lists in row-major order.
pub fn triangle_split(
    cell: Cell,
    corner_row: u32,
    corner_col: u32,
) -> (Vec<(u32, u32)>, Vec<(u32, u32)>) {
    cell.pixels()
        .partition(|&(row, col)| {
            TriangleHalf::of(row, col, corner_row, corner_col) == TriangleHalf::Left
        })
}
