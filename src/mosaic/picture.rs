//! Photo mosaics: every cell is replaced by its best-matching palette tile

use rand::{SeedableRng, rngs::StdRng};

use crate::io::configuration::TILE_SIZE;
use crate::io::error::{MosaicError, Result};
use crate::mosaic::palette::{Palette, PaletteTile};
use crate::mosaic::sampling::{CellSampling, cell_color};
use crate::mosaic::selection::{SelectionPolicy, TileSelector};
use crate::raster::geometry::square_cells;
use crate::raster::{Cell, PixelBuffer};

/// Configured picture mosaic generator
///
/// Each call to [`PictureMosaicEngine::generate`] starts a fresh selector, so
/// repeat-avoidance state never leaks between mosaics. With a seed, output is
/// reproducible; without one the avoid-adjacent thresholds use OS entropy.
#[derive(Clone, Debug, Default)]
pub struct PictureMosaicEngine {
    policy: SelectionPolicy,
    sampling: CellSampling,
    seed: Option<u64>,
}

impl PictureMosaicEngine {
    /// Create an engine with entropy-seeded randomness
    pub const fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            sampling: CellSampling::Mean,
            seed: None,
        }
    }

    /// Create an engine whose random choices are reproducible
    pub const fn with_seed(policy: SelectionPolicy, seed: u64) -> Self {
        Self {
            policy,
            sampling: CellSampling::Mean,
            seed: Some(seed),
        }
    }

    /// Choose how cell colors are measured
    #[must_use]
    pub const fn sampling(mut self, sampling: CellSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Active selection policy
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Fill every cell of `buffer` with the nearest palette tile
    ///
    /// Returns the chosen palette index for each cell in row-major cell order.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPalette`] if `palette` has no tiles. The
    /// buffer is untouched in that case.
    pub fn generate(
        &self,
        buffer: &mut PixelBuffer,
        palette: &Palette,
        step: u32,
    ) -> Result<Vec<usize>> {
        if palette.is_empty() {
            return Err(MosaicError::EmptyPalette);
        }

        let rng = self
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut selector = TileSelector::new(palette.averages(), self.policy, rng)?;

        let mut chosen = Vec::new();
        for cell in square_cells(buffer.width(), buffer.height(), step) {
            let color = cell_color(buffer, cell, self.sampling)?;
            let index = selector.select(color);
            let tile = palette.get(index).ok_or(MosaicError::EmptyPalette)?;
            copy_tile(buffer, cell, tile)?;
            chosen.push(index);
        }

        Ok(chosen)
    }
}

/// Copy tile pixel `(p, q)` onto cell pixel `(top + p, left + q)`
///
/// Only the overlap of the cell and the tile is written; cell pixels past
/// `TILE_SIZE` keep their current color.
///
/// # Errors
///
/// Returns [`MosaicError::OutOfBounds`] if the cell reaches outside `buffer`
pub fn copy_tile(buffer: &mut PixelBuffer, cell: Cell, tile: &PaletteTile) -> Result<()> {
    let rows = cell.height.min(TILE_SIZE);
    let cols = cell.width.min(TILE_SIZE);

    for p in 0..rows {
        for q in 0..cols {
            let color = tile.pixels().get_pixel(p, q)?;
            buffer.set_pixel(cell.top_row + p, cell.left_col + q, color)?;
        }
    }
    Ok(())
}
