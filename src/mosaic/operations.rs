//! Public entry points: each borrows a source buffer and returns a new one
//!
//! Every operation works on a private copy of the source and hands it back
//! only after the whole pass succeeded, so a failed call never exposes a
//! half-written buffer and the source is never modified.

use crate::io::error::Result;
use crate::mosaic::grayscale::to_grayscale;
use crate::mosaic::overlay::{square_grid_lines, triangle_grid_lines};
use crate::mosaic::palette::Palette;
use crate::mosaic::picture::PictureMosaicEngine;
use crate::mosaic::sampling::CellSampling;
use crate::mosaic::selection::SelectionPolicy;
use crate::mosaic::solid::{solid_square_mosaic, solid_triangle_mosaic};
use crate::raster::{GridValue, PixelBuffer};

/// Solid mosaic with one averaged color per square cell
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only on inconsistent cell geometry
pub fn create_solid_square_mosaic(
    source: &PixelBuffer,
    grid: GridValue,
    sampling: CellSampling,
) -> Result<PixelBuffer> {
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        grid = grid.get(),
        %sampling,
        "creating solid square mosaic"
    );
    let mut mosaic = source.clone();
    solid_square_mosaic(&mut mosaic, grid.get(), sampling)?;
    Ok(mosaic)
}

/// Solid mosaic with two averaged triangles per cell
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only on inconsistent cell geometry
pub fn create_solid_triangle_mosaic(source: &PixelBuffer, grid: GridValue) -> Result<PixelBuffer> {
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        grid = grid.get(),
        "creating solid triangle mosaic"
    );
    let mut mosaic = source.clone();
    solid_triangle_mosaic(&mut mosaic, grid.get())?;
    Ok(mosaic)
}

/// Picture mosaic built from `palette` under `policy`
///
/// `seed` makes avoid-adjacent thresholds reproducible; `None` draws from
/// OS entropy.
///
/// # Errors
///
/// Returns [`crate::MosaicError::EmptyPalette`] if `palette` has no tiles
pub fn create_picture_mosaic(
    source: &PixelBuffer,
    palette: &Palette,
    grid: GridValue,
    policy: SelectionPolicy,
    sampling: CellSampling,
    seed: Option<u64>,
) -> Result<PixelBuffer> {
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        grid = grid.get(),
        tiles = palette.len(),
        %policy,
        %sampling,
        "creating picture mosaic"
    );
    let engine = seed
        .map_or_else(
            || PictureMosaicEngine::new(policy),
            |seed| PictureMosaicEngine::with_seed(policy, seed),
        )
        .sampling(sampling);

    let mut mosaic = source.clone();
    let chosen = engine.generate(&mut mosaic, palette, grid.get())?;
    tracing::debug!(cells = chosen.len(), "picture mosaic complete");
    Ok(mosaic)
}

/// Copy of `source` with square cell boundaries drawn on it
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only on inconsistent line geometry
pub fn create_square_grid_lines(source: &PixelBuffer, grid: GridValue) -> Result<PixelBuffer> {
    tracing::debug!(grid = grid.get(), "drawing square grid lines");
    let mut overlay = source.clone();
    square_grid_lines(&mut overlay, grid.get())?;
    Ok(overlay)
}

/// Copy of `source` with square cell boundaries and cell diagonals drawn on it
///
/// # Errors
///
/// Returns [`crate::MosaicError::OutOfBounds`] only on inconsistent line geometry
pub fn create_triangle_grid_lines(source: &PixelBuffer, grid: GridValue) -> Result<PixelBuffer> {
    tracing::debug!(grid = grid.get(), "drawing triangle grid lines");
    let mut overlay = source.clone();
    triangle_grid_lines(&mut overlay, grid.get())?;
    Ok(overlay)
}

/// Black/white copy of `source`
pub fn convert_to_grayscale(source: &PixelBuffer) -> PixelBuffer {
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        "converting to black and white"
    );
    let mut converted = source.clone();
    to_grayscale(&mut converted);
    converted
}
