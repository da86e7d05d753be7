//! Solid and picture mosaics for in-memory raster images
//!
//! A source image is partitioned into square cells. Each cell is replaced by
//! its average color, by two diagonal half-cell averages, or by the palette
//! tile whose average color is nearest, under a configurable repeat policy.
//! Grid-line overlays and a black/white threshold complete the toolkit.

#![forbid(unsafe_code)]

/// File loading, configuration, progress display and the command-line front end
pub mod io;
/// Mosaic engines and public operations
pub mod mosaic;
/// Pixel buffers, colors and grid geometry
pub mod raster;

pub use io::error::{MosaicError, Result};
