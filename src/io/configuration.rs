//! Mosaic constants and runtime configuration defaults

use crate::raster::color::Color;

// Cell size limits accepted from callers
/// Smallest accepted grid value
pub const MIN_GRID_VALUE: u32 = 5;
/// Largest accepted grid value
pub const MAX_GRID_VALUE: u32 = 50;
/// Grid value used when none is given
pub const DEFAULT_GRID_VALUE: u32 = 25;

/// Side length of every palette tile in pixels
///
/// Cells larger than this keep their original pixels past the tile edge.
pub const TILE_SIZE: u32 = 50;

/// Bytes per pixel in the BGRA layout
pub const BYTES_PER_PIXEL: usize = 4;

// Avoid-adjacent-repeat reset threshold, drawn fresh at every reset
/// Smallest selection count that triggers a palette reset
pub const MIN_RESET_THRESHOLD: usize = 2;
/// Largest selection count that triggers a palette reset
pub const MAX_RESET_THRESHOLD: usize = 6;

/// Averaged luminance at or above this maps to white
pub const GRAYSCALE_THRESHOLD: u32 = 128;

/// Color of overlay grid lines
pub const GRID_LINE_COLOR: Color = Color::WHITE;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to mosaic output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix added to black/white output filenames
pub const BLACK_AND_WHITE_SUFFIX: &str = "_bw";
/// File extensions recognized as source or palette images
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
