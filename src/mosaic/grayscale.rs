//! Two-tone black/white conversion

use crate::io::configuration::GRAYSCALE_THRESHOLD;
use crate::raster::{Color, PixelBuffer};

/// Black or white for a single color
///
/// The truncated channel mean is compared against the threshold; the
/// threshold value itself maps to white.
pub const fn threshold_color(color: Color) -> Color {
    let mean = (color.r as u32 + color.g as u32 + color.b as u32) / 3;
    if mean < GRAYSCALE_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Threshold every pixel of `buffer` to black or white in place
///
/// Idempotent: black and white are fixed points of [`threshold_color`].
pub fn to_grayscale(buffer: &mut PixelBuffer) {
    buffer.map_colors(threshold_color);
}
