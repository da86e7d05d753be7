//! Fixed-size BGRA raster with bounds-checked pixel access

use crate::io::configuration::BYTES_PER_PIXEL;
use crate::io::error::{MosaicError, Result};
use crate::raster::color::Color;

// Channel offsets within one pixel
const BLUE: usize = 0;
const GREEN: usize = 1;
const RED: usize = 2;
const ALPHA: usize = 3;

/// Flat 4-byte-per-pixel raster in B, G, R, A channel order
///
/// Rows are stored top to bottom, pixels left to right. The alpha channel is
/// carried along but never read or written by color operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer with every byte zeroed
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; byte_len(width, height)],
        }
    }

    /// Create a buffer with every pixel set to `color` and alpha set to 255
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut bytes = Vec::with_capacity(byte_len(width, height));
        for _ in 0..(width as usize * height as usize) {
            bytes.extend_from_slice(&[color.b, color.g, color.r, u8::MAX]);
        }
        Self {
            width,
            height,
            bytes,
        }
    }

    /// Wrap already-decoded BGRA bytes
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::BufferSizeMismatch`] if `bytes` is not exactly
    /// `width * height * 4` long
    pub fn from_bgra(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height);
        if bytes.len() != expected {
            return Err(MosaicError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw BGRA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer and return its BGRA bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Check whether a coordinate lies inside the buffer
    pub const fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Read the color at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::OutOfBounds`] if the coordinate lies outside the buffer
    pub fn get_pixel(&self, row: u32, col: u32) -> Result<Color> {
        let pixel = self
            .offset(row, col)
            .and_then(|offset| self.bytes.get(offset..offset + BYTES_PER_PIXEL))
            .ok_or_else(|| self.out_of_bounds(row, col))?;

        Ok(Color::new(
            pixel.get(RED).copied().unwrap_or(0),
            pixel.get(GREEN).copied().unwrap_or(0),
            pixel.get(BLUE).copied().unwrap_or(0),
        ))
    }

    /// Overwrite the three color channels at `(row, col)`, leaving alpha untouched
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::OutOfBounds`] if the coordinate lies outside the buffer
    pub fn set_pixel(&mut self, row: u32, col: u32, color: Color) -> Result<()> {
        let error = self.out_of_bounds(row, col);
        let pixel = self
            .offset(row, col)
            .and_then(|offset| self.bytes.get_mut(offset..offset + BYTES_PER_PIXEL))
            .ok_or(error)?;

        if let [blue, green, red, _alpha] = pixel {
            *blue = color.b;
            *green = color.g;
            *red = color.r;
        }
        Ok(())
    }

    /// Alpha byte at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::OutOfBounds`] if the coordinate lies outside the buffer
    pub fn alpha(&self, row: u32, col: u32) -> Result<u8> {
        self.offset(row, col)
            .and_then(|offset| self.bytes.get(offset + ALPHA))
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Every pixel color in row-major order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.bytes
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|pixel| match pixel {
                [b, g, r, _] => Color::new(*r, *g, *b),
                _ => Color::BLACK,
            })
    }

    /// Apply `map` to every pixel color in place, leaving alpha untouched
    pub fn map_colors(&mut self, mut map: impl FnMut(Color) -> Color) {
        for pixel in self.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            if let [b, g, r, _] = pixel {
                let mapped = map(Color::new(*r, *g, *b));
                *b = mapped.b;
                *g = mapped.g;
                *r = mapped.r;
            }
        }
    }

    fn offset(&self, row: u32, col: u32) -> Option<usize> {
        self.contains(row, col)
            .then(|| (row as usize * self.width as usize + col as usize) * BYTES_PER_PIXEL)
    }

    const fn out_of_bounds(&self, row: u32, col: u32) -> MosaicError {
        MosaicError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}

const fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}
