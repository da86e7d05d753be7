//! In-memory raster primitives
//!
//! This module contains the data types every mosaic engine works on:
//! - BGRA pixel buffers with bounds-checked access
//! - Color values and color arithmetic
//! - Grid geometry for square and triangular cells

/// BGRA pixel buffer
pub mod buffer;
/// Color type, averaging, distance and nearest-color search
pub mod color;
/// Cell iteration and diagonal splitting
pub mod geometry;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use geometry::{Cell, GridValue};
