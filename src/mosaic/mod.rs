//! Mosaic engines and the operations built on them
//!
//! Engine functions mutate a buffer in place and take the raw cell step;
//! the [`operations`] functions validate nothing further, clone the source,
//! and return the finished buffer.

/// Black/white thresholding
pub mod grayscale;
/// Public clone-and-publish operations
pub mod operations;
/// Grid-line overlays
pub mod overlay;
/// Palette tiles with precomputed averages
pub mod palette;
/// Picture mosaic generation
pub mod picture;
/// Cell color measurement
pub mod sampling;
/// Repeat-avoidance policies for tile choice
pub mod selection;
/// Solid square and triangle mosaics
pub mod solid;

pub use palette::{Palette, PaletteTile};
pub use picture::PictureMosaicEngine;
pub use sampling::CellSampling;
pub use selection::SelectionPolicy;
