//! Candidate tile images for picture mosaics

use crate::io::configuration::TILE_SIZE;
use crate::io::error::{MosaicError, Result};
use crate::raster::color::average_color;
use crate::raster::{Color, PixelBuffer};

/// One fixed-size candidate image with its precomputed average color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteTile {
    pixels: PixelBuffer,
    average: Color,
}

impl PaletteTile {
    /// Wrap a decoded tile and compute its average color
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidTileSize`] unless the buffer is exactly
    /// `TILE_SIZE x TILE_SIZE`
    pub fn new(pixels: PixelBuffer) -> Result<Self> {
        if pixels.width() != TILE_SIZE || pixels.height() != TILE_SIZE {
            return Err(MosaicError::InvalidTileSize {
                width: pixels.width(),
                height: pixels.height(),
                expected: TILE_SIZE,
            });
        }

        let average = average_color(pixels.colors()).unwrap_or_default();
        Ok(Self { pixels, average })
    }

    /// Tile pixels
    pub const fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Mean color over every tile pixel
    pub const fn average(&self) -> Color {
        self.average
    }
}

/// Ordered collection of palette tiles
///
/// Order decides ties in nearest-color search: the earlier tile wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    tiles: Vec<PaletteTile>,
}

impl Palette {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Build a palette from decoded tile buffers, keeping their order
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidTileSize`] for the first buffer that is
    /// not `TILE_SIZE x TILE_SIZE`
    pub fn from_buffers<I>(buffers: I) -> Result<Self>
    where
        I: IntoIterator<Item = PixelBuffer>,
    {
        let tiles = buffers
            .into_iter()
            .map(PaletteTile::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tiles })
    }

    /// Append a tile
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidTileSize`] if the buffer is not
    /// `TILE_SIZE x TILE_SIZE`
    pub fn push(&mut self, pixels: PixelBuffer) -> Result<()> {
        self.tiles.push(PaletteTile::new(pixels)?);
        Ok(())
    }

    /// Remove and return the tile at `index`, if any
    pub fn remove(&mut self, index: usize) -> Option<PaletteTile> {
        (index < self.tiles.len()).then(|| self.tiles.remove(index))
    }

    /// Drop every tile
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// New palette holding the tiles at `indices`, in the order given
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] if any index is out of range
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        let tiles = indices
            .iter()
            .map(|&index| {
                self.tiles.get(index).cloned().ok_or_else(|| {
                    crate::io::error::invalid_parameter(
                        "index",
                        &index,
                        &format!("palette holds {} tiles", self.tiles.len()),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tiles })
    }

    /// Tile at `index`
    pub fn get(&self, index: usize) -> Option<&PaletteTile> {
        self.tiles.get(index)
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the palette has no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in palette order
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteTile> {
        self.tiles.iter()
    }

    /// Average colors in palette order
    pub fn averages(&self) -> Vec<Color> {
        self.tiles.iter().map(PaletteTile::average).collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteTile;
    type IntoIter = std::slice::Iter<'a, PaletteTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
