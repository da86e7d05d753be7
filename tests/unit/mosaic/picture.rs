//! Tests for picture mosaic generation and tile copying

#[cfg(test)]
mod tests {
    use crate::{flat_palette, gradient};
    use mosaicmaker::MosaicError;
    use mosaicmaker::mosaic::palette::{Palette, PaletteTile};
    use mosaicmaker::mosaic::picture::{PictureMosaicEngine, copy_tile};
    use mosaicmaker::mosaic::{CellSampling, SelectionPolicy};
    use mosaicmaker::raster::geometry::square_cells;
    use mosaicmaker::raster::{Cell, Color, PixelBuffer};

    // Tile whose pixel (p, q) encodes its own coordinates
    fn coordinate_tile() -> PaletteTile {
        let mut pixels = PixelBuffer::new(50, 50);
        for p in 0..50 {
            for q in 0..50 {
                pixels.set_pixel(p, q, Color::new(p as u8, q as u8, 1)).unwrap();
            }
        }
        PaletteTile::new(pixels).unwrap()
    }

    // Tests an empty palette fails and leaves the buffer untouched
    // Verified by checking emptiness after the first cell
    #[test]
    fn test_empty_palette() {
        let source = gradient(20, 20);
        let mut buffer = source.clone();
        let engine = PictureMosaicEngine::with_seed(SelectionPolicy::Unrestricted, 1);
        let result = engine.generate(&mut buffer, &Palette::new(), 5);
        assert!(matches!(result, Err(MosaicError::EmptyPalette)));
        assert_eq!(buffer, source);
    }

    // Tests a dark image is tiled with the black tile
    // Verified by selecting the farthest tile
    #[test]
    fn test_dark_cells_choose_black() {
        let palette = flat_palette(&[Color::BLACK, Color::WHITE]);
        let mut buffer = PixelBuffer::filled(20, 10, Color::gray(10));
        let engine = PictureMosaicEngine::with_seed(SelectionPolicy::Unrestricted, 1);

        let chosen = engine.generate(&mut buffer, &palette, 10).unwrap();
        assert_eq!(chosen, vec![0, 0]);
        assert!(buffer.colors().all(|c| c == Color::BLACK));
    }

    // Tests one index is reported per cell in row-major order
    // Verified by reporting only distinct tiles
    #[test]
    fn test_chosen_per_cell() {
        let mut buffer = PixelBuffer::filled(30, 20, Color::BLACK);
        for row in 10..20 {
            for col in 0..30 {
                buffer.set_pixel(row, col, Color::WHITE).unwrap();
            }
        }
        let palette = flat_palette(&[Color::WHITE, Color::BLACK]);
        let engine = PictureMosaicEngine::with_seed(SelectionPolicy::Unrestricted, 1);

        let chosen = engine.generate(&mut buffer, &palette, 10).unwrap();
        assert_eq!(chosen, vec![1, 1, 1, 0, 0, 0]);
    }

    // Tests tile pixel (p, q) lands on cell pixel (top + p, left + q)
    // Verified by transposing the copy
    #[test]
    fn test_copy_tile_correspondence() {
        let tile = coordinate_tile();
        let mut buffer = PixelBuffer::new(30, 30);
        let cell = Cell {
            top_row: 10,
            left_col: 20,
            height: 7,
            width: 5,
        };
        copy_tile(&mut buffer, cell, &tile).unwrap();

        assert_eq!(buffer.get_pixel(10, 20).unwrap(), Color::new(0, 0, 1));
        assert_eq!(buffer.get_pixel(16, 24).unwrap(), Color::new(6, 4, 1));
        assert_eq!(buffer.get_pixel(9, 20).unwrap(), Color::BLACK);
        assert_eq!(buffer.get_pixel(10, 25).unwrap(), Color::BLACK);
    }

    // Tests cells wider than a tile keep their own pixels past the tile edge
    // Verified by wrapping tile coordinates around
    #[test]
    fn test_copy_tile_saturates() {
        let tile = coordinate_tile();
        let mut buffer = PixelBuffer::filled(60, 60, Color::new(9, 9, 9));
        let cell = Cell {
            top_row: 0,
            left_col: 0,
            height: 60,
            width: 60,
        };
        copy_tile(&mut buffer, cell, &tile).unwrap();

        assert_eq!(buffer.get_pixel(49, 49).unwrap(), Color::new(49, 49, 1));
        assert_eq!(buffer.get_pixel(50, 0).unwrap(), Color::new(9, 9, 9));
        assert_eq!(buffer.get_pixel(0, 55).unwrap(), Color::new(9, 9, 9));
    }

    // Tests every tile is used before a repeat across the whole mosaic
    // Verified by switching the engine to unrestricted selection
    #[test]
    fn test_exhaust_uses_all_tiles() {
        let palette = flat_palette(&[
            Color::gray(0),
            Color::gray(60),
            Color::gray(120),
            Color::gray(180),
            Color::gray(240),
        ]);
        let mut buffer = gradient(50, 50);
        let engine = PictureMosaicEngine::with_seed(SelectionPolicy::ExhaustBeforeRepeat, 5);

        let chosen = engine.generate(&mut buffer, &palette, 5).unwrap();
        assert_eq!(chosen.len(), 100);
        for window in chosen.chunks(palette.len()) {
            let mut sorted = window.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), window.len());
        }
    }

    // Tests seeded engines are reproducible
    // Verified by ignoring the seed
    #[test]
    fn test_seeded_reproducible() {
        let palette = flat_palette(&[Color::BLACK, Color::gray(90), Color::WHITE]);
        let engine = PictureMosaicEngine::with_seed(SelectionPolicy::AvoidAdjacentRepeat, 11);

        let mut first = gradient(40, 40);
        let mut second = gradient(40, 40);
        let a = engine.generate(&mut first, &palette, 5).unwrap();
        let b = engine.generate(&mut second, &palette, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    // Tests anchor sampling matches cells by their top-left pixel
    // Verified by ignoring the sampling setting
    #[test]
    fn test_anchor_sampling() {
        // Each 5x5 cell has a white anchor and black elsewhere
        let mut buffer = PixelBuffer::filled(10, 5, Color::BLACK);
        for cell in square_cells(10, 5, 5) {
            buffer.set_pixel(cell.top_row, cell.left_col, Color::WHITE).unwrap();
        }
        let palette = flat_palette(&[Color::BLACK, Color::WHITE]);

        let engine = PictureMosaicEngine::with_seed(SelectionPolicy::Unrestricted, 1)
            .sampling(CellSampling::Anchor);
        let chosen = engine.generate(&mut buffer.clone(), &palette, 5).unwrap();
        assert_eq!(chosen, vec![1, 1]);

        let engine = PictureMosaicEngine::with_seed(SelectionPolicy::Unrestricted, 1);
        let chosen = engine.generate(&mut buffer, &palette, 5).unwrap();
        assert_eq!(chosen, vec![0, 0]);
    }

    // Tests the engine never modifies the palette
    // Verified by generating from a palette that drops used tiles
    #[test]
    fn test_palette_untouched() {
        let palette = flat_palette(&[Color::BLACK, Color::WHITE]);
        let snapshot = palette.clone();
        let engine = PictureMosaicEngine::new(SelectionPolicy::ExhaustBeforeRepeat);
        engine
            .generate(&mut gradient(30, 30), &palette, 5)
            .unwrap();
        assert_eq!(palette, snapshot);
        assert_eq!(engine.policy(), SelectionPolicy::ExhaustBeforeRepeat);
    }
}
