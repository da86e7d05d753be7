//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use crate::{flat_palette, gradient};
    use clap::Parser;
    use mosaicmaker::MosaicError;
    use mosaicmaker::io::cli::{Cli, FileProcessor, Mode, PolicyArg, SamplingArg, parse_grid_value};
    use mosaicmaker::io::configuration::{DEFAULT_GRID_VALUE, DEFAULT_SEED};
    use mosaicmaker::io::image::{load_pixel_buffer, save_png};
    use mosaicmaker::mosaic::operations::create_solid_square_mosaic;
    use mosaicmaker::mosaic::{CellSampling, Palette, SelectionPolicy};
    use mosaicmaker::raster::{Color, PixelBuffer};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_test_cli(args: &[&str]) -> Cli {
        let mut full = vec!["program"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    fn write_palette(dir: &Path, colors: &[Color]) {
        for (index, &color) in colors.iter().enumerate() {
            save_png(
                &PixelBuffer::filled(50, 50, color),
                &dir.join(format!("tile{index}.png")),
            )
            .unwrap();
        }
    }

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = create_test_cli(&["test.png"]);

        assert_eq!(cli.target, PathBuf::from("test.png"));
        assert_eq!(cli.mode, Mode::SolidSquare);
        assert_eq!(cli.grid.get(), DEFAULT_GRID_VALUE);
        assert_eq!(cli.policy, PolicyArg::Unrestricted);
        assert_eq!(cli.sampling, SamplingArg::Mean);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.palette.is_none());
        assert!(cli.select.is_empty());
        assert!(!cli.black_and_white);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by modifying custom parsers to ensure they're invoked
    #[test]
    fn test_cli_parse_all_args() {
        let cli = create_test_cli(&[
            "input.png",
            "--mode",
            "picture",
            "--grid",
            "10",
            "--palette",
            "tiles",
            "--policy",
            "avoid-adjacent",
            "--sampling",
            "anchor",
            "--black-and-white",
            "--seed",
            "123",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.mode, Mode::Picture);
        assert_eq!(cli.grid.get(), 10);
        assert_eq!(cli.palette, Some(PathBuf::from("tiles")));
        assert_eq!(
            SelectionPolicy::from(cli.policy),
            SelectionPolicy::AvoidAdjacentRepeat
        );
        assert_eq!(CellSampling::from(cli.sampling), CellSampling::Anchor);
        assert!(cli.black_and_white);
        assert_eq!(cli.seed, 123);
        assert!(cli.quiet);
        assert!(!cli.skip_existing());
    }

    // Tests short flag parsing (-m, -g, -s)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = create_test_cli(&["test.png", "-m", "triangle-grid", "-g", "5", "-s", "9"]);

        assert_eq!(cli.mode, Mode::TriangleGrid);
        assert_eq!(cli.grid.get(), 5);
        assert_eq!(cli.seed, 9);
    }

    // Tests grid values outside 5..=50 are rejected at parse time
    // Verified by widening the accepted range
    #[test]
    fn test_grid_value_range() {
        assert!(parse_grid_value("4").is_err());
        assert!(parse_grid_value("51").is_err());
        assert!(parse_grid_value("ten").is_err());
        assert_eq!(parse_grid_value("50").map(|g| g.get()), Ok(50));
        assert!(Cli::try_parse_from(["program", "test.png", "--grid", "51"]).is_err());
    }

    // Tests file skip behavior based on --no-skip flag
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_logic() {
        assert!(create_test_cli(&["test.png"]).skip_existing());
        assert!(!create_test_cli(&["test.png", "--no-skip"]).skip_existing());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        assert!(create_test_cli(&["test.png"]).should_show_progress());
        assert!(!create_test_cli(&["test.png", "--quiet"]).should_show_progress());
    }

    // Tests output filename generation with suffixes
    // Verified by changing output suffix
    #[test]
    fn test_output_paths() {
        let input = Path::new("photos/beach.jpg");
        assert_eq!(
            FileProcessor::get_output_path(input),
            PathBuf::from("photos/beach_mosaic.png")
        );
        assert_eq!(
            FileProcessor::get_black_and_white_path(input),
            PathBuf::from("photos/beach_bw.png")
        );
    }

    // Tests error handling for missing files
    // Verified by removing error return for nonexistent targets
    #[test]
    fn test_process_nonexistent_file() {
        let mut processor = FileProcessor::new(create_test_cli(&["nonexistent.png", "-q"]));
        assert!(processor.process().is_err());
    }

    // Tests error handling for unsupported files
    // Verified by removing file type validation
    #[test]
    fn test_process_invalid_file_type() {
        let temp_dir = TempDir::new().unwrap();
        let txt_file = temp_dir.path().join("test.txt");
        fs::write(&txt_file, "not an image").unwrap();

        let mut processor =
            FileProcessor::new(create_test_cli(&[txt_file.to_str().unwrap(), "-q"]));
        assert!(matches!(
            processor.process(),
            Err(MosaicError::InvalidParameter { .. })
        ));
    }

    // Tests processing empty directories
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut processor =
            FileProcessor::new(create_test_cli(&[temp_dir.path().to_str().unwrap(), "-q"]));
        assert!(processor.process().is_ok());
    }

    // Tests skip logic when output file exists
    // Verified by removing skip check, which fails decoding the fake input
    #[test]
    fn test_skip_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("test.png");
        fs::write(&input_file, "fake png").unwrap();
        fs::write(temp_dir.path().join("test_mosaic.png"), "output").unwrap();

        let mut processor =
            FileProcessor::new(create_test_cli(&[input_file.to_str().unwrap(), "-q"]));
        assert!(processor.process().is_ok());
    }

    // Tests a solid mosaic is written next to the source with its copy
    // Verified by skipping the black/white copy
    #[test]
    fn test_process_writes_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("photo.png");
        let source = gradient(20, 15);
        save_png(&source, &input_file).unwrap();

        let mut processor = FileProcessor::new(create_test_cli(&[
            input_file.to_str().unwrap(),
            "-q",
            "-g",
            "5",
            "-b",
        ]));
        processor.process().unwrap();

        let written = load_pixel_buffer(&FileProcessor::get_output_path(&input_file)).unwrap();
        let expected = create_solid_square_mosaic(
            &source,
            parse_grid_value("5").unwrap(),
            CellSampling::Mean,
        )
        .unwrap();
        assert_eq!(written, expected);
        assert!(FileProcessor::get_black_and_white_path(&input_file).exists());
    }

    // Tests generated outputs in a directory are not processed again
    // Verified by removing the generated-output filter
    #[test]
    fn test_directory_ignores_outputs() {
        let temp_dir = TempDir::new().unwrap();
        save_png(&gradient(10, 10), &temp_dir.path().join("a.png")).unwrap();

        let target = temp_dir.path().to_str().unwrap();
        FileProcessor::new(create_test_cli(&[target, "-q", "-g", "5"]))
            .process()
            .unwrap();
        FileProcessor::new(create_test_cli(&[target, "-q", "-g", "5", "--no-skip"]))
            .process()
            .unwrap();

        assert!(temp_dir.path().join("a_mosaic.png").exists());
        assert!(!temp_dir.path().join("a_mosaic_mosaic.png").exists());
    }

    // Tests picture mode requires a palette directory
    // Verified by defaulting to an empty palette
    #[test]
    fn test_picture_needs_palette() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("photo.png");
        save_png(&gradient(10, 10), &input_file).unwrap();

        let mut processor = FileProcessor::new(create_test_cli(&[
            input_file.to_str().unwrap(),
            "-q",
            "-m",
            "picture",
        ]));
        assert!(matches!(
            processor.process(),
            Err(MosaicError::InvalidParameter {
                parameter: "palette",
                ..
            })
        ));
    }

    // Tests picture mode end to end with a palette directory
    // Verified by ignoring the palette directory
    #[test]
    fn test_picture_with_palette() {
        let temp_dir = TempDir::new().unwrap();
        let palette_dir = temp_dir.path().join("tiles");
        fs::create_dir(&palette_dir).unwrap();
        write_palette(&palette_dir, &[Color::BLACK, Color::WHITE]);

        let input_file = temp_dir.path().join("dark.png");
        save_png(&PixelBuffer::filled(10, 10, Color::gray(20)), &input_file).unwrap();

        let mut processor = FileProcessor::new(create_test_cli(&[
            input_file.to_str().unwrap(),
            "-q",
            "-m",
            "picture",
            "-g",
            "5",
            "-p",
            palette_dir.to_str().unwrap(),
        ]));
        processor.process().unwrap();

        let written = load_pixel_buffer(&FileProcessor::get_output_path(&input_file)).unwrap();
        assert!(written.colors().all(|c| c == Color::BLACK));
    }

    // Tests --select takes a comma-separated index list in the order given
    // Verified by sorting the parsed indices
    #[test]
    fn test_cli_parse_select() {
        let cli = create_test_cli(&["test.png", "--select", "2,0,5"]);
        assert_eq!(cli.select, vec![2, 0, 5]);
        assert!(Cli::try_parse_from(["program", "test.png", "--select", "1,x"]).is_err());
    }

    fn picture_cli(input: &Path, palette_dir: &Path, select: &str) -> Cli {
        create_test_cli(&[
            input.to_str().unwrap(),
            "-q",
            "-m",
            "picture",
            "-g",
            "5",
            "-p",
            palette_dir.to_str().unwrap(),
            "--select",
            select,
        ])
    }

    // Tests picture mode builds its palette from the selected images only
    // Verified by ignoring the selection
    #[test]
    fn test_picture_with_selected_tiles() {
        let temp_dir = TempDir::new().unwrap();
        let palette_dir = temp_dir.path().join("tiles");
        fs::create_dir(&palette_dir).unwrap();
        write_palette(&palette_dir, &[Color::BLACK, Color::WHITE]);

        let input_file = temp_dir.path().join("dark.png");
        save_png(&PixelBuffer::filled(10, 10, Color::gray(20)), &input_file).unwrap();

        FileProcessor::new(picture_cli(&input_file, &palette_dir, "1"))
            .process()
            .unwrap();

        let written = load_pixel_buffer(&FileProcessor::get_output_path(&input_file)).unwrap();
        assert!(written.colors().all(|c| c == Color::WHITE));
    }

    // Tests a selection past the end of the palette is rejected
    // Verified by skipping out-of-range indices
    #[test]
    fn test_picture_selection_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let palette_dir = temp_dir.path().join("tiles");
        fs::create_dir(&palette_dir).unwrap();
        write_palette(&palette_dir, &[Color::BLACK, Color::WHITE]);

        let input_file = temp_dir.path().join("dark.png");
        save_png(&PixelBuffer::filled(10, 10, Color::gray(20)), &input_file).unwrap();

        let result = FileProcessor::new(picture_cli(&input_file, &palette_dir, "0,2")).process();
        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "index",
                ..
            })
        ));
        assert!(!FileProcessor::get_output_path(&input_file).exists());
    }

    // Tests run_mode dispatches on the selected mode
    // Verified by mapping grayscale to the solid mosaic
    #[test]
    fn test_run_mode() {
        let source = gradient(12, 12);
        let palette = flat_palette(&[Color::BLACK]);

        let processor = FileProcessor::new(create_test_cli(&["x.png", "-m", "grayscale"]));
        let result = processor.run_mode(&source, &Palette::new()).unwrap();
        assert!(result.colors().all(|c| c == Color::BLACK || c == Color::WHITE));

        let processor = FileProcessor::new(create_test_cli(&["x.png", "-m", "picture", "-g", "6"]));
        let result = processor.run_mode(&source, &palette).unwrap();
        assert!(result.colors().all(|c| c == Color::BLACK));
        assert!(processor.run_mode(&source, &Palette::new()).is_err());
    }

    // Tests mode names shown in progress output
    // Verified by deriving names from Debug
    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::SolidTriangle.to_string(), "solid triangle mosaic");
        assert_eq!(Mode::Grayscale.to_string(), "black and white");
    }
}
