//! Command-line interface for batch mosaic generation

use crate::io::configuration::{BLACK_AND_WHITE_SUFFIX, DEFAULT_SEED, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{
    collect_image_files, is_supported_image, load_palette, load_pixel_buffer, save_png,
};
use crate::io::progress::ProgressManager;
use crate::mosaic::operations::{
    convert_to_grayscale, create_picture_mosaic, create_solid_square_mosaic,
    create_solid_triangle_mosaic, create_square_grid_lines, create_triangle_grid_lines,
};
use crate::mosaic::{CellSampling, Palette, SelectionPolicy};
use crate::raster::{GridValue, PixelBuffer};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Operation applied to each source image
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One averaged color per square cell
    SolidSquare,
    /// Two averaged triangles per cell
    SolidTriangle,
    /// Nearest palette image per cell
    Picture,
    /// Source with square grid lines
    SquareGrid,
    /// Source with square grid lines and cell diagonals
    TriangleGrid,
    /// Black/white threshold of the source
    Grayscale,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SolidSquare => "solid square mosaic",
            Self::SolidTriangle => "solid triangle mosaic",
            Self::Picture => "picture mosaic",
            Self::SquareGrid => "square grid",
            Self::TriangleGrid => "triangle grid",
            Self::Grayscale => "black and white",
        };
        write!(f, "{name}")
    }
}

/// Repeat-avoidance policy as spelled on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Tiles may repeat freely
    Unrestricted,
    /// Recently used tiles are withheld for a few cells
    AvoidAdjacent,
    /// Every tile is used once before any repeats
    Exhaust,
}

impl From<PolicyArg> for SelectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Unrestricted => Self::Unrestricted,
            PolicyArg::AvoidAdjacent => Self::AvoidAdjacentRepeat,
            PolicyArg::Exhaust => Self::ExhaustBeforeRepeat,
        }
    }
}

/// Cell sampling as spelled on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SamplingArg {
    /// Average every pixel of the cell
    Mean,
    /// Use the cell's top-left pixel
    Anchor,
}

impl From<SamplingArg> for CellSampling {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Mean => Self::Mean,
            SamplingArg::Anchor => Self::Anchor,
        }
    }
}

/// Parse and range-check a grid value argument
///
/// # Errors
///
/// Returns a message if the value is not an integer in the accepted range
pub fn parse_grid_value(value: &str) -> std::result::Result<GridValue, String> {
    let parsed: u32 = value
        .parse()
        .map_err(|e| format!("'{value}' is not a cell size: {e}"))?;
    GridValue::new(parsed).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "mosaicmaker")]
#[command(
    author,
    version,
    about = "Turn images into solid or picture mosaics"
)]
/// Command-line arguments for the mosaic tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Operation to apply
    #[arg(short, long, value_enum, default_value_t = Mode::SolidSquare)]
    pub mode: Mode,

    /// Cell size in pixels (5 to 50)
    #[arg(short, long, value_parser = parse_grid_value, default_value_t = GridValue::default())]
    pub grid: GridValue,

    /// Directory of palette images for picture mosaics
    #[arg(short, long, value_name = "DIR")]
    pub palette: Option<PathBuf>,

    /// Use only these palette images, by position in file-name order
    #[arg(long, value_name = "INDEX", value_delimiter = ',')]
    pub select: Vec<usize>,

    /// Tile repeat policy for picture mosaics
    #[arg(long, value_enum, default_value_t = PolicyArg::Unrestricted)]
    pub policy: PolicyArg,

    /// How each cell's color is measured
    #[arg(long, value_enum, default_value_t = SamplingArg::Mean)]
    pub sampling: SamplingArg,

    /// Also write a black/white copy of each result
    #[arg(short, long)]
    pub black_and_white: bool,

    /// Random seed for reproducible picture mosaics
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of source images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, palette loading, or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let palette = self.load_palette_if_needed()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &palette)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn load_palette_if_needed(&self) -> Result<Palette> {
        if self.cli.mode != Mode::Picture {
            return Ok(Palette::new());
        }

        let dir = self.cli.palette.as_ref().ok_or_else(|| {
            invalid_parameter(
                "palette",
                &"<none>",
                &"picture mosaics need a palette directory",
            )
        })?;
        let palette = load_palette(dir)?;
        if self.cli.select.is_empty() {
            Ok(palette)
        } else {
            palette.subset(&self.cli.select)
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file is not a supported image",
                ));
            }
            Ok([target.clone()]
                .into_iter()
                .filter(|path| self.should_process_file(path))
                .collect())
        } else if target.is_dir() {
            Ok(collect_image_files(target)?
                .into_iter()
                .filter(|path| !Self::is_generated_output(path))
                .filter(|path| self.should_process_file(path))
                .collect())
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            tracing::info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize, palette: &Palette) -> Result<()> {
        let start_time = Instant::now();
        let mode = self.cli.mode;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, &mode.to_string());
        }

        let source = load_pixel_buffer(input_path)?;
        let result = self.run_mode(&source, palette)?;
        save_png(&result, &Self::get_output_path(input_path))?;

        if self.cli.black_and_white {
            let converted = convert_to_grayscale(&result);
            save_png(&converted, &Self::get_black_and_white_path(input_path))?;
        }

        tracing::debug!(
            input = %input_path.display(),
            %mode,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "processed image"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Apply the selected operation to one decoded source image
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails, e.g. a picture mosaic with an
    /// empty palette
    pub fn run_mode(&self, source: &PixelBuffer, palette: &Palette) -> Result<PixelBuffer> {
        let grid = self.cli.grid;
        let sampling = CellSampling::from(self.cli.sampling);
        match self.cli.mode {
            Mode::SolidSquare => create_solid_square_mosaic(source, grid, sampling),
            Mode::SolidTriangle => create_solid_triangle_mosaic(source, grid),
            Mode::Picture => create_picture_mosaic(
                source,
                palette,
                grid,
                self.cli.policy.into(),
                sampling,
                Some(self.cli.seed),
            ),
            Mode::SquareGrid => create_square_grid_lines(source, grid),
            Mode::TriangleGrid => create_triangle_grid_lines(source, grid),
            Mode::Grayscale => Ok(convert_to_grayscale(source)),
        }
    }

    fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| {
                stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(BLACK_AND_WHITE_SUFFIX)
            })
    }

    /// Where the result for `input_path` is written
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, OUTPUT_SUFFIX)
    }

    /// Where the black/white copy for `input_path` is written
    pub fn get_black_and_white_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, BLACK_AND_WHITE_SUFFIX)
    }

    fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
