//! Error types for mosaic operations and their file-system front end

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Pixel coordinate outside the buffer
    ///
    /// Signals a geometry bug; cell iteration never produces these coordinates.
    OutOfBounds {
        /// Requested row
        row: u32,
        /// Requested column
        col: u32,
        /// Buffer width in pixels
        width: u32,
        /// Buffer height in pixels
        height: u32,
    },

    /// Picture mosaic requested with no palette tiles
    EmptyPalette,

    /// Grid value outside the accepted cell-size range
    InvalidGridValue {
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// Byte vector length does not match the declared raster dimensions
    BufferSizeMismatch {
        /// Required length (`width * height * 4`)
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Palette tile does not have the fixed tile dimensions
    InvalidTileSize {
        /// Supplied tile width
        width: u32,
        /// Supplied tile height
        height: u32,
        /// Required side length
        expected: u32,
    },

    /// Failed to load an image from the file system
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a produced image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({row}, {col}) is outside the {width}x{height} buffer"
                )
            }
            Self::EmptyPalette => {
                write!(f, "Picture mosaic requires at least one palette tile")
            }
            Self::InvalidGridValue { value, min, max } => {
                write!(f, "Grid value {value} is outside the range {min}..={max}")
            }
            Self::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Pixel buffer holds {actual} bytes but its dimensions require {expected}"
                )
            }
            Self::InvalidTileSize {
                width,
                height,
                expected,
            } => {
                write!(
                    f,
                    "Palette tile is {width}x{height}, expected {expected}x{expected}"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MosaicError {
    MosaicError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
