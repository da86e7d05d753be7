//! Conversion between image files and BGRA pixel buffers

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::io::configuration::{BYTES_PER_PIXEL, IMAGE_EXTENSIONS, TILE_SIZE};
use crate::io::error::{MosaicError, Result, file_system_error};
use crate::mosaic::Palette;
use crate::raster::PixelBuffer;

/// Reorder an RGBA image into a BGRA pixel buffer
///
/// # Errors
///
/// Returns [`MosaicError::BufferSizeMismatch`] if the image's sample count
/// does not match its dimensions
pub fn buffer_from_rgba(image: &RgbaImage) -> Result<PixelBuffer> {
    let mut bytes = Vec::with_capacity(image.as_raw().len());
    for Rgba([r, g, b, a]) in image.pixels() {
        bytes.extend_from_slice(&[*b, *g, *r, *a]);
    }
    PixelBuffer::from_bgra(image.width(), image.height(), bytes)
}

/// Reorder a BGRA pixel buffer into an RGBA image
///
/// # Errors
///
/// Returns [`MosaicError::BufferSizeMismatch`] if the buffer's bytes do not
/// cover its dimensions
pub fn rgba_from_buffer(buffer: &PixelBuffer) -> Result<RgbaImage> {
    let source = buffer.as_bytes();
    let mut bytes = Vec::with_capacity(source.len());
    for pixel in source.chunks_exact(BYTES_PER_PIXEL) {
        if let [b, g, r, a] = pixel {
            bytes.extend_from_slice(&[*r, *g, *b, *a]);
        }
    }

    let actual = bytes.len();
    RgbaImage::from_raw(buffer.width(), buffer.height(), bytes).ok_or(
        MosaicError::BufferSizeMismatch {
            expected: buffer.width() as usize * buffer.height() as usize * BYTES_PER_PIXEL,
            actual,
        },
    )
}

/// Decode an image file into a pixel buffer
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be read or decoded
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    buffer_from_rgba(&image.to_rgba8())
}

/// Decode an image file and stretch it to a palette tile
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be read or decoded
pub fn load_tile(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let resized = imageops::resize(&image.to_rgba8(), TILE_SIZE, TILE_SIZE, FilterType::Triangle);
    buffer_from_rgba(&resized)
}

/// Build a palette from every supported image in `dir`, sorted by file name
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or any image fails to load
pub fn load_palette(dir: &Path) -> Result<Palette> {
    let files = collect_image_files(dir)?;
    let tiles = files
        .iter()
        .map(|path| load_tile(path))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(dir = %dir.display(), tiles = tiles.len(), "loaded palette");
    Palette::from_buffers(tiles)
}

/// Supported image files directly inside `dir`, sorted
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] if the directory cannot be read
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| file_system_error(dir, "read directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "read directory entry", e))?
            .path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Whether the file extension names a supported image format
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Encode a pixel buffer as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(buffer: &PixelBuffer, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    rgba_from_buffer(buffer)?
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
