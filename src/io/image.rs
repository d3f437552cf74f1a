//! Canvas decoding from image files and PNG export

use crate::io::error::{GenerationError, Result};
use crate::spatial::Canvas;
use image::ImageFormat;
use std::path::Path;
use tracing::debug;

/// Decode an image file into an RGBA canvas
///
/// Any format the `image` crate can read is accepted and converted to
/// 8-bit RGBA.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_canvas(path: &Path) -> Result<Canvas> {
    let img = image::open(path).map_err(|e| GenerationError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba = img.to_rgba8();
    debug!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "loaded canvas image"
    );
    Ok(Canvas::from_image(rgba))
}

/// Encode the canvas as PNG, regardless of the path's extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .image()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
