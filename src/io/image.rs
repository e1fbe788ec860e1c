//! Decoding source images and encoding rendered output

use crate::io::error::{PixelationError, Result};
use image::RgbImage;
use std::path::Path;

/// Load an image file of any supported format as 8-bit RGB
///
/// Alpha is discarded and other color types are converted.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| PixelationError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save an RGB image, creating the parent directory if needed
///
/// The format follows the file extension; PNG keeps the output lossless.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PixelationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| PixelationError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
