//! Error types for rendering, session and file operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all pixelation operations
#[derive(Debug, Error)]
pub enum PixelationError {
    /// A tiling or history parameter is outside its valid range
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source image has no pixels to sample
    #[error("Source image is empty ({width}x{height})")]
    EmptyImage {
        /// Width of the rejected image
        width: u32,
        /// Height of the rejected image
        height: u32,
    },

    /// Session operation requires an image that has not been loaded or rendered
    #[error("No image loaded")]
    NoImageLoaded,

    /// Failed to load source image from filesystem
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save rendered image to disk
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Palette entry could not be parsed as a color
    #[error("Invalid palette color '{value}' on line {line}: {reason}")]
    PaletteParse {
        /// One-based line number, or argument position for command-line colors
        line: usize,
        /// Offending text
        value: String,
        /// Description of the failure
        reason: String,
    },

    /// Numerical computation produced invalid result
    #[error("Computation error in {operation}: {reason}")]
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

/// Convenience type alias for pixelation results
pub type Result<T> = std::result::Result<T, PixelationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PixelationError {
    PixelationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PixelationError {
    PixelationError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an I/O error for a target path that cannot be processed
pub fn unsupported_target(path: impl Into<PathBuf>, reason: &str) -> PixelationError {
    PixelationError::FileSystem {
        path: path.into(),
        operation: "resolve target",
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, reason.to_string()),
    }
}
