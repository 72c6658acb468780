//! Error types shared by the image, transform and driver modules.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an adjustment run.
///
/// A missing sprite file is not an error; the driver reports it and moves on.
/// Everything here propagates out of [`crate::apply_all`] unchanged.
#[derive(Debug, Error)]
pub enum AdjustError {
    /// The file exists but could not be decoded as an image.
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Writing the adjusted image back failed.
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Crop margins consume the whole image (or more).
    #[error(
        "Invalid crop: margins (top {top}, bottom {bottom}, left {left}, right {right}) exceed {width}x{height} image"
    )]
    InvalidCrop {
        width: u32,
        height: u32,
        top: u32,
        bottom: u32,
        left: u32,
        right: u32,
    },

    /// Scale factor is not usable or truncates a dimension to zero.
    #[error("Invalid scale {scale} for {width}x{height} image")]
    InvalidScale { scale: f64, width: u32, height: u32 },

    /// Pixel buffer could not be turned back into an image buffer.
    #[error("Pixel buffer does not match {width}x{height} RGBA dimensions")]
    InvalidPixelData { width: u32, height: u32 },

    /// Progress output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
