//! Sprite frames in memory and their PNG backing files.
//!
//! Frames are always held as RGBA8 so transparent padding survives every
//! transform. Files in other color modes are converted on load.

mod types;

pub use types::SpriteImage;

use std::path::Path;

use crate::error::AdjustError;

/// Load a sprite frame from disk, converting it to RGBA.
///
/// # Errors
///
/// Returns `AdjustError::Decode` if the file cannot be read or decoded.
pub fn load_png(path: &Path) -> Result<SpriteImage, AdjustError> {
    let decoded = image::open(path).map_err(|source| AdjustError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SpriteImage::from_rgba_image(decoded.into_rgba8()))
}

/// Overwrite `path` with the frame encoded as PNG.
///
/// # Errors
///
/// Returns `AdjustError::InvalidPixelData` if the buffer is inconsistent with
/// its dimensions, or `AdjustError::Encode` if encoding or writing fails.
pub fn save_png(image: &SpriteImage, path: &Path) -> Result<(), AdjustError> {
    let rgba = image.to_rgba_image().ok_or(AdjustError::InvalidPixelData {
        width: image.width,
        height: image.height,
    })?;
    rgba.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| AdjustError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
