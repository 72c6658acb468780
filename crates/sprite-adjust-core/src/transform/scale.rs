//! Uniform scaling by a factor.
//!
//! Target dimensions truncate `width * scale` and `height * scale`
//! independently, so non-square images can drift by a pixel in aspect ratio.
//! Resampling always uses Lanczos3.

use image::imageops::FilterType;

use crate::error::AdjustError;
use crate::frame::SpriteImage;

const SCALE_FILTER: FilterType = FilterType::Lanczos3;

/// Compute the truncated target dimensions for `scale`.
///
/// Returns `None` if the factor is not finite and positive, or if either
/// dimension truncates to zero.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> Option<(u32, u32)> {
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }
    let w = (width as f64 * scale).trunc();
    let h = (height as f64 * scale).trunc();
    if w < 1.0 || h < 1.0 || w > u32::MAX as f64 || h > u32::MAX as f64 {
        return None;
    }
    Some((w as u32, h as u32))
}

/// Resize an image by `scale`.
///
/// # Errors
///
/// Returns `AdjustError::InvalidScale` if the target dimensions are not
/// usable (see [`scaled_dimensions`]).
pub fn apply_scale(image: &SpriteImage, scale: f64) -> Result<SpriteImage, AdjustError> {
    let (width, height) =
        scaled_dimensions(image.width, image.height, scale).ok_or(AdjustError::InvalidScale {
            scale,
            width: image.width,
            height: image.height,
        })?;

    let rgba = image.to_rgba_image().ok_or(AdjustError::InvalidPixelData {
        width: image.width,
        height: image.height,
    })?;

    let resized = image::imageops::resize(&rgba, width, height, SCALE_FILTER);

    Ok(SpriteImage::from_rgba_image(resized))
}
