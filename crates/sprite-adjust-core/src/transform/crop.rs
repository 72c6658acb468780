//! Edge cropping with pixel margins.
//!
//! Margins are pixel counts measured inward from each edge of the original
//! image. The remaining region is copied into a new, smaller image.

use crate::error::AdjustError;
use crate::frame::SpriteImage;

/// Remove `top`, `bottom`, `left` and `right` pixels from the image edges.
///
/// # Errors
///
/// Returns `AdjustError::InvalidCrop` if the margins leave no pixels in
/// either dimension.
pub fn apply_crop(
    image: &SpriteImage,
    top: u32,
    bottom: u32,
    left: u32,
    right: u32,
) -> Result<SpriteImage, AdjustError> {
    let invalid = || AdjustError::InvalidCrop {
        width: image.width,
        height: image.height,
        top,
        bottom,
        left,
        right,
    };

    let out_width = image
        .width
        .checked_sub(left)
        .and_then(|w| w.checked_sub(right))
        .filter(|&w| w > 0)
        .ok_or_else(invalid)?;
    let out_height = image
        .height
        .checked_sub(top)
        .and_then(|h| h.checked_sub(bottom))
        .filter(|&h| h > 0)
        .ok_or_else(invalid)?;

    // Fast path: nothing removed
    if out_width == image.width && out_height == image.height {
        return Ok(image.clone());
    }

    let row_bytes = out_width as usize * 4;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for y in 0..out_height {
        let src_row = image.row(top + y);
        let start = left as usize * 4;
        output.extend_from_slice(&src_row[start..start + row_bytes]);
    }

    Ok(SpriteImage::new(out_width, out_height, output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
