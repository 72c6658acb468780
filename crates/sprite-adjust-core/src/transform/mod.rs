//! Geometric sprite transforms: crop, scale and offset.
//!
//! # Transform Order
//!
//! An [`Adjustment`] is applied in this fixed order:
//! 1. Crop (pixel margins from the original edges)
//! 2. Scale (uniform factor, truncated dimensions)
//! 3. Offset (shift within a same-size transparent canvas)
//!
//! Each step that actually runs is reported as a [`Change`]. An empty change
//! list means the frame must not be written back.

mod crop;
mod offset;
mod scale;

pub use crop::apply_crop;
pub use offset::apply_offset;
pub use scale::{apply_scale, scaled_dimensions};

use std::fmt;

use crate::adjustment::Adjustment;
use crate::error::AdjustError;
use crate::frame::SpriteImage;

/// One applied transform step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Cropped to the given size.
    Cropped { width: u32, height: u32 },
    /// Scaled to the given size.
    Scaled { width: u32, height: u32 },
    /// Shifted by the record's offsets (y positive = up).
    Offset { x: i32, y: i32 },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Cropped { width, height } => write!(f, "Cropped to {width}x{height}"),
            Change::Scaled { width, height } => write!(f, "Scaled to ({width}, {height})"),
            Change::Offset { x, y } => write!(f, "Offset Y:{y} X:{x}"),
        }
    }
}

/// Result of running an adjustment over a frame.
#[derive(Debug, Clone)]
pub struct Transformed {
    pub image: SpriteImage,
    pub changes: Vec<Change>,
}

impl Transformed {
    /// True if at least one step ran.
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Change descriptions joined for a progress line.
    pub fn describe(&self) -> String {
        self.changes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Apply `adjustment` to `image`.
///
/// # Errors
///
/// Returns `AdjustError::InvalidCrop` or `AdjustError::InvalidScale` if the
/// record produces an empty image.
pub fn transform(
    image: SpriteImage,
    adjustment: &Adjustment,
) -> Result<Transformed, AdjustError> {
    let mut image = image;
    let mut changes = Vec::new();

    if adjustment.has_crop() {
        image = apply_crop(
            &image,
            adjustment.crop_top,
            adjustment.crop_bottom,
            adjustment.crop_left,
            adjustment.crop_right,
        )?;
        changes.push(Change::Cropped {
            width: image.width,
            height: image.height,
        });
    }

    if adjustment.has_scale() {
        image = apply_scale(&image, adjustment.scale)?;
        changes.push(Change::Scaled {
            width: image.width,
            height: image.height,
        });
    }

    if adjustment.has_offset() {
        image = apply_offset(&image, adjustment.x_offset, adjustment.y_offset);
        changes.push(Change::Offset {
            x: adjustment.x_offset,
            y: adjustment.y_offset,
        });
    }

    Ok(Transformed { image, changes })
}
