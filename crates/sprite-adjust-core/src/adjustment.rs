//! Geometric adjustment records.
//!
//! An [`Adjustment`] is always complete: every field is set when a record is
//! built, either spelled out or taken from [`Adjustment::NEUTRAL`]. A
//! frame-specific record replaces the sprite-wide record wholesale.

/// A single geometric correction for a sprite frame.
///
/// Applied in the order crop, scale, offset. See [`crate::transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Vertical shift in pixels, positive = up on screen.
    pub y_offset: i32,
    /// Horizontal shift in pixels, positive = right.
    pub x_offset: i32,
    /// Uniform scale factor applied after cropping (1.0 = unchanged).
    pub scale: f64,
    /// Pixels removed from the top edge.
    pub crop_top: u32,
    /// Pixels removed from the bottom edge.
    pub crop_bottom: u32,
    /// Pixels removed from the left edge.
    pub crop_left: u32,
    /// Pixels removed from the right edge.
    pub crop_right: u32,
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl Adjustment {
    /// The record that changes nothing.
    pub const NEUTRAL: Adjustment = Adjustment {
        y_offset: 0,
        x_offset: 0,
        scale: 1.0,
        crop_top: 0,
        crop_bottom: 0,
        crop_left: 0,
        crop_right: 0,
    };

    /// Create an offset-only adjustment.
    pub const fn offset(x_offset: i32, y_offset: i32) -> Self {
        Adjustment {
            y_offset,
            x_offset,
            ..Self::NEUTRAL
        }
    }

    /// True if any crop margin is nonzero.
    pub fn has_crop(&self) -> bool {
        self.crop_top != 0 || self.crop_bottom != 0 || self.crop_left != 0 || self.crop_right != 0
    }

    /// True if the scale factor differs from 1.0.
    pub fn has_scale(&self) -> bool {
        self.scale != 1.0
    }

    /// True if either offset is nonzero.
    pub fn has_offset(&self) -> bool {
        self.x_offset != 0 || self.y_offset != 0
    }

    /// Check if applying this record would leave an image untouched.
    pub fn is_neutral(&self) -> bool {
        !self.has_crop() && !self.has_scale() && !self.has_offset()
    }
}
