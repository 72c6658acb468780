//! Picks the adjustment record that applies to one frame.

use crate::adjustment::Adjustment;
use crate::table::AdjustmentTable;

/// Resolve the adjustment for frame `frame` of sprite `sprite`.
///
/// Lookup order:
/// 1. the frame-specific record for exactly (`sprite`, `frame`)
/// 2. the sprite-wide record for `sprite`
/// 3. none
///
/// A frame-specific record is returned as-is; no fields are taken from the
/// sprite-wide record. `None` means "leave this frame alone", not an error.
pub fn resolve<'a>(
    table: &'a AdjustmentTable,
    sprite: &str,
    frame: u32,
) -> Option<&'a Adjustment> {
    table
        .frame_entry(sprite, frame)
        .or_else(|| table.sprite_entry(sprite))
}
