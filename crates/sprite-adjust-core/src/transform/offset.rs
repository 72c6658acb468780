//! Shifting a frame inside a same-size transparent canvas.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, rows grow downward
//! - `x_offset` > 0 moves content right
//! - `y_offset` > 0 moves content up on screen, i.e. toward row 0, so the
//!   paste position is `(x_offset, -y_offset)`

use crate::frame::SpriteImage;

/// Paste `image` onto a transparent canvas of the same size at
/// `(x_offset, -y_offset)`.
///
/// Pixels pushed past any edge are dropped; rows and columns uncovered by the
/// paste stay `[0, 0, 0, 0]`. The image is its own paste mask: every channel,
/// alpha included, is weighted by the source alpha against the empty canvas,
/// so opaque pixels land unchanged and partly transparent ones fade.
pub fn apply_offset(image: &SpriteImage, x_offset: i32, y_offset: i32) -> SpriteImage {
    let mut canvas = SpriteImage::transparent(image.width, image.height);

    let paste_x = x_offset as i64;
    let paste_y = -(y_offset as i64);
    let width = image.width as i64;
    let height = image.height as i64;

    // Visible source column range after clipping
    let src_x0 = (-paste_x).clamp(0, width);
    let src_x1 = (width - paste_x).clamp(0, width);
    if src_x0 >= src_x1 {
        return canvas;
    }
    let dst_x0 = src_x0 + paste_x;
    let span = ((src_x1 - src_x0) * 4) as usize;

    for src_y in 0..height {
        let dst_y = src_y + paste_y;
        if dst_y < 0 || dst_y >= height {
            continue;
        }
        let src_start = ((src_y * width + src_x0) * 4) as usize;
        let dst_start = ((dst_y * width + dst_x0) * 4) as usize;
        let src = &image.pixels[src_start..src_start + span];
        let dst = &mut canvas.pixels[dst_start..dst_start + span];
        for (out, px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            let alpha = px[3];
            for (o, &c) in out.iter_mut().zip(px) {
                *o = masked(c, alpha);
            }
        }
    }

    canvas
}

/// Blend `value` over a zero canvas with `alpha` as the mask weight.
#[inline]
fn masked(value: u8, alpha: u8) -> u8 {
    ((value as u32 * alpha as u32 + 127) / 255) as u8
}
