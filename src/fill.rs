// src/fill.rs

//! Whole-buffer solid fill.

use crate::buffer::{PixelBuffer, PixelFormat};
use crate::color::Color;
use log::trace;

/// Overwrites every pixel of `buffer` with `color`.
///
/// The write is always opaque: the color's R, G, B (and alpha, for RGBA
/// buffers) are stored as-is, whatever the alpha value. Row 0 is written
/// pixel-by-pixel and then block-copied into every remaining row; all rows
/// end up identical, so the result is the same as writing each pixel
/// directly.
pub fn clear(buffer: &mut PixelBuffer, color: Color) {
    trace!(
        "clear {}x{} {:?} with ({},{},{},{})",
        buffer.width(),
        buffer.height(),
        buffer.format(),
        color.r,
        color.g,
        color.b,
        color.a
    );
    let format = buffer.format();
    let row_bytes = buffer.row_bytes();
    let (first, rest) = buffer.as_bytes_mut().split_at_mut(row_bytes);
    match format {
        PixelFormat::Rgba => {
            for px in first.chunks_exact_mut(4) {
                px.copy_from_slice(&color.to_bytes());
            }
        }
        PixelFormat::Rgb => {
            for px in first.chunks_exact_mut(3) {
                px.copy_from_slice(&[color.r, color.g, color.b]);
            }
        }
    }
    for row in rest.chunks_exact_mut(row_bytes) {
        row.copy_from_slice(first);
    }
}
