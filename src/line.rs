// src/line.rs

//! Axis-aligned line primitives.
//!
//! Two operations over a horizontal or vertical segment, both endpoints
//! inclusive: `blend_line` saturating-adds or -subtracts a `ColorDelta`
//! from each pixel, and `draw_line` overwrites each pixel with a solid
//! color. These are the building blocks the bevel renderer composes.
//!
//! Diagonal segments are rejected with `UnsupportedGeometry` rather than
//! silently mis-rendered.

use crate::buffer::{PixelBuffer, PixelFormat};
use crate::color::{Color, ColorDelta};
use crate::error::RasterError;
use log::trace;
use std::ops::RangeInclusive;

/// Direction of a [`blend_line`] blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOp {
    /// Per-channel `min(255, component + delta)`.
    Add,
    /// Per-channel `max(0, component - delta)`.
    Subtract,
}

/// Blends `delta` into every pixel of the segment `(x0, y0)..=(x1, y1)`.
///
/// Endpoints may be given in either order; a single pixel (`x0 == x1` and
/// `y0 == y1`) is a valid degenerate segment. Each channel saturates at
/// 0/255, and the alpha byte of an RGBA buffer is never modified.
///
/// # Errors
/// `UnsupportedGeometry` for a diagonal segment, `OutOfBounds` if either
/// endpoint lies outside the buffer. The buffer is untouched on error.
pub fn blend_line(
    buffer: &mut PixelBuffer,
    op: BlendOp,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    delta: ColorDelta,
) -> Result<(), RasterError> {
    let (xs, ys) = checked_span(buffer, x0, y0, x1, y1)?;
    trace!(
        "blend_line {:?} ({},{})..({},{}) delta ({},{},{})",
        op,
        x0,
        y0,
        x1,
        y1,
        delta.r,
        delta.g,
        delta.b
    );
    let width = buffer.width();
    let bpp = buffer.format().bytes_per_pixel();
    let data = buffer.as_bytes_mut();
    for y in ys {
        for x in xs.clone() {
            let off = (y * width + x) * bpp;
            let px = &mut data[off..off + 3];
            match op {
                BlendOp::Add => {
                    px[0] = px[0].saturating_add(delta.r);
                    px[1] = px[1].saturating_add(delta.g);
                    px[2] = px[2].saturating_add(delta.b);
                }
                BlendOp::Subtract => {
                    px[0] = px[0].saturating_sub(delta.r);
                    px[1] = px[1].saturating_sub(delta.g);
                    px[2] = px[2].saturating_sub(delta.b);
                }
            }
        }
    }
    Ok(())
}

/// Overwrites every pixel of the segment `(x0, y0)..=(x1, y1)` with `color`.
///
/// No blending: the previous contents do not matter. RGB buffers ignore
/// `color.a`. Same geometry and bounds rules as [`blend_line`].
pub fn draw_line(
    buffer: &mut PixelBuffer,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    color: Color,
) -> Result<(), RasterError> {
    let (xs, ys) = checked_span(buffer, x0, y0, x1, y1)?;
    trace!(
        "draw_line ({},{})..({},{}) color ({},{},{},{})",
        x0,
        y0,
        x1,
        y1,
        color.r,
        color.g,
        color.b,
        color.a
    );
    let width = buffer.width();
    let format = buffer.format();
    let bpp = format.bytes_per_pixel();
    let data = buffer.as_bytes_mut();
    for y in ys {
        for x in xs.clone() {
            let off = (y * width + x) * bpp;
            let px = &mut data[off..off + bpp];
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            if let PixelFormat::Rgba = format {
                px[3] = color.a;
            }
        }
    }
    Ok(())
}

/// Validates a segment and returns the normalized x and y spans.
///
/// Both endpoints are checked before any write, so a failed call leaves the
/// buffer untouched.
fn checked_span(
    buffer: &PixelBuffer,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> Result<(RangeInclusive<usize>, RangeInclusive<usize>), RasterError> {
    if x0 != x1 && y0 != y1 {
        return Err(RasterError::UnsupportedGeometry { x0, y0, x1, y1 });
    }
    buffer.offset_of(x0, y0)?;
    buffer.offset_of(x1, y1)?;
    Ok((x0.min(x1)..=x0.max(x1), y0.min(y1)..=y0.max(y1)))
}
