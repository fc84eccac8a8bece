// src/bevel.rs

//! Raised and sunken border decoration.
//!
//! A bevel fakes 3D lighting on the border of an image: edges toward the
//! light source get brighter, opposite edges get darker. Everything here is
//! composed from the axis-aligned primitives in [`crate::line`], so the
//! routine allocates nothing and runs in O(width + height).
//!
//! The two-tier raised styles shade the second-to-last row and column, then
//! draw a solid accent line along the outermost ones; `Raised3` additionally
//! doubles the highlight one row/column in for a sharper lit edge.

use crate::buffer::PixelBuffer;
use crate::config::BevelConfig;
use crate::error::RasterError;
use crate::line::{blend_line, draw_line, BlendOp};
use log::debug;
use serde::{Deserialize, Serialize};

/// Minimum buffer width and height for a bevel.
pub const MIN_BEVEL_DIM: usize = 3;

/// Border decoration styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BevelStyle {
    /// Single-weight raised border: one bright edge, one dark edge.
    Raised,
    /// Raised border with a solid accent line outside the dark edge.
    Raised2,
    /// Like `Raised2`, with the top/left highlight doubled one pixel in.
    Raised3,
    /// Inverted lighting: dark top/left, bright bottom/right. Single
    /// weight, no accent line.
    Sunken,
}

/// Decorates the border of `buffer` with `style`, using the stock colors.
///
/// See [`apply_bevel_with`] for the full contract.
pub fn apply_bevel(buffer: &mut PixelBuffer, style: BevelStyle) -> Result<(), RasterError> {
    apply_bevel_with(buffer, style, &BevelConfig::default())
}

/// Decorates the border of `buffer` with `style`, using the deltas and
/// accent color in `config`.
///
/// Blends saturate per channel and never touch alpha; the accent line is a
/// solid overwrite. The interior beyond the 2-pixel border is untouched.
///
/// # Errors
/// `TooSmall` if the buffer is under 3x3. Once the size check passes, every
/// edge span lies inside the buffer, so the underlying line calls cannot
/// fail.
pub fn apply_bevel_with(
    buffer: &mut PixelBuffer,
    style: BevelStyle,
    config: &BevelConfig,
) -> Result<(), RasterError> {
    let (w, h) = (buffer.width(), buffer.height());
    if w < MIN_BEVEL_DIM || h < MIN_BEVEL_DIM {
        return Err(RasterError::TooSmall {
            width: w,
            height: h,
            min: MIN_BEVEL_DIM,
        });
    }
    debug!("bevel {:?} on {}x{} buffer", style, w, h);
    match style {
        BevelStyle::Sunken => sunken(buffer, config),
        _ => raised(buffer, style, config),
    }
}

fn raised(
    buffer: &mut PixelBuffer,
    style: BevelStyle,
    config: &BevelConfig,
) -> Result<(), RasterError> {
    let (w, h) = (buffer.width(), buffer.height());
    let two_tier = matches!(style, BevelStyle::Raised2 | BevelStyle::Raised3);

    // Top edge, then the optional inner highlight one row down.
    blend_line(buffer, BlendOp::Add, 0, 0, w - 1, 0, config.highlight)?;
    if style == BevelStyle::Raised3 && w > 3 {
        blend_line(buffer, BlendOp::Add, 1, 1, w - 3, 1, config.highlight)?;
    }

    // Left edge below the top row.
    blend_line(buffer, BlendOp::Add, 0, 1, 0, h - 1, config.highlight)?;
    if style == BevelStyle::Raised3 && h > 3 {
        blend_line(buffer, BlendOp::Add, 1, 2, 1, h - 3, config.highlight)?;
    }

    // Bottom: the two-tier styles shade the second-to-last row and accent
    // the last one; plain Raised shades the last row directly.
    if two_tier {
        blend_line(buffer, BlendOp::Subtract, 0, h - 2, w - 3, h - 2, config.shadow)?;
        draw_line(buffer, 0, h - 1, w - 1, h - 1, config.accent)?;
    } else {
        blend_line(buffer, BlendOp::Subtract, 0, h - 1, w - 1, h - 1, config.shadow)?;
    }

    // Right edge mirrors the bottom, one column in from the corner pixels
    // the accent line already owns.
    if two_tier {
        blend_line(buffer, BlendOp::Subtract, w - 2, 0, w - 2, h - 2, config.shadow)?;
        draw_line(buffer, w - 1, 0, w - 1, h - 2, config.accent)?;
    } else {
        blend_line(buffer, BlendOp::Subtract, w - 1, 0, w - 1, h - 2, config.shadow)?;
    }
    Ok(())
}

fn sunken(buffer: &mut PixelBuffer, config: &BevelConfig) -> Result<(), RasterError> {
    let (w, h) = (buffer.width(), buffer.height());
    blend_line(buffer, BlendOp::Subtract, 0, 0, w - 1, 0, config.shadow)?; // top
    blend_line(buffer, BlendOp::Subtract, 0, 1, 0, h - 1, config.shadow)?; // left
    blend_line(buffer, BlendOp::Add, 0, h - 1, w - 1, h - 1, config.highlight)?; // bottom
    blend_line(buffer, BlendOp::Add, w - 1, 0, w - 1, h - 2, config.highlight)?; // right
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelFormat;
    use crate::color::{Color, ColorDelta};
    use crate::fill::clear;

    fn gray_buffer(w: usize, h: usize) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h, PixelFormat::Rgba);
        clear(&mut buf, Color::opaque(100, 100, 100));
        buf
    }

    #[test]
    fn test_too_small_buffer_rejected() {
        // Contract: under-sized buffers fail loudly instead of no-opping.
        for (w, h) in [(2, 8), (8, 2), (2, 2)] {
            let mut buf = PixelBuffer::new(w, h, PixelFormat::Rgba);
            let before = buf.clone();
            let err = apply_bevel(&mut buf, BevelStyle::Raised2).unwrap_err();
            assert_eq!(
                err,
                RasterError::TooSmall {
                    width: w,
                    height: h,
                    min: MIN_BEVEL_DIM
                }
            );
            assert_eq!(buf, before);
        }
    }

    #[test]
    fn test_raised_edges_single_weight() {
        // Plain Raised: bright top/left, shaded outermost bottom/right,
        // no accent line anywhere.
        let mut buf = gray_buffer(6, 6);
        apply_bevel(&mut buf, BevelStyle::Raised).unwrap();

        assert_eq!(buf.get(2, 0).unwrap(), Color::opaque(180, 180, 180));
        assert_eq!(buf.get(0, 2).unwrap(), Color::opaque(180, 180, 180));
        // Bottom row shaded, not blacked out.
        assert_eq!(buf.get(2, 5).unwrap(), Color::opaque(60, 60, 60));
        assert_eq!(buf.get(5, 2).unwrap(), Color::opaque(60, 60, 60));
        // Top-right corner: +80 from the top row, then -40 from the right
        // column.
        assert_eq!(buf.get(5, 0).unwrap(), Color::opaque(140, 140, 140));
        // Interior untouched.
        assert_eq!(buf.get(3, 3).unwrap(), Color::opaque(100, 100, 100));
    }

    #[test]
    fn test_raised2_accent_line_and_inner_shadow() {
        let mut buf = gray_buffer(8, 8);
        apply_bevel(&mut buf, BevelStyle::Raised2).unwrap();

        // Accent line owns the outermost bottom row and right column.
        for x in 0..8 {
            assert_eq!(buf.get(x, 7).unwrap(), Color::new(0, 0, 0, 255));
        }
        for y in 0..7 {
            assert_eq!(buf.get(7, y).unwrap(), Color::new(0, 0, 0, 255));
        }
        // Shadow sits one row in.
        assert_eq!(buf.get(3, 6).unwrap(), Color::opaque(60, 60, 60));
        assert_eq!(buf.get(6, 3).unwrap(), Color::opaque(60, 60, 60));
        // No second highlight tier.
        assert_eq!(buf.get(2, 1).unwrap(), Color::opaque(100, 100, 100));
    }

    #[test]
    fn test_raised3_doubles_the_highlight() {
        let mut buf = gray_buffer(8, 8);
        apply_bevel(&mut buf, BevelStyle::Raised3).unwrap();

        // Outer highlight on row 0 / column 0.
        assert_eq!(buf.get(3, 0).unwrap(), Color::opaque(180, 180, 180));
        // Inner highlight tier spans x 1..=w-3 on row 1 and y 2..=h-3 on
        // column 1.
        assert_eq!(buf.get(1, 1).unwrap(), Color::opaque(180, 180, 180));
        assert_eq!(buf.get(5, 1).unwrap(), Color::opaque(180, 180, 180));
        assert_eq!(buf.get(1, 5).unwrap(), Color::opaque(180, 180, 180));
        // One past the inner tier: only the right/bottom shadow applies.
        assert_eq!(buf.get(6, 1).unwrap(), Color::opaque(60, 60, 60));
        assert_eq!(buf.get(1, 6).unwrap(), Color::opaque(60, 60, 60));
        // Interior past both tiers is untouched.
        assert_eq!(buf.get(3, 3).unwrap(), Color::opaque(100, 100, 100));
    }

    #[test]
    fn test_raised3_on_3x3_skips_inner_tiers_in_bounds() {
        // Contract: the inner-highlight guards collapse cleanly at the
        // minimum size; nothing reads or writes outside the buffer.
        let mut buf = gray_buffer(3, 3);
        apply_bevel(&mut buf, BevelStyle::Raised3).unwrap();

        // (1,1) sees only the shadow from the right column (w-2), not an
        // inner highlight.
        assert_eq!(buf.get(1, 1).unwrap(), Color::opaque(60, 60, 60));
        // Accent lines on the outermost row and column.
        assert_eq!(buf.get(2, 1).unwrap(), Color::new(0, 0, 0, 255));
        assert_eq!(buf.get(1, 2).unwrap(), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn test_sunken_inverts_the_lighting() {
        let mut buf = gray_buffer(6, 6);
        apply_bevel(&mut buf, BevelStyle::Sunken).unwrap();

        // Dark top/left, bright bottom/right, no accent line.
        assert_eq!(buf.get(2, 0).unwrap(), Color::opaque(60, 60, 60));
        assert_eq!(buf.get(0, 2).unwrap(), Color::opaque(60, 60, 60));
        assert_eq!(buf.get(2, 5).unwrap(), Color::opaque(180, 180, 180));
        assert_eq!(buf.get(5, 2).unwrap(), Color::opaque(180, 180, 180));
        // Top-left corner darkened once: the left edge starts at y=1.
        assert_eq!(buf.get(0, 0).unwrap(), Color::opaque(60, 60, 60));
        // Bottom-left corner: -40 from the left column, then +80 from the
        // bottom row.
        assert_eq!(buf.get(0, 5).unwrap(), Color::opaque(140, 140, 140));
        // Top-right corner: -40 from the top row, then +80 from the right
        // column.
        assert_eq!(buf.get(5, 0).unwrap(), Color::opaque(140, 140, 140));
        assert_eq!(buf.get(3, 3).unwrap(), Color::opaque(100, 100, 100));
    }

    #[test]
    fn test_custom_config_changes_the_palette() {
        let mut buf = gray_buffer(6, 6);
        let config = BevelConfig {
            highlight: ColorDelta::gray(20),
            shadow: ColorDelta::gray(10),
            accent: Color::opaque(255, 0, 0),
        };
        apply_bevel_with(&mut buf, BevelStyle::Raised2, &config).unwrap();

        assert_eq!(buf.get(2, 0).unwrap(), Color::opaque(120, 120, 120));
        assert_eq!(buf.get(2, 4).unwrap(), Color::opaque(90, 90, 90));
        assert_eq!(buf.get(2, 5).unwrap(), Color::opaque(255, 0, 0));
    }

    #[test]
    fn test_bevel_on_rgb_buffer() {
        // The same geometry applies to 3-byte buffers.
        let mut buf = PixelBuffer::new(5, 5, PixelFormat::Rgb);
        clear(&mut buf, Color::opaque(100, 100, 100));
        apply_bevel(&mut buf, BevelStyle::Raised2).unwrap();

        assert_eq!(buf.get(0, 0).unwrap(), Color::opaque(180, 180, 180));
        assert_eq!(buf.get(4, 4).unwrap(), Color::opaque(0, 0, 0));
        assert_eq!(buf.get(2, 2).unwrap(), Color::opaque(100, 100, 100));
    }
}
