// src/error.rs

//! Error type for the compositing operations.
//!
//! Every variant is a programmer-error-class condition detected at the call
//! site: nothing here is transient or worth retrying, and none of them is
//! fatal to the process. Callers decide whether to abort or just skip the
//! decoration.

use crate::buffer::PixelFormat;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RasterError {
    /// A coordinate lies outside the buffer.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A line segment is neither horizontal nor vertical.
    #[error("line ({x0}, {y0}) -> ({x1}, {y1}) is not axis-aligned")]
    UnsupportedGeometry {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },

    /// A bevel was requested on a buffer below the minimum dimensions.
    #[error("{width}x{height} buffer is too small to bevel (minimum {min}x{min})")]
    TooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    /// A raw buffer's byte length is inconsistent with its declared
    /// width, height, and format.
    #[error("{actual} bytes of pixel data do not match a {width}x{height} {format:?} buffer ({expected} bytes)")]
    InvalidFormat {
        width: usize,
        height: usize,
        format: PixelFormat,
        expected: usize,
        actual: usize,
    },
}
