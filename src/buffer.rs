// src/buffer.rs

//! Owned packed pixel buffer.
//!
//! A `PixelBuffer` is a width x height grid of packed RGB or RGBA pixels,
//! row-major with no padding between rows. The byte length is fixed at
//! construction (`width * height * bytes_per_pixel`) and every operation in
//! this crate mutates the buffer in place; nothing reallocates it.

use crate::color::Color;
use crate::error::RasterError;
use serde::{Deserialize, Serialize};

/// Packed pixel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 3 bytes per pixel: R, G, B.
    Rgb,
    /// 4 bytes per pixel: R, G, B, A.
    Rgba,
}

impl PixelFormat {
    /// Packed size of one pixel in bytes.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Exclusively-owned raster image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zero-filled buffer.
    ///
    /// # Panics
    /// Panics if either dimension is zero; buffer dimensions are positive
    /// by contract.
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        assert!(
            width > 0 && height > 0,
            "PixelBuffer dimensions must be positive (got {}x{})",
            width,
            height
        );
        Self {
            width,
            height,
            format,
            data: vec![0; width * height * format.bytes_per_pixel()],
        }
    }

    /// Adopts caller-supplied pixel data.
    ///
    /// # Errors
    /// `InvalidFormat` if `data.len()` differs from
    /// `width * height * bytes_per_pixel`.
    ///
    /// # Panics
    /// Panics if either dimension is zero, as in [`PixelBuffer::new`].
    pub fn from_vec(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, RasterError> {
        assert!(
            width > 0 && height > 0,
            "PixelBuffer dimensions must be positive (got {}x{})",
            width,
            height
        );
        let expected = width * height * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(RasterError::InvalidFormat {
                width,
                height,
                format,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Packed length of one row in bytes.
    pub fn row_bytes(&self) -> usize {
        self.width * self.format.bytes_per_pixel()
    }

    /// The raw packed pixel data, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, handing the pixel data back to the caller.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Reads the pixel at `(x, y)`. RGB buffers report alpha 255.
    ///
    /// # Errors
    /// `OutOfBounds` if the coordinate lies outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Result<Color, RasterError> {
        let off = self.offset_of(x, y)?;
        let px = &self.data[off..];
        Ok(match self.format {
            PixelFormat::Rgb => Color::opaque(px[0], px[1], px[2]),
            PixelFormat::Rgba => Color::new(px[0], px[1], px[2], px[3]),
        })
    }

    /// Writes the pixel at `(x, y)`. RGB buffers ignore `color.a`.
    ///
    /// # Errors
    /// `OutOfBounds` if the coordinate lies outside the buffer.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<(), RasterError> {
        let off = self.offset_of(x, y)?;
        let px = &mut self.data[off..];
        px[0] = color.r;
        px[1] = color.g;
        px[2] = color.b;
        if let PixelFormat::Rgba = self.format {
            px[3] = color.a;
        }
        Ok(())
    }

    /// Byte offset of pixel `(x, y)`, bounds-checked.
    pub(crate) fn offset_of(&self, x: usize, y: usize) -> Result<usize, RasterError> {
        if x >= self.width || y >= self.height {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width + x) * self.format.bytes_per_pixel())
    }
}
