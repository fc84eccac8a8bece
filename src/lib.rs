// src/lib.rs

//! Raster buffer compositor for window chrome.
//!
//! A small, single-threaded 2D compositing core used by a windowing backend
//! to decorate and clear in-memory images: packed RGB/RGBA pixel buffers,
//! saturating line blends, raised/sunken bevel borders, solid fills, and a
//! message catalog for image error codes.
//!
//! All operations mutate an exclusively-owned [`PixelBuffer`] in place; no
//! operation allocates or shares state, so independent buffers can be
//! composited from independent threads without any locking.
//!
//! ```
//! use core_raster::{apply_bevel, clear, BevelStyle, Color, PixelBuffer, PixelFormat};
//!
//! let mut image = PixelBuffer::new(32, 32, PixelFormat::Rgba);
//! clear(&mut image, Color::opaque(120, 120, 120));
//! apply_bevel(&mut image, BevelStyle::Raised2)?;
//! assert_eq!(image.get(0, 0)?, Color::opaque(200, 200, 200));
//! # Ok::<(), core_raster::RasterError>(())
//! ```

pub mod bevel;
pub mod buffer;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod fill;
pub mod line;

pub use bevel::{apply_bevel, apply_bevel_with, BevelStyle, MIN_BEVEL_DIM};
pub use buffer::{PixelBuffer, PixelFormat};
pub use catalog::describe;
pub use color::{Color, ColorDelta};
pub use config::{BevelConfig, DEFAULT_HIGHLIGHT, DEFAULT_SHADOW};
pub use error::RasterError;
pub use fill::clear;
pub use line::{blend_line, draw_line, BlendOp};
