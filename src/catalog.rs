// src/catalog.rs

//! Human-readable descriptions for raster error codes.
//!
//! Image loaders and display glue report failures as small integer codes;
//! this table turns them into user-facing strings. `describe` is total:
//! any unrecognized code falls back to the generic internal-error message.

use log::debug;

/// Error codes reported by image loading and display operations.
pub mod codes {
    /// Operation completed without error.
    pub const NONE: i32 = 0;
    /// A file could not be opened.
    pub const OPEN_FAILED: i32 = 1;
    /// Reading from a file failed.
    pub const READ_FAILED: i32 = 2;
    /// Writing to a file failed.
    pub const WRITE_FAILED: i32 = 3;
    /// An allocation failed.
    pub const NO_MEMORY: i32 = 4;
    /// The display ran out of color cells.
    pub const NO_COLOR_CELLS: i32 = 5;
    /// An image file is corrupt or not an image at all.
    pub const BAD_IMAGE_FILE: i32 = 6;
    /// An image file uses a format this library cannot load.
    pub const BAD_FORMAT: i32 = 7;
    /// An image file does not contain the requested image index.
    pub const BAD_INDEX: i32 = 8;
    /// A visual ID does not exist on the display.
    pub const BAD_VISUAL_ID: i32 = 9;
    /// Standard colormap creation failed.
    pub const STD_CMAP_FAIL: i32 = 10;
    /// The window system reported an error.
    pub const WINDOW_SYSTEM: i32 = 11;
    /// Generic internal error; also the fallback for unknown codes.
    pub const INTERNAL: i32 = 12;
}

/// Returns the description for `code`.
///
/// Never fails: unrecognized codes, including negative ones, map to the
/// generic internal-error message.
pub fn describe(code: i32) -> &'static str {
    match code {
        codes::NONE => "no error",
        codes::OPEN_FAILED => "could not open file",
        codes::READ_FAILED => "error reading from file",
        codes::WRITE_FAILED => "error writing to file",
        codes::NO_MEMORY => "out of memory",
        codes::NO_COLOR_CELLS => "out of color cells",
        codes::BAD_IMAGE_FILE => "invalid or corrupted image file",
        codes::BAD_FORMAT => "the image format in the file is not supported and can't be loaded",
        codes::BAD_INDEX => "image file does not contain requested image index",
        codes::BAD_VISUAL_ID => "request for an invalid visual ID",
        codes::STD_CMAP_FAIL => "failed to create standard colormap",
        codes::WINDOW_SYSTEM => "internal window system error",
        codes::INTERNAL => "internal error",
        other => {
            debug!("describe: unrecognized error code {}, using generic message", other);
            "internal error"
        }
    }
}
