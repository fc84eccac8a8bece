// src/config.rs

//! Visual configuration for border decoration.
//!
//! The classic chrome look is two gray deltas (a +80 highlight, a -40
//! shadow) and a black accent line. `BevelConfig` names those values so a
//! new visual style is a matter of data, not of duplicating the bevel
//! algorithm. The struct deserializes from a configuration file with
//! per-field defaults, so a file may name any subset of the fields.

use crate::color::{Color, ColorDelta};
use serde::{Deserialize, Serialize};

/// Default per-channel magnitude of the bright edge delta.
pub const DEFAULT_HIGHLIGHT: u8 = 80;

/// Default per-channel magnitude of the dark edge delta.
pub const DEFAULT_SHADOW: u8 = 40;

/// Tunable parameters for [`crate::bevel::apply_bevel_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BevelConfig {
    /// Delta added along lit edges (top/left when raised, bottom/right when
    /// sunken).
    pub highlight: ColorDelta,
    /// Delta subtracted along shaded edges.
    pub shadow: ColorDelta,
    /// Solid color of the outermost accent line drawn by the two-tier
    /// raised styles.
    pub accent: Color,
}

impl Default for BevelConfig {
    fn default() -> Self {
        Self {
            highlight: ColorDelta::gray(DEFAULT_HIGHLIGHT),
            shadow: ColorDelta::gray(DEFAULT_SHADOW),
            accent: Color::opaque(0, 0, 0),
        }
    }
}
