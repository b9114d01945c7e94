//! Tinct Core: color-model conversion and manipulation.
//!
//! This crate contains the conversion math between RGB, CMYK, HSL, HSV,
//! hex strings and HTML color names, the [`Color`] value type built on it,
//! and the manipulations and perceptual metrics derived from a color.
//! No I/O and no shared mutable state.

pub mod adjust;
pub mod color;
pub mod convert;
pub mod error;
pub mod manipulate;
pub mod metrics;

// Re-exports for convenience.
pub use adjust::Adjustment;
pub use color::{Color, clamp_channels};
pub use convert::{
    cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, html_to_rgb, hue_to_rgb, parse_html_to_rgb,
    rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_html,
};
pub use error::ColorError;
