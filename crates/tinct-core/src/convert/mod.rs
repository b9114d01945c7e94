//! Conversion engine: pairwise converters between RGB and every other
//! representation.
//!
//! All functions work on `f64` channels and are lossy on purpose: RGB
//! channels are rounded to integers, CMYK components to whole percentages,
//! hue to whole degrees and HSL/HSV saturation, lightness and value to one
//! decimal place. A round trip through HSL or HSV therefore does not always
//! recover the original RGB triplet.
//!
//! Rounding is [`f64::round`] (half away from zero) everywhere.

pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod html;

pub use cmyk::{cmyk_to_rgb, rgb_to_cmyk};
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use hsl::{hsl_to_rgb, hue_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use html::{html_to_rgb, parse_html_to_rgb, rgb_to_html};

/// Scale a unit-range value to an integral 0–255 channel.
#[inline]
fn to_channel(unit: f64) -> f64 {
    (unit * 255.0).round()
}

/// Scale a unit-range value to a percentage with one decimal place.
#[inline]
fn to_percent_tenths(unit: f64) -> f64 {
    (unit * 1000.0).round() / 10.0
}
