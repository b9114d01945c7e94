//! Hex string ↔ RGB.

use crate::error::ColorError;

/// Encode RGB channels as six uppercase hex digits, without a `#` prefix.
///
/// Channels are rounded to the nearest integer and saturated into 0–255.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!("{:02X}{:02X}{:02X}", to_byte(r), to_byte(g), to_byte(b))
}

/// Decode a hex string to RGB channels.
///
/// Accepts an optional leading `#`, the 3-digit shorthand (`F0A` → `FF00AA`)
/// and the full 6-digit form, in either letter case.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexFormat`] for any other length or for a
/// character that is not a hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<(f64, f64, f64), ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let decoded = match *digits.as_bytes() {
        [r, g, b] => decode_channels([r, r], [g, g], [b, b]),
        [r1, r2, g1, g2, b1, b2] => decode_channels([r1, r2], [g1, g2], [b1, b2]),
        _ => None,
    };

    decoded.ok_or_else(|| {
        tracing::debug!(input = hex, "rejected hex color");
        ColorError::InvalidHexFormat(hex.to_owned())
    })
}

fn decode_channels(r: [u8; 2], g: [u8; 2], b: [u8; 2]) -> Option<(f64, f64, f64)> {
    Some((decode_byte(r)?, decode_byte(g)?, decode_byte(b)?))
}

fn decode_byte([hi, lo]: [u8; 2]) -> Option<f64> {
    let nibble = |digit: u8| char::from(digit).to_digit(16);
    Some(f64::from(nibble(hi)? * 16 + nibble(lo)?))
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    // `as` saturates out-of-range floats and maps NaN to 0.
    channel.round() as u8
}
