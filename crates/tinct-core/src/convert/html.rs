//! HTML color name ↔ RGB, backed by the `tinct-names` table.

use crate::error::ColorError;

use super::hex::{hex_to_rgb, rgb_to_hex};

/// Convert an HTML color name or a `#`-prefixed hex string to RGB.
///
/// Names are matched case-insensitively. An unknown name yields black
/// `(0, 0, 0)` and logs a warning; use [`parse_html_to_rgb`] to reject it
/// instead.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexFormat`] when the input starts with `#`
/// but is not valid hex.
pub fn html_to_rgb(html: &str) -> Result<(f64, f64, f64), ColorError> {
    match parse_html_to_rgb(html) {
        Err(ColorError::UnknownColorName(name)) => {
            tracing::warn!(name = %name, "unknown HTML color name, falling back to black");
            Ok((0.0, 0.0, 0.0))
        }
        other => other,
    }
}

/// Strict form of [`html_to_rgb`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexFormat`] for malformed `#` input and
/// [`ColorError::UnknownColorName`] when the name is not in the table.
pub fn parse_html_to_rgb(html: &str) -> Result<(f64, f64, f64), ColorError> {
    if html.starts_with('#') {
        return hex_to_rgb(html);
    }
    match tinct_names::hex_for_name(html) {
        Some(hex) => hex_to_rgb(hex),
        None => Err(ColorError::UnknownColorName(html.to_owned())),
    }
}

/// Convert RGB channels to their HTML color name, or to `#RRGGBB` when the
/// color has no name.
pub fn rgb_to_html(r: f64, g: f64, b: f64) -> String {
    let hex = rgb_to_hex(r, g, b);
    match tinct_names::name_for_hex(&hex) {
        Some(name) => name.to_owned(),
        None => format!("#{hex}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_rgb_by_name() {
        assert_eq!(html_to_rgb("PaleVioletRed"), Ok((219.0, 112.0, 147.0)));
        assert_eq!(html_to_rgb("palevioletred"), Ok((219.0, 112.0, 147.0)));
    }

    #[test]
    fn test_html_to_rgb_by_hex() {
        assert_eq!(html_to_rgb("#F0F0F0"), Ok((240.0, 240.0, 240.0)));
        assert_eq!(html_to_rgb("#FFF"), Ok((255.0, 255.0, 255.0)));
    }

    #[test]
    fn test_unknown_name_falls_back_to_black() {
        assert_eq!(html_to_rgb("NinjaTurtle"), Ok((0.0, 0.0, 0.0)));
        assert_eq!(html_to_rgb(""), Ok((0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_strict_lookup_rejects_unknown_name() {
        assert_eq!(
            parse_html_to_rgb("NinjaTurtle"),
            Err(ColorError::UnknownColorName("NinjaTurtle".to_owned()))
        );
    }

    #[test]
    fn test_bad_hex_is_an_error_in_both_modes() {
        let expected = Err(ColorError::InvalidHexFormat("#XYZ".to_owned()));
        assert_eq!(html_to_rgb("#XYZ"), expected);
        assert_eq!(parse_html_to_rgb("#XYZ"), expected);
    }

    #[test]
    fn test_rgb_to_html() {
        assert_eq!(rgb_to_html(219.0, 112.0, 147.0), "PaleVioletRed");
        assert_eq!(rgb_to_html(219.0, 112.0, 148.0), "#DB7094");
        assert_eq!(rgb_to_html(0.0, 255.0, 255.0), "Aqua");
    }
}
