//! The [`Color`] value type, its constructors and accessors.
//!
//! A `Color` always holds RGB channels clamped to [0, 255] and alpha clamped
//! to [0, 1]. Every constructor converts its input to RGB through
//! [`crate::convert`] and then clamps, so the invariant cannot be broken from
//! outside the module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::ColorError;

/// Clamp raw channels into range: RGB to [0, 255], alpha to [0, 1].
///
/// NaN clamps to the lower bound.
pub fn clamp_channels(r: f64, g: f64, b: f64, a: f64) -> (f64, f64, f64, f64) {
    (
        clamp_to(r, 255.0),
        clamp_to(g, 255.0),
        clamp_to(b, 255.0),
        clamp_to(a, 1.0),
    )
}

#[inline]
fn clamp_to(value: f64, max: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, max) }
}

/// An RGBA color with `f64` channels.
///
/// Colors are plain values: every operation returns a new `Color` and two
/// colors with equal channels are interchangeable.
///
/// # Examples
///
/// ```
/// use tinct_core::Color;
///
/// let base = Color::rgb(219.0, 112.0, 148.0);
/// assert_eq!(base.to_hex(), "DB7094");
/// assert_eq!(base.to_hsl(), (340.0, 59.8, 64.9));
///
/// let red = Color::hex("F00").unwrap();
/// let blue = Color::hex("00F").unwrap();
/// assert_eq!(red.mix(&blue, 0.5).to_html(), "Purple");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Color {
    /// Pure black, opaque.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Pure white, opaque.
    pub const WHITE: Self = Self {
        red: 255.0,
        green: 255.0,
        blue: 255.0,
        alpha: 1.0,
    };

    fn clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        let (red, green, blue, alpha) = clamp_channels(r, g, b, a);
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an opaque color from RGB channels (0–255).
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::clamped(r, g, b, 1.0)
    }

    /// Create a color from RGB channels (0–255) and alpha (0–1).
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::clamped(r, g, b, a)
    }

    /// Create an opaque color from CMYK percentages.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self::cmyka(c, m, y, k, 1.0)
    }

    /// Create a color from CMYK percentages and alpha.
    pub fn cmyka(c: f64, m: f64, y: f64, k: f64, a: f64) -> Self {
        let (r, g, b) = convert::cmyk_to_rgb(c, m, y, k);
        Self::clamped(r, g, b, a)
    }

    /// Create an opaque color from HSL (degrees, percent, percent).
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::hsla(h, s, l, 1.0)
    }

    /// Create a color from HSL and alpha.
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let (r, g, b) = convert::hsl_to_rgb(h, s, l);
        Self::clamped(r, g, b, a)
    }

    /// Create an opaque color from HSV (degrees, percent, percent).
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::hsva(h, s, v, 1.0)
    }

    /// Create a color from HSV and alpha.
    pub fn hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        let (r, g, b) = convert::hsv_to_rgb(h, s, v);
        Self::clamped(r, g, b, a)
    }

    /// Create an opaque color from a hex string (`#` optional, 3 or 6 digits).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexFormat`] if the string is not valid hex.
    pub fn hex(hex: &str) -> Result<Self, ColorError> {
        Self::hexa(hex, 1.0)
    }

    /// Create a color from a hex string and alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexFormat`] if the string is not valid hex.
    pub fn hexa(hex: &str, a: f64) -> Result<Self, ColorError> {
        let (r, g, b) = convert::hex_to_rgb(hex)?;
        Ok(Self::clamped(r, g, b, a))
    }

    /// Create an opaque color from an HTML color name or `#`-prefixed hex.
    ///
    /// Unknown names produce black, see [`convert::html_to_rgb`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexFormat`] for malformed `#` input.
    pub fn html(html: &str) -> Result<Self, ColorError> {
        Self::htmla(html, 1.0)
    }

    /// Create a color from an HTML color name or `#`-prefixed hex, and alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexFormat`] for malformed `#` input.
    pub fn htmla(html: &str, a: f64) -> Result<Self, ColorError> {
        let (r, g, b) = convert::html_to_rgb(html)?;
        Ok(Self::clamped(r, g, b, a))
    }

    /// Return a copy with the given alpha (clamped to [0, 1]).
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::clamped(self.red, self.green, self.blue, alpha)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[inline]
    pub const fn red(&self) -> f64 {
        self.red
    }

    #[inline]
    pub const fn green(&self) -> f64 {
        self.green
    }

    #[inline]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// RGB channels (0–255).
    pub const fn rgb_channels(&self) -> (f64, f64, f64) {
        (self.red, self.green, self.blue)
    }

    /// RGB channels and alpha.
    pub const fn rgba_channels(&self) -> (f64, f64, f64, f64) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// CMYK whole percentages.
    pub fn to_cmyk(&self) -> (f64, f64, f64, f64) {
        convert::rgb_to_cmyk(self.red, self.green, self.blue)
    }

    /// HSL (degrees, percent, percent).
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        convert::rgb_to_hsl(self.red, self.green, self.blue)
    }

    /// HSL plus alpha.
    pub fn to_hsla(&self) -> (f64, f64, f64, f64) {
        let (h, s, l) = self.to_hsl();
        (h, s, l, self.alpha)
    }

    /// HSV (degrees, percent, percent).
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        convert::rgb_to_hsv(self.red, self.green, self.blue)
    }

    /// HSV plus alpha.
    pub fn to_hsva(&self) -> (f64, f64, f64, f64) {
        let (h, s, v) = self.to_hsv();
        (h, s, v, self.alpha)
    }

    /// Six uppercase hex digits, without `#`.
    pub fn to_hex(&self) -> String {
        convert::rgb_to_hex(self.red, self.green, self.blue)
    }

    /// CSS text for this color.
    ///
    /// Opaque colors serialize to their HTML name when one exists, otherwise
    /// to `#RRGGBB`. Any other alpha produces the unrounded functional form
    /// `rgba(219.000000, 112.000000, 147.000000, 0.500000)`.
    pub fn to_html(&self) -> String {
        if self.alpha != 1.0 {
            return format!(
                "rgba({:.6}, {:.6}, {:.6}, {:.6})",
                self.red, self.green, self.blue, self.alpha
            );
        }
        convert::rgb_to_html(self.red, self.green, self.blue)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse CSS text strictly: `#` hex, a known color name, or the
    /// `rgba(r, g, b, a)` form produced by [`Color::to_html`].
    ///
    /// Unlike [`Color::html`], an unknown name is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(args) = s.strip_prefix("rgba(").and_then(|rest| rest.strip_suffix(')')) {
            return parse_rgba_args(args).ok_or_else(|| ColorError::InvalidRgbaFormat(s.to_owned()));
        }

        let (r, g, b) = convert::parse_html_to_rgb(s)?;
        Ok(Self::rgb(r, g, b))
    }
}

fn parse_rgba_args(args: &str) -> Option<Color> {
    let mut values = args.split(',').map(|v| v.trim().parse::<f64>());
    let mut next = || values.next()?.ok();
    let color = Color::rgba(next()?, next()?, next()?, next()?);
    values.next().is_none().then_some(color)
}

/// Accepted serialized forms: CSS text, or explicit channels with optional
/// alpha.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Text(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = ColorError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Text(text) => text.parse(),
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Self::rgba(red, green, blue, alpha)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clamp_channels() {
        assert_eq!(
            clamp_channels(-10.0, 300.0, 128.0, 1.5),
            (0.0, 255.0, 128.0, 1.0)
        );
        assert_eq!(
            clamp_channels(f64::NAN, 10.0, 10.0, f64::NAN),
            (0.0, 10.0, 10.0, 0.0)
        );
    }

    #[test]
    fn test_constructors_clamp() {
        let c = Color::rgba(400.0, -3.0, 12.0, -0.5);
        assert_eq!(c.rgba_channels(), (255.0, 0.0, 12.0, 0.0));
        assert_eq!(Color::hsv(-60.0, 100.0, 100.0).rgb_channels(), (255.0, 0.0, 0.0));
    }

    #[test]
    fn test_alpha_variants_keep_alpha() {
        assert_eq!(Color::cmyka(20.0, 20.0, 20.0, 20.0, 0.5).alpha(), 0.5);
        assert_eq!(Color::hsla(20.0, 20.0, 20.0, 0.5).alpha(), 0.5);
        assert_eq!(Color::hsva(20.0, 20.0, 20.0, 0.5).alpha(), 0.5);
        assert_eq!(Color::htmla("Red", 0.5).unwrap().alpha(), 0.5);
        assert_eq!(Color::hexa("000", 0.5).unwrap().alpha(), 0.5);
        assert_eq!(Color::rgba(20.0, 20.0, 20.0, 0.5).alpha(), 0.5);
    }

    #[test]
    fn test_default_alpha_is_opaque() {
        assert_eq!(Color::cmyk(0.0, 49.0, 33.0, 14.0).alpha(), 1.0);
        assert_eq!(Color::hsl(340.0, 59.8, 64.9).alpha(), 1.0);
        assert_eq!(Color::hsv(340.0, 48.9, 85.9).alpha(), 1.0);
    }

    #[test]
    fn test_accessors() {
        let c = Color::rgb(219.0, 112.0, 148.0);
        assert_eq!(c.rgb_channels(), (219.0, 112.0, 148.0));
        assert_eq!(c.rgba_channels(), (219.0, 112.0, 148.0, 1.0));
        assert_eq!(c.to_cmyk(), (0.0, 49.0, 32.0, 14.0));
        assert_eq!(c.to_hsla(), (340.0, 59.8, 64.9, 1.0));
        assert_eq!(c.to_hsva(), (340.0, 48.9, 85.9, 1.0));
        assert_eq!(c.to_hex(), "DB7094");
    }

    #[test]
    fn test_to_html() {
        assert_eq!(Color::rgb(219.0, 112.0, 148.0).to_html(), "#DB7094");
        assert_eq!(Color::rgb(219.0, 112.0, 147.0).to_html(), "PaleVioletRed");
        assert_eq!(
            Color::rgb(219.0, 112.0, 147.0).with_alpha(0.5).to_html(),
            "rgba(219.000000, 112.000000, 147.000000, 0.500000)"
        );
    }

    #[test]
    fn test_invalid_hex_constructor() {
        assert_eq!(
            Color::hex("12345"),
            Err(ColorError::InvalidHexFormat("12345".to_owned()))
        );
    }

    #[test]
    fn test_unknown_html_name_is_black() {
        assert_eq!(Color::html("NinjaTurtle"), Ok(Color::BLACK));
    }

    #[test]
    fn test_from_str_forms() {
        let expected = Color::rgb(219.0, 112.0, 147.0);
        assert_eq!("PaleVioletRed".parse::<Color>(), Ok(expected));
        assert_eq!("#DB7093".parse::<Color>(), Ok(expected));
        assert_eq!(
            " rgba(219, 112, 147, 0.25) ".parse::<Color>(),
            Ok(expected.with_alpha(0.25))
        );
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!(
            "NinjaTurtle".parse::<Color>(),
            Err(ColorError::UnknownColorName("NinjaTurtle".to_owned()))
        );
        // Hex digits need the `#`; a word like "Bad" is not a color.
        for word in ["Bad", "fed", "db7093"] {
            assert_eq!(
                word.parse::<Color>(),
                Err(ColorError::UnknownColorName(word.to_owned())),
                "{word}"
            );
        }
        assert_eq!(
            "#NOPE".parse::<Color>(),
            Err(ColorError::InvalidHexFormat("#NOPE".to_owned()))
        );
        assert_eq!(
            "rgba(1, 2, 3)".parse::<Color>(),
            Err(ColorError::InvalidRgbaFormat("rgba(1, 2, 3)".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for color in [
            Color::rgb(219.0, 112.0, 148.0),
            Color::rgb(128.0, 0.0, 128.0),
            Color::rgba(10.0, 20.0, 30.0, 0.75),
        ] {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }

    #[test]
    fn test_serde_struct_form() {
        let color = Color::rgba(219.0, 112.0, 147.0, 0.5);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r#"{"red":219.0,"green":112.0,"blue":147.0,"alpha":0.5}"#);
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }

    #[test]
    fn test_serde_accepts_text_and_clamps_channels() {
        let named: Color = serde_json::from_str(r#""Purple""#).unwrap();
        assert_eq!(named, Color::rgb(128.0, 0.0, 128.0));

        let wild: Color = serde_json::from_str(r#"{"red":999,"green":-1,"blue":5}"#).unwrap();
        assert_eq!(wild.rgba_channels(), (255.0, 0.0, 5.0, 1.0));

        assert!(serde_json::from_str::<Color>(r#""NinjaTurtle""#).is_err());
        assert!(serde_json::from_str::<Color>(r#""fed""#).is_err());
        let hex: Color = serde_json::from_str(r##""#fed""##).unwrap();
        assert_eq!(hex, Color::rgb(255.0, 238.0, 221.0));
    }
}
