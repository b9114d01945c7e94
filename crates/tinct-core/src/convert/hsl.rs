//! HSL ↔ RGB.
//!
//! Hue is in degrees (0–360), saturation and lightness in percent (0–100).

use super::{to_channel, to_percent_tenths};

/// Contribution of one RGB channel for an HSL color.
///
/// `t` is the hue offset for the channel as a fraction of a full turn. It is
/// wrapped once into [0, 1] before evaluating the piecewise ramp:
///
/// ```text
/// t < 1/6 → p + (q − p) × 6t
/// t < 1/2 → q
/// t < 2/3 → p + (q − p) × (2/3 − t) × 6
/// else    → p
/// ```
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert RGB channels (0–255) to HSL.
///
/// Hue is rounded to a whole degree; saturation and lightness to one decimal.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            // Red-dominant hues below zero are lifted by a full sextant turn.
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h, s)
    };

    ((h * 60.0).round(), to_percent_tenths(s), to_percent_tenths(l))
}

/// Convert HSL (degrees, percent, percent) to RGB channels (0–255).
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_rgb_to_hsl_reference() {
        assert_eq!(rgb_to_hsl(219.0, 112.0, 148.0), (340.0, 59.8, 64.9));
    }

    #[test]
    fn test_hsl_to_rgb_reference() {
        assert_eq!(hsl_to_rgb(340.0, 59.8, 64.9), (219.0, 112.0, 148.0));
    }

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsl(128.0, 128.0, 128.0), (0.0, 0.0, 50.2));
        assert_eq!(hsl_to_rgb(200.0, 0.0, 50.2), (128.0, 128.0, 128.0));
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsl(255.0, 0.0, 0.0), (0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0.0, 255.0, 0.0), (120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0.0, 0.0, 255.0), (240.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0.0, 0.0, 255.0));
    }

    #[test]
    fn test_red_dominant_with_blue_over_green_wraps_positive() {
        let (h, _, _) = rgb_to_hsl(255.0, 0.0, 128.0);
        assert!((0.0..=360.0).contains(&h), "hue {h} out of range");
        assert_eq!(h, 330.0);
    }

    #[test]
    fn test_hue_to_rgb_wraps_offsets() {
        let (p, q) = (0.2, 0.8);
        assert!((hue_to_rgb(p, q, -0.25) - hue_to_rgb(p, q, 0.75)).abs() < EPSILON);
        assert!((hue_to_rgb(p, q, 1.25) - hue_to_rgb(p, q, 0.25)).abs() < EPSILON);
        assert!((hue_to_rgb(p, q, 0.3) - q).abs() < EPSILON);
        assert!((hue_to_rgb(p, q, 0.9) - p).abs() < EPSILON);
    }
}
