//! HSV ↔ RGB.
//!
//! Hue is in degrees (0–360), saturation and value in percent (0–100).

use super::{to_channel, to_percent_tenths};

/// Convert HSV (degrees, percent, percent) to RGB channels (0–255).
///
/// Six-sector hexagon decomposition:
///
/// ```text
/// C = V × S
/// X = C × (1 − |(H / 60) mod 2 − 1|)
/// m = V − C
///
/// sector 0: (C, X, 0)    sector 3: (0, X, C)
/// sector 1: (X, C, 0)    sector 4: (X, 0, C)
/// sector 2: (0, C, X)    sector 5: (C, 0, X)
///
/// out = (sector + m) × 255
/// ```
///
/// Hues outside [0, 360) fall into sector 5.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = s / 100.0;
    let v = v / 100.0;

    let chroma = v * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = match sector {
        hh if (0.0..1.0).contains(&hh) => (chroma, x, 0.0),
        hh if (1.0..2.0).contains(&hh) => (x, chroma, 0.0),
        hh if (2.0..3.0).contains(&hh) => (0.0, chroma, x),
        hh if (3.0..4.0).contains(&hh) => (0.0, x, chroma),
        hh if (4.0..5.0).contains(&hh) => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = v - chroma;
    (to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Convert RGB channels (0–255) to HSV.
///
/// Hue is rounded to a whole degree; saturation and value to one decimal.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;
    let v = max;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = delta / max;
        let offset = |channel: f64| ((max - channel) / 6.0 + delta / 2.0) / delta;
        let (delta_r, delta_g, delta_b) = (offset(r), offset(g), offset(b));

        let mut h = if max == r {
            delta_b - delta_g
        } else if max == g {
            1.0 / 3.0 + delta_r - delta_b
        } else {
            2.0 / 3.0 + delta_g - delta_r
        };
        if h < 0.0 {
            h += 1.0;
        }
        if h > 1.0 {
            h -= 1.0;
        }
        (h, s)
    };

    ((h * 360.0).round(), to_percent_tenths(s), to_percent_tenths(v))
}
