//! CMYK ↔ RGB.

use super::to_channel;

/// Convert CMYK percentages (0–100) to RGB channels (0–255).
///
/// ```text
/// channel = round(255 × (1 − min(1, x × (1 − k) + k)))
/// ```
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    let k = k / 100.0;
    let channel = |x: f64| to_channel(1.0 - (x / 100.0 * (1.0 - k) + k).min(1.0));
    (channel(c), channel(m), channel(y))
}

/// Convert RGB channels (0–255) to CMYK whole percentages.
///
/// Pure black has no defined chroma, so its cyan, magenta and yellow are 0.
pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
    let (c, m, y) = if 1.0 - k == 0.0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            (1.0 - r - k) / (1.0 - k),
            (1.0 - g - k) / (1.0 - k),
            (1.0 - b - k) / (1.0 - k),
        )
    };

    let percent = |x: f64| (x * 100.0).round();
    (percent(c), percent(m), percent(y), percent(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmyk_to_rgb_reference() {
        assert_eq!(cmyk_to_rgb(0.0, 49.0, 33.0, 14.0), (219.0, 112.0, 147.0));
    }

    #[test]
    fn test_rgb_to_cmyk_reference() {
        assert_eq!(rgb_to_cmyk(219.0, 112.0, 148.0), (0.0, 49.0, 32.0, 14.0));
    }

    #[test]
    fn test_black_has_no_chroma() {
        assert_eq!(rgb_to_cmyk(0.0, 0.0, 0.0), (0.0, 0.0, 0.0, 100.0));
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 100.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white_is_all_zero() {
        assert_eq!(rgb_to_cmyk(255.0, 255.0, 255.0), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 0.0), (255.0, 255.0, 255.0));
    }

    #[test]
    fn test_saturated_ink_clamps_to_zero() {
        // c × (1 − k) + k exceeds 1 and is capped before inversion.
        assert_eq!(cmyk_to_rgb(150.0, 0.0, 0.0, 50.0), (0.0, 128.0, 128.0));
    }
}
