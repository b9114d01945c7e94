//! Perceptual metrics: luminance, contrast and light/dark classification.
//!
//! These read RGB channels only; alpha is ignored.

use crate::color::Color;

/// Rec. 709 luminance weights.
const LUMA_REC709: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Rec. 601 weights for the light/dark heuristic.
const LUMA_REC601: [f64; 3] = [0.299, 0.587, 0.114];

/// Plain luminance below this suggests a white foreground.
const FOREGROUND_THRESHOLD: f64 = 140.0;

#[inline]
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[inline]
fn weighted([r, g, b]: [f64; 3], weights: [f64; 3]) -> f64 {
    r * weights[0] + g * weights[1] + b * weights[2]
}

/// sRGB decoding of one 0–255 channel to linear light.
///
/// ```text
/// c <= 0.03928 → c / 12.92
/// c >  0.03928 → ((c + 0.055) / 1.055) ^ 2.4
/// ```
fn srgb_to_linear(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Color {
    fn channels(&self) -> [f64; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Rec. 709 weighted sum of the raw 0–255 channels, to two decimals.
    pub fn luminance(&self) -> f64 {
        round_hundredths(weighted(self.channels(), LUMA_REC709))
    }

    /// WCAG 2.0 relative luminance (0–1), to two decimals.
    pub fn luminance_wcag(&self) -> f64 {
        let linear = self.channels().map(srgb_to_linear);
        round_hundredths(weighted(linear, LUMA_REC709))
    }

    /// Suggested text color on this background: white when
    /// [`luminance`](Self::luminance) is below 140, black otherwise.
    #[must_use]
    pub fn foreground(&self) -> Self {
        if self.luminance() < FOREGROUND_THRESHOLD {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }

    /// WCAG contrast ratio against `other` (1–21), to two decimals.
    pub fn contrast(&self, other: &Self) -> f64 {
        let a = self.luminance_wcag() + 0.05;
        let b = other.luminance_wcag() + 0.05;
        round_hundredths(a.max(b) / a.min(b))
    }

    /// Whether the color reads as light: perceived darkness below one half.
    pub fn is_light(&self) -> bool {
        let darkness = 1.0 - weighted(self.channels(), LUMA_REC601) / 255.0;
        darkness < 0.5
    }

    /// Negation of [`is_light`](Self::is_light).
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }
}
