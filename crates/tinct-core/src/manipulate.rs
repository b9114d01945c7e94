//! Color manipulations: lighten, darken, saturate, mix, invert and friends.
//!
//! Every operation returns a new [`Color`] and keeps the receiver's alpha,
//! except [`Color::mix`], which blends alpha as well.
//!
//! Amounts are fractions: `0.15` means 15 percentage points for the HSL
//! operations and 15% of the way for mix-based ones.

use crate::color::Color;
use crate::convert::hsl_to_rgb;

/// Wrap a hue into the inclusive range [0, 360].
///
/// Values already inside are untouched, so 360 stays 360. Anything outside
/// lands where repeated ±360 steps would put it.
fn wrap_degrees(hue: f64) -> f64 {
    if (0.0..=360.0).contains(&hue) {
        hue
    } else {
        hue.rem_euclid(360.0)
    }
}

impl Color {
    /// Rebuild this color from transformed HSL components, keeping alpha.
    fn map_hsl(&self, f: impl FnOnce(f64, f64, f64) -> (f64, f64, f64)) -> Self {
        let (h, s, l) = self.to_hsl();
        let (h, s, l) = f(h, s, l);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self::rgba(r, g, b, self.alpha())
    }

    /// Blend toward `other` by `weight` (0.0 = self, 1.0 = other).
    ///
    /// ```text
    /// out = round((1 − weight) × self + weight × other)
    /// ```
    ///
    /// Applied to all four channels, so the blended alpha is rounded too.
    /// `weight` is not clamped; values outside [0, 1] extrapolate and the
    /// result is clamped into range.
    #[must_use]
    pub fn mix(&self, other: &Self, weight: f64) -> Self {
        let keep = 1.0 - weight;
        let blend = |a: f64, b: f64| (keep * a + weight * b).round();
        Self::rgba(
            blend(self.red(), other.red()),
            blend(self.green(), other.green()),
            blend(self.blue(), other.blue()),
            blend(self.alpha(), other.alpha()),
        )
    }

    /// HSL hue in whole degrees.
    pub fn hue(&self) -> f64 {
        self.to_hsl().0
    }

    /// HSL saturation in percent.
    pub fn saturation(&self) -> f64 {
        self.to_hsl().1
    }

    /// HSL lightness in percent.
    pub fn lightness(&self) -> f64 {
        self.to_hsl().2
    }

    /// Rotate the HSL hue by `degrees`. Rotations past a full turn keep going
    /// around the wheel in the same direction.
    ///
    /// A NaN or infinite `degrees` has no position on the wheel and returns
    /// the color unchanged.
    #[must_use]
    pub fn adjust_hue(&self, degrees: f64) -> Self {
        if !degrees.is_finite() {
            return *self;
        }
        self.map_hsl(|h, s, l| (wrap_degrees(h + degrees), s, l))
    }

    /// Raise HSL lightness by `amount × 100` points, capped at 100.
    #[must_use]
    pub fn lighten(&self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, s, (l + amount * 100.0).clamp(0.0, 100.0)))
    }

    /// Lower HSL lightness by `amount × 100` points, floored at 0.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, s, (l - amount * 100.0).clamp(0.0, 100.0)))
    }

    /// Raise HSL saturation by `amount × 100` points, capped at 100.
    #[must_use]
    pub fn saturate(&self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, (s + amount * 100.0).clamp(0.0, 100.0), l))
    }

    /// Lower HSL saturation by `amount × 100` points, floored at 0.
    #[must_use]
    pub fn desaturate(&self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, (s - amount * 100.0).clamp(0.0, 100.0), l))
    }

    /// Fully desaturate. Same as `desaturate(1.0)`.
    #[must_use]
    pub fn grayscale(&self) -> Self {
        self.desaturate(1.0)
    }

    /// Opposite hue on the HSL wheel. Same as `adjust_hue(180.0)`.
    #[must_use]
    pub fn complement(&self) -> Self {
        self.adjust_hue(180.0)
    }

    /// Mix toward white, keeping the tone.
    #[must_use]
    pub fn tint(&self, amount: f64) -> Self {
        self.mix(&Self::WHITE.with_alpha(self.alpha()), amount)
    }

    /// Mix toward black, keeping the tone.
    #[must_use]
    pub fn shade(&self, amount: f64) -> Self {
        self.mix(&Self::BLACK.with_alpha(self.alpha()), amount)
    }

    /// RGB negative: `255 − channel`. Not the complement; applying it twice
    /// gives back the original color.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self::rgba(
            255.0 - self.red(),
            255.0 - self.green(),
            255.0 - self.blue(),
            self.alpha(),
        )
    }

    /// Shift every RGB channel by `round(255 × amount)`, each clamped on its
    /// own. Negative amounts darken.
    #[must_use]
    pub fn brighten(&self, amount: f64) -> Self {
        let delta = (255.0 * amount).round();
        Self::rgba(
            self.red() + delta,
            self.green() + delta,
            self.blue() + delta,
            self.alpha(),
        )
    }
}
