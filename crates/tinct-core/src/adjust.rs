//! Serializable manipulation steps.
//!
//! An [`Adjustment`] names one manipulation and its parameter, so a chain of
//! them can be stored as data (JSON, TOML, ...) and replayed on any color:
//!
//! ```json
//! [
//!   { "op": "lighten", "amount": 0.15 },
//!   { "op": "adjust_hue", "degrees": 30 },
//!   { "op": "mix", "with": "Purple", "weight": 0.25 }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One manipulation step. Amounts and weights are fractions (0.15 = 15%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Adjustment {
    Lighten { amount: f64 },
    Darken { amount: f64 },
    Saturate { amount: f64 },
    Desaturate { amount: f64 },
    Grayscale,
    AdjustHue { degrees: f64 },
    Complement,
    Tint { amount: f64 },
    Shade { amount: f64 },
    Mix { with: Color, weight: f64 },
    Invert,
    Brighten { amount: f64 },
    Foreground,
}

impl Adjustment {
    /// Human-readable label for headings and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lighten { .. } => "Lighten",
            Self::Darken { .. } => "Darken",
            Self::Saturate { .. } => "Saturate",
            Self::Desaturate { .. } => "Desaturate",
            Self::Grayscale => "Grayscale",
            Self::AdjustHue { .. } => "AdjustHue",
            Self::Complement => "Complement",
            Self::Tint { .. } => "Tint",
            Self::Shade { .. } => "Shade",
            Self::Mix { .. } => "Mix",
            Self::Invert => "Invert",
            Self::Brighten { .. } => "Brighten",
            Self::Foreground => "Foreground",
        }
    }

    /// The numeric parameter, if this step has one.
    pub const fn parameter(&self) -> Option<f64> {
        match *self {
            Self::Lighten { amount }
            | Self::Darken { amount }
            | Self::Saturate { amount }
            | Self::Desaturate { amount }
            | Self::Tint { amount }
            | Self::Shade { amount }
            | Self::Brighten { amount } => Some(amount),
            Self::AdjustHue { degrees } => Some(degrees),
            Self::Mix { weight, .. } => Some(weight),
            Self::Grayscale | Self::Complement | Self::Invert | Self::Foreground => None,
        }
    }
}

impl Color {
    /// Apply a single adjustment.
    #[must_use]
    pub fn apply(&self, adjustment: &Adjustment) -> Self {
        match *adjustment {
            Adjustment::Lighten { amount } => self.lighten(amount),
            Adjustment::Darken { amount } => self.darken(amount),
            Adjustment::Saturate { amount } => self.saturate(amount),
            Adjustment::Desaturate { amount } => self.desaturate(amount),
            Adjustment::Grayscale => self.grayscale(),
            Adjustment::AdjustHue { degrees } => self.adjust_hue(degrees),
            Adjustment::Complement => self.complement(),
            Adjustment::Tint { amount } => self.tint(amount),
            Adjustment::Shade { amount } => self.shade(amount),
            Adjustment::Mix { with, weight } => self.mix(&with, weight),
            Adjustment::Invert => self.invert(),
            Adjustment::Brighten { amount } => self.brighten(amount),
            Adjustment::Foreground => self.foreground(),
        }
    }

    /// Apply adjustments in order, each to the previous result.
    #[must_use]
    pub fn apply_all<'a>(&self, adjustments: impl IntoIterator<Item = &'a Adjustment>) -> Self {
        adjustments
            .into_iter()
            .fold(*self, |color, adjustment| color.apply(adjustment))
    }
}
