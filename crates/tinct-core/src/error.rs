//! Error type for parsing colors from text.

/// Failure to interpret a textual color.
///
/// Numeric conversions never fail; only decoding strings does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected 3 or 6 hex digits with an optional '#'")]
    InvalidHexFormat(String),
    #[error("unknown color name {0:?}")]
    UnknownColorName(String),
    #[error("invalid rgba() color {0:?}")]
    InvalidRgbaFormat(String),
}
