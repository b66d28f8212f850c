//! CSS color parsing and validation.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)`, `rgba(r,g,b,a)`
//! and a handful of named colors. In the `rgba()` format the alpha
//! component can be either 0-255 (integer) or 0.0-1.0 (float).
//!
//! Options nodes never call into this module themselves; it backs the
//! opt-in lint and color rewriting in [`crate::validation`].

mod parse;

#[cfg(test)]
mod tests;

use hicharts_common::{Color, OptionsError};

use parse::{parse_hex, parse_named, parse_rgb, HEX_RE, RGB_RE};

/// Parse a CSS color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, OptionsError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| OptionsError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgb(s)
            .ok_or_else(|| OptionsError::ParseError(format!("invalid rgb color: {s}")));
    }

    parse_named(s)
        .ok_or_else(|| OptionsError::ParseError(format!("unrecognized color format: {s}")))
}

/// Notation used when rewriting a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorNotation {
    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    Hex,
    /// `rgba(r,g,b,a)` with a 0.0-1.0 alpha.
    Rgba,
}

/// Parse `s` and write it back in the given notation.
pub fn normalize_color(s: &str, notation: ColorNotation) -> Result<String, OptionsError> {
    let color = parse_color(s)?;
    Ok(match notation {
        ColorNotation::Hex => color.to_hex(),
        ColorNotation::Rgba => color.to_css_rgba(),
    })
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGB_RE.is_match(s) && parse_rgb(s).is_some();
    }
    parse_named(s).is_some()
}
