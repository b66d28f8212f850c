//! Low-level conversion of hex, `rgb()` and named color strings.

use hicharts_common::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for rgb()/rgba(); the alpha group is optional.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

const NAMED: &[(&str, Color)] = &[
    ("black", Color::from_rgba(0, 0, 0, 255)),
    ("white", Color::from_rgba(255, 255, 255, 255)),
    ("red", Color::from_rgba(255, 0, 0, 255)),
    ("green", Color::from_rgba(0, 128, 0, 255)),
    ("blue", Color::from_rgba(0, 0, 255, 255)),
    ("gray", Color::from_rgba(128, 128, 128, 255)),
    ("grey", Color::from_rgba(128, 128, 128, 255)),
    ("orange", Color::from_rgba(255, 165, 0, 255)),
    ("yellow", Color::from_rgba(255, 255, 0, 255)),
    ("purple", Color::from_rgba(128, 0, 128, 255)),
    ("transparent", Color::from_rgba(0, 0, 0, 0)),
];

/// Parse a hex color string (#RGB, #RRGGBB, or #RRGGBBAA).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    if hex.len() == 3 {
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        return Some(Color::from_rgba(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
            255,
        ));
    }
    Color::from_hex(s)
}

/// Parse an `rgb(r,g,b)` or `rgba(r,g,b,a)` string.
pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4) {
        None => 255,
        Some(m) if m.as_str().contains('.') => {
            let a_float: f64 = m.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&a_float) {
                return None;
            }
            (a_float * 255.0).round() as u8
        }
        Some(m) => m.as_str().parse::<u8>().ok()?,
    };

    Some(Color::from_rgba(r, g, b, a))
}

/// Look up a CSS color keyword, case-insensitively.
pub(super) fn parse_named(s: &str) -> Option<Color> {
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, color)| *color)
}
