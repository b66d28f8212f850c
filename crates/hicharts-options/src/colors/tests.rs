//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#FF0000").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#00d4ff80").unwrap();
    assert_eq!(c, Color::from_rgba(0, 212, 255, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_rgb_without_alpha_is_opaque() {
    let c = parse_color("rgb(51,51,51)").unwrap();
    assert_eq!(c, Color::from_rgba(51, 51, 51, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,212,255,0.12)").unwrap();
    // 0.12 * 255 = 30.6 -> 31
    assert_eq!(c, Color::from_rgba(0, 212, 255, 31));
}

#[test]
fn parse_rgba_integer_alpha() {
    let c = parse_color("rgba(0,0,0,128)").unwrap();
    assert_eq!(c.a, 128);
}

#[test]
fn parse_rgba_with_spaces() {
    let c = parse_color("rgba( 100 , 180 , 255 , 0.9 )").unwrap();
    // 0.9 * 255 = 229.5 -> 230
    assert_eq!(c, Color::from_rgba(100, 180, 255, 230));
}

#[test]
fn parse_named_colors() {
    assert_eq!(parse_color("black").unwrap(), Color::BLACK);
    assert_eq!(parse_color("Red").unwrap(), Color::from_rgba(255, 0, 0, 255));
    assert_eq!(parse_color("transparent").unwrap().a, 0);
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
    assert!(parse_color("rgba(0,0,0,1.5)").is_err());
}

#[test]
fn validate_color_accepts_valid() {
    assert!(validate_color("#000000"));
    assert!(validate_color("#00d4ff80"));
    assert!(validate_color("#f00"));
    assert!(validate_color("rgb(0,0,0)"));
    assert!(validate_color("rgba(255,255,255,1.0)"));
    assert!(validate_color("white"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("   "));
    assert!(!validate_color("not-a-color"));
    assert!(!validate_color("#12345"));
    assert!(!validate_color("rgb(10,20)"));
    assert!(!validate_color("rgb(256,0,0)"));
}

#[test]
fn documented_defaults_are_parseable() {
    for c in [crate::schema::DEFAULT_HOVER_COLOR, "#333333"] {
        assert!(parse_color(c).is_ok(), "failed to parse default color: {c}");
    }
}

#[test]
fn css_rgba_output_parses_back_to_same_color() {
    for a in 0..=255u8 {
        let c = Color::from_rgba(12, 34, 56, a);
        assert_eq!(parse_color(&c.to_css_rgba()).unwrap(), c, "alpha {a}");
    }
    assert_eq!(parse_color(&Color::BLACK.to_css_rgba()).unwrap(), Color::BLACK);
}

#[test]
fn hex_output_parses_back_to_same_color() {
    for c in [Color::BLACK, Color::from_rgba(0, 212, 255, 128)] {
        assert_eq!(parse_color(&c.to_hex()).unwrap(), c);
    }
}

#[test]
fn normalize_color_rewrites_notation() {
    assert_eq!(normalize_color("#F00", ColorNotation::Hex).unwrap(), "#ff0000");
    assert_eq!(
        normalize_color("rgba(0,0,0,0.5)", ColorNotation::Hex).unwrap(),
        "#00000080"
    );
    assert_eq!(
        normalize_color("black", ColorNotation::Rgba).unwrap(),
        "rgba(0,0,0,1.000)"
    );
}

#[test]
fn normalize_color_rejects_invalid() {
    assert!(normalize_color("reddish", ColorNotation::Hex).is_err());
}
