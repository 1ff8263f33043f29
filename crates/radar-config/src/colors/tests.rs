use super::*;

#[test]
fn parses_six_digit_hex() {
    let c = parse_color("#4dcccc").unwrap();
    assert_eq!(c, Color::from_rgba(0x4d, 0xcc, 0xcc, 255));
}

#[test]
fn parses_short_hex() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parses_rgba_float_alpha() {
    let c = parse_color("rgba(0, 212, 255, 0.5)").unwrap();
    assert_eq!(c.g, 212);
    assert_eq!(c.a, 128);
}

#[test]
fn parses_rgba_integer_alpha() {
    let c = parse_color("rgba(10,20,30,200)").unwrap();
    assert_eq!(c.a, 200);
}

#[test]
fn rejects_channel_over_255() {
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
}

#[test]
fn rejects_unknown_format() {
    let err = parse_color("teal").unwrap_err();
    assert!(err.to_string().contains("unrecognized color format"));
}

#[test]
fn color_or_uses_fallback_for_garbage() {
    let fallback = [0.1, 0.2, 0.3, 1.0];
    assert_eq!(color_or("#zzzzzz", fallback), fallback);
}

#[test]
fn validate_color_accepts_and_rejects() {
    assert!(validate_color("#0d1424"));
    assert!(validate_color("#ff4d4d80"));
    assert!(validate_color("rgba(1,2,3,0.4)"));
    assert!(!validate_color(""));
    assert!(!validate_color("#12"));
    assert!(!validate_color("blue"));
}
