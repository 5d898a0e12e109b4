use ratatui::style::Color;
use refdesk::utils::color::parse_color;

#[test]
fn test_parse_hex_colors() {
    assert_eq!(parse_color("#1677ff"), Some(Color::Rgb(22, 119, 255)));
    assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_color("  #001529 "), Some(Color::Rgb(0, 21, 41)));
}

#[test]
fn test_parse_named_colors() {
    let red = parse_color("red");
    let blue = parse_color("Blue");
    assert!(red.is_some());
    assert_ne!(red, blue, "Red and blue should be different colors");
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn test_reject_malformed_colors() {
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#gggggg"), None);
    assert_eq!(parse_color("#ééé"), None);
    assert_eq!(parse_color("chartreuse-ish"), None);
}
