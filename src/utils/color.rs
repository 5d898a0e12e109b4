use ratatui::style::Color;

/// Convert a theme color value to a terminal color.
///
/// Accepts `#rrggbb`, `#rgb` and a small set of palette names.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    match value.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "red" => Some(Color::Rgb(245, 34, 45)),
        "volcano" => Some(Color::Rgb(250, 84, 28)),
        "orange" => Some(Color::Rgb(250, 140, 22)),
        "gold" => Some(Color::Rgb(250, 173, 20)),
        "yellow" => Some(Color::Rgb(250, 219, 20)),
        "lime" => Some(Color::Rgb(160, 217, 17)),
        "green" => Some(Color::Rgb(82, 196, 26)),
        "cyan" => Some(Color::Rgb(19, 194, 194)),
        "blue" => Some(Color::Rgb(22, 119, 255)),
        "geekblue" => Some(Color::Rgb(47, 84, 235)),
        "purple" => Some(Color::Rgb(114, 46, 209)),
        "magenta" => Some(Color::Rgb(235, 47, 150)),
        "grey" | "gray" => Some(Color::Rgb(140, 140, 140)),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "reset" | "default" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let expand = |c: &str| channel(&c.repeat(2));
            Some(Color::Rgb(expand(&hex[0..1])?, expand(&hex[1..2])?, expand(&hex[2..3])?))
        }
        _ => None,
    }
}
