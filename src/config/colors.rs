//! Color configuration for the terminal console.

use crossterm::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Colors used when printing prompts and messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub banner: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub prompt: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub heading: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub success: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            banner: Color::Cyan,
            prompt: Color::Reset,
            heading: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a color string into a crossterm Color.
///
/// Supports:
/// - Named colors: "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "Grey",
///   "White", their "Dark" variants ("DarkRed", "DarkGrey", ...) and "Reset"
/// - Hex colors: "#RRGGBB" or "#RGB"
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "darkred" => Ok(Color::DarkRed),
        "green" => Ok(Color::Green),
        "darkgreen" => Ok(Color::DarkGreen),
        "yellow" => Ok(Color::Yellow),
        "darkyellow" => Ok(Color::DarkYellow),
        "blue" => Ok(Color::Blue),
        "darkblue" => Ok(Color::DarkBlue),
        "magenta" => Ok(Color::Magenta),
        "darkmagenta" => Ok(Color::DarkMagenta),
        "cyan" => Ok(Color::Cyan),
        "darkcyan" => Ok(Color::DarkCyan),
        "gray" | "grey" => Ok(Color::Grey),
        "darkgray" | "darkgrey" => Ok(Color::DarkGrey),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("Unknown color: {}", s)),
    }
}

/// Parse "#RRGGBB" and "#RGB" into an RGB color.
fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(format!("Invalid hex color: {}", s));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| format!("Invalid hex color: {}", s))
    };

    match hex.len() {
        6 => Ok(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        }),
        3 => Ok(Color::Rgb {
            r: channel(0..1)? * 17,
            g: channel(1..2)? * 17,
            b: channel(2..3)? * 17,
        }),
        _ => Err(format!("Invalid hex color format: {}", s)),
    }
}
