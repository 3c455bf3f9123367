//! Inline style directives and the per-kind style table.
//!
//! Styling follows the console convention of `%c` tokens in the first text
//! argument, each consuming one trailing style-declaration argument. Style
//! declarations are CSS-like strings; the terminal sink translates a small
//! subset (color, background, font-style, font-weight) to ANSI styling and
//! ignores the rest.

use serde::{Deserialize, Serialize};

use crate::kind::LogKind;

/// The inline style-directive token.
pub const STYLE_TOKEN: &str = "%c";

/// Style-reset declaration appended when the banner replaces a non-text value.
pub const ITALIC_RESET: &str = "font-style: italic;";

/// A channel's visual banner: leading text plus its style declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefix {
    /// Banner text, typically including its own `%c` token.
    pub text: String,
    /// CSS-like style declaration for the banner.
    pub style: String,
}

impl Prefix {
    /// Create a prefix from banner text and a style declaration.
    #[must_use]
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }
}

/// Remove every style-directive token from the text.
#[must_use]
pub fn strip_style_tokens(text: &str) -> String {
    text.replace(STYLE_TOKEN, "")
}

/// Per-name style declarations appended to a prefix style.
///
/// `ok` has no corresponding kind but is part of the table by name.
#[must_use]
pub fn style_for_name(name: &str) -> &'static str {
    match name {
        "error" => "color: #d8000c; border: 1px solid #d8000c; background: #ffbaba;",
        "info" => "color: #00529b; border: 1px solid #00529b; background: #bde5f8;",
        "ok" => "color: #4f8a10; border: 1px solid #4f8a10; background: #dff2bf;",
        "warn" => "color: #d1b900; border: 1px solid #f7deae; background: #fff8c4;",
        _ => "",
    }
}

/// The table entry for a kind (empty for kinds without one).
#[must_use]
pub fn kind_style(kind: LogKind) -> &'static str {
    style_for_name(kind.as_str())
}

/// Translate a CSS-like declaration string to a terminal [`console::Style`].
///
/// Recognized: `color`, `background` (named colors or `#rrggbb`),
/// `font-style: italic`, `font-weight: bold`, `text-decoration: underline`.
/// Unknown properties are ignored.
#[must_use]
pub fn terminal_style(declarations: &str) -> console::Style {
    let mut style = console::Style::new();

    for declaration in declarations.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();

        match property.as_str() {
            "color" => {
                if let Some(color) = parse_color(&value) {
                    style = style.fg(color);
                }
            }
            "background" | "background-color" => {
                // Declarations like "1px solid red" never reach here; the
                // background shorthand is a bare color in the style table.
                if let Some(color) = parse_color(&value) {
                    style = style.bg(color);
                }
            }
            "font-style" if value == "italic" => style = style.italic(),
            "font-weight" if value == "bold" => style = style.bold(),
            "text-decoration" if value == "underline" => style = style.underlined(),
            _ => {}
        }
    }

    style
}

fn parse_color(value: &str) -> Option<console::Color> {
    use console::Color;

    match value {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "white" => return Some(Color::White),
        _ => {}
    }

    let hex = value.strip_prefix('#')?;
    // Byte length alone is not enough: slicing a multi-byte declaration
    // below must stay on char boundaries.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Color256(cube_216(red, green, blue)))
}

/// Map an RGB triplet onto the 6x6x6 xterm color cube.
fn cube_216(red: u8, green: u8, blue: u8) -> u8 {
    let scale = |component: u8| -> u8 {
        let scaled = (u16::from(component) * 5 + 127) / 255;
        scaled as u8
    };
    16 + 36 * scale(red) + 6 * scale(green) + scale(blue)
}
