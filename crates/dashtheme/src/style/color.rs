//! Color value parsing for `color` and `background` properties.
//!
//! Supports:
//!
//! - RGB hex: `"#4CAF50"` or `"#fff"` (3 or 6 digit, any case)
//! - Functional: `rgb(76, 175, 80)` and `rgba(0, 0, 0, 0.2)`
//! - A small set of CSS names: `white`, `black`, `gray`/`grey`, `red`,
//!   `green`, `blue`, `transparent`
//!
//! Opaque colors always print as uppercase `#RRGGBB`; translucent ones as
//! `rgba(r,g,b,a)` without spaces. Two colors that compare equal therefore
//! print identically.
//!
//! # Example
//!
//! ```rust
//! use dashtheme::style::Color;
//!
//! let green: Color = "#4caf50".parse().unwrap();
//! assert_eq!(green.to_string(), "#4CAF50");
//!
//! let shade: Color = "rgba(0, 0, 0, 0.2)".parse().unwrap();
//! assert_eq!(shade.to_string(), "rgba(0,0,0,0.2)");
//! ```

use std::fmt;
use std::str::FromStr;

/// A concrete color.
///
/// Alpha is kept in thousandths so colors stay `Eq` and hashable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Opaque RGB.
    Rgb(u8, u8, u8),
    /// RGB with alpha in thousandths (`0..=1000`).
    Rgba(u8, u8, u8, u16),
}

impl Color {
    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Color::Rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// The red, green and blue channels, ignoring alpha.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => (r, g, b),
        }
    }

    /// Alpha in thousandths; opaque colors report 1000.
    pub fn alpha_millis(&self) -> u16 {
        match *self {
            Color::Rgb(..) => 1000,
            Color::Rgba(_, _, _, a) => a,
        }
    }

    /// True when the color has zero alpha.
    pub fn is_transparent(&self) -> bool {
        self.alpha_millis() == 0
    }

    /// Parses a color from a string value.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(inner) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_components(inner, true);
        }
        if let Some(inner) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_components(inner, false);
        }

        Self::parse_named(&lower)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: #{}", hex));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("Invalid hex: {}", hex))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Color::Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses the comma-separated body of `rgb(...)` or `rgba(...)`.
    fn parse_components(inner: &str, with_alpha: bool) -> Result<Self, String> {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(format!(
                "expected {} color components, got {}",
                expected,
                parts.len()
            ));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| format!("Invalid color channel '{}' (expected 0-255)", part))?;
        }
        let [r, g, b] = channels;

        if !with_alpha {
            return Ok(Color::Rgb(r, g, b));
        }

        let alpha = parts[3]
            .parse::<f64>()
            .map_err(|_| format!("Invalid alpha '{}'", parts[3]))?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(format!("Alpha {} out of range (0-1)", alpha));
        }
        Ok(Color::Rgba(r, g, b, (alpha * 1000.0).round() as u16))
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let color = match name {
            "white" => Color::hex(0xFFFFFF),
            "black" => Color::hex(0x000000),
            "gray" | "grey" => Color::hex(0x808080),
            "red" => Color::hex(0xFF0000),
            "green" => Color::hex(0x008000),
            "blue" => Color::hex(0x0000FF),
            "transparent" => Color::Rgba(0, 0, 0, 0),
            _ => return Err(format!("Unknown color name: {}", name)),
        };
        Ok(color)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Rgba(r, g, b, a) => {
                write!(f, "rgba({},{},{},{})", r, g, b, f64::from(a) / 1000.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Color::parse("#4CAF50").unwrap(), Color::Rgb(76, 175, 80));
    }

    #[test]
    fn test_parse_hex_lowercase_normalizes() {
        let color = Color::parse("#2d2d2d").unwrap();
        assert_eq!(color.to_string(), "#2D2D2D");
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::Rgb(255, 255, 255));
        assert_eq!(Color::parse("#888").unwrap().to_string(), "#888888");
    }

    #[test]
    fn test_parse_hex_invalid_length() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#").is_err());
    }

    #[test]
    fn test_parse_hex_non_ascii_does_not_panic() {
        assert!(Color::parse("#ééé").is_err());
        assert!(Color::parse("#zzz").is_err());
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            Color::parse("rgb(76, 175, 80)").unwrap(),
            Color::hex(0x4CAF50)
        );
    }

    #[test]
    fn test_parse_rgba_function() {
        let color = Color::parse("rgba(0,0,0,0.2)").unwrap();
        assert_eq!(color, Color::Rgba(0, 0, 0, 200));
        assert_eq!(color.to_string(), "rgba(0,0,0,0.2)");
    }

    #[test]
    fn test_parse_rgba_full_alpha_prints_integer() {
        let color = Color::parse("RGBA(10, 20, 30, 1)").unwrap();
        assert_eq!(color.to_string(), "rgba(10,20,30,1)");
    }

    #[test]
    fn test_parse_rgba_rejects_bad_alpha() {
        assert!(Color::parse("rgba(0,0,0,1.5)").is_err());
        assert!(Color::parse("rgba(0,0,0,x)").is_err());
    }

    #[test]
    fn test_parse_rgb_rejects_wrong_arity() {
        assert!(Color::parse("rgb(1,2)").is_err());
        assert!(Color::parse("rgb(1,2,3,0.5)").is_err());
        assert!(Color::parse("rgba(1,2,3)").is_err());
    }

    #[test]
    fn test_parse_rgb_rejects_out_of_range_channel() {
        assert!(Color::parse("rgb(256, 0, 0)").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("white").unwrap(), Color::hex(0xFFFFFF));
        assert_eq!(Color::parse("Grey").unwrap(), Color::hex(0x808080));
        assert!(Color::parse("transparent").unwrap().is_transparent());
        assert!(Color::parse("chartreuse").is_err());
    }

    #[test]
    fn test_hex_constructor() {
        assert_eq!(Color::hex(0xFF5252), Color::Rgb(255, 82, 82));
        assert_eq!(Color::hex(0xFF5252).rgb(), (255, 82, 82));
        assert_eq!(Color::hex(0xFF5252).alpha_millis(), 1000);
    }
}
