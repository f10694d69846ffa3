//! Terminal preview of resolved styles.
//!
//! CLI hosts render the same roles as the web dashboard. Colors are
//! approximated on the 256-color palette, which every modern terminal
//! supports; layout properties have no terminal counterpart and are
//! ignored.
//!
//! ```rust
//! use dashtheme::terminal::paint;
//! use dashtheme::{InteractionState, SemanticRole, ThemeMode, ThemeResolver};
//!
//! let resolver = ThemeResolver::dashboard();
//! let profit = resolver.resolve(SemanticRole::Profit, ThemeMode::Dark, InteractionState::Normal);
//! println!("{}", paint("+2.4%", &profit));
//! ```

use console::{Color as ConsoleColor, Style, StyledObject};

use crate::style::{Color, Property, PropertySet, PropertyValue};

/// Converts a [`PropertySet`] into a console style.
///
/// `color` maps to the foreground and `background` to the background;
/// transparent colors are skipped. A `font-weight` of `bold`, `bolder` or
/// 600 and above renders bold.
pub fn console_style(properties: &PropertySet) -> Style {
    let mut style = Style::new();

    if let Some(color) = opaque_color(properties, Property::Color) {
        style = style.fg(ConsoleColor::Color256(rgb_to_ansi256(color.rgb())));
    }
    if let Some(color) = opaque_color(properties, Property::Background) {
        style = style.bg(ConsoleColor::Color256(rgb_to_ansi256(color.rgb())));
    }
    if properties
        .get(Property::FontWeight)
        .is_some_and(is_bold_weight)
    {
        style = style.bold();
    }

    style
}

/// Applies the console style for `properties` to `text`.
pub fn paint<D>(text: D, properties: &PropertySet) -> StyledObject<D> {
    console_style(properties).apply_to(text)
}

fn opaque_color(properties: &PropertySet, property: Property) -> Option<Color> {
    properties
        .get(property)
        .and_then(PropertyValue::as_color)
        .filter(|color| !color.is_transparent())
}

fn is_bold_weight(value: &PropertyValue) -> bool {
    match value {
        PropertyValue::Keyword(weight) => match weight.as_str() {
            "bold" | "bolder" => true,
            numeric => numeric.parse::<u16>().is_ok_and(|w| w >= 600),
        },
        _ => false,
    }
}

/// Maps an RGB triplet to the nearest entry of the xterm 256-color palette.
///
/// Grays map onto the 24-step grayscale ramp; everything else onto the
/// 6x6x6 color cube.
///
/// ```rust
/// use dashtheme::terminal::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0x4C, 0xAF, 0x50)), 71);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r - 8) / 10).min(23),
        };
    }
    16 + 36 * cube_level(r) + 6 * cube_level(g) + cube_level(b)
}

/// Index of the nearest cube level (0, 95, 135, 175, 215, 255).
fn cube_level(value: u8) -> u8 {
    match value {
        0..=47 => 0,
        48..=114 => 1,
        _ => (value - 35) / 40,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        assert_eq!(rgb_to_ansi256((0x4C, 0xAF, 0x50)), 71);
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((128, 128, 128)), 244);
        assert_eq!(rgb_to_ansi256((248, 248, 248)), 255);
    }

    #[test]
    fn test_console_style_foreground() {
        let props = PropertySet::new().with(Property::Color, Color::hex(0x4CAF50));
        let styled = console_style(&props)
            .force_styling(true)
            .apply_to("up")
            .to_string();
        assert!(styled.contains("38;5;71"), "got {styled:?}");
        assert!(styled.contains("up"));
    }

    #[test]
    fn test_console_style_background_and_bold() {
        let props = PropertySet::new()
            .with(Property::Background, Color::hex(0x2D2D2D))
            .with(Property::FontWeight, "700");
        let styled = console_style(&props)
            .force_styling(true)
            .apply_to("card")
            .to_string();
        assert!(styled.contains("48;5;"), "got {styled:?}");
        assert!(styled.contains("\u{1b}[1m"), "got {styled:?}");
    }

    #[test]
    fn test_console_style_skips_transparent() {
        let transparent = Color::parse("transparent").unwrap();
        let props = PropertySet::new().with(Property::Background, transparent);
        let styled = console_style(&props)
            .force_styling(true)
            .apply_to("x")
            .to_string();
        assert_eq!(styled, "x");
    }

    #[test]
    fn test_layout_properties_are_ignored() {
        let props = PropertySet::new()
            .with(Property::Padding, "16px")
            .with(Property::FontWeight, "400");
        let styled = console_style(&props)
            .force_styling(true)
            .apply_to("plain")
            .to_string();
        assert_eq!(styled, "plain");
    }
}
