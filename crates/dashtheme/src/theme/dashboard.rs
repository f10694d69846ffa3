//! The built-in financial dashboard theme.

use std::time::Duration;

use super::theme::Theme;
use crate::role::SemanticRole;
use crate::style::{Color, Property, PropertySet};

const PROFIT_GREEN: Color = Color::hex(0x4CAF50);
const LOSS_RED: Color = Color::hex(0xFF5252);
const NEUTRAL_BLUE: Color = Color::hex(0x1E88E5);

const SOFT_SHADOW: &str = "0 2px 4px rgba(0,0,0,0.1)";
const DARK_SHADOW: &str = "0 2px 4px rgba(0,0,0,0.2)";
const LIFT_SHADOW: &str = "0 4px 8px rgba(0,0,0,0.2)";
const LIFT_TRANSFORM: &str = "translateY(-2px)";
const TRANSITION: Duration = Duration::from_millis(300);

impl Theme {
    /// The stock dashboard theme.
    ///
    /// Signal colors are fixed across modes. Only `cardSurface` and
    /// `sidebarSurface` adapt to dark mode; every other role keeps its
    /// light-mode styling. `newsCard` and `button` lift on hover, while
    /// `cardSurface` stays put.
    ///
    /// ```rust
    /// use dashtheme::{SemanticRole, Theme};
    ///
    /// let theme = Theme::dashboard();
    /// assert_eq!(theme.name(), Some("dashboard"));
    /// assert_eq!(theme.dark_override_count(), 2);
    /// assert!(theme.validate().is_ok());
    /// ```
    pub fn dashboard() -> Self {
        Theme::named("dashboard")
            .add_base(SemanticRole::Profit, text(PROFIT_GREEN))
            .add_base(SemanticRole::Loss, text(LOSS_RED))
            .add_base(SemanticRole::Neutral, text(NEUTRAL_BLUE))
            .add_component(
                SemanticRole::CardSurface,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0xFFFFFF))
                    .with(Property::BorderRadius, "8px")
                    .with(Property::Padding, "16px")
                    .with(Property::Margin, "10px 0")
                    .with(Property::BoxShadow, SOFT_SHADOW),
            )
            .add_component(
                SemanticRole::SidebarSurface,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0xF8F9FA))
                    .with(Property::Padding, "16px")
                    .with(Property::Border, "1px solid #E0E0E0"),
            )
            .add_component(
                SemanticRole::HeaderText,
                PropertySet::new()
                    .with(Property::Color, NEUTRAL_BLUE)
                    .with(Property::FontWeight, "700"),
            )
            .add_component(
                SemanticRole::MetricBox,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0xF8F9FA))
                    .with(Property::BorderRadius, "4px")
                    .with(Property::Padding, "12px")
                    .with(Property::Margin, "8px 0"),
            )
            .add_component(
                SemanticRole::CodeInline,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0xF0F2F6))
                    .with(Property::BorderRadius, "4px")
                    .with(Property::Padding, "2px 4px"),
            )
            .add_component(
                SemanticRole::ScrollTrack,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0xF1F1F1))
                    .with(Property::Width, "8px")
                    .with(Property::BorderRadius, "4px"),
            )
            .add_component(
                SemanticRole::ScrollThumb,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0x888888))
                    .with(Property::BorderRadius, "4px"),
            )
            .add_component(
                SemanticRole::NewsCard,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0xFFFFFF))
                    .with(Property::BorderRadius, "8px")
                    .with(Property::Padding, "16px")
                    .with(Property::Margin, "0 0 16px 0")
                    .with(Property::BoxShadow, SOFT_SHADOW)
                    .with(Property::TransitionDuration, TRANSITION),
            )
            .add_component(
                SemanticRole::Button,
                PropertySet::new()
                    .with(Property::BorderRadius, "4px")
                    .with(Property::Padding, "8px 16px")
                    .with(Property::TransitionDuration, TRANSITION),
            )
            .add_dark(
                SemanticRole::CardSurface,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0x2D2D2D))
                    .with(Property::BoxShadow, DARK_SHADOW),
            )
            .add_dark(
                SemanticRole::SidebarSurface,
                PropertySet::new()
                    .with(Property::Background, Color::hex(0x1E1E1E))
                    .with(Property::Border, "1px solid #333333"),
            )
            .add_hover(SemanticRole::NewsCard, lift())
            .add_hover(SemanticRole::Button, lift())
    }
}

fn text(color: Color) -> PropertySet {
    PropertySet::new().with(Property::Color, color)
}

fn lift() -> PropertySet {
    PropertySet::new()
        .with(Property::Transform, LIFT_TRANSFORM)
        .with(Property::BoxShadow, LIFT_SHADOW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Layer;

    #[test]
    fn test_dashboard_is_valid() {
        assert_eq!(Theme::dashboard().validate(), Ok(()));
    }

    #[test]
    fn test_every_role_has_rules() {
        let theme = Theme::dashboard();
        let roles = theme.layers().roles();
        for role in SemanticRole::ALL {
            assert!(roles.contains(&role), "{role} has no rules");
        }
    }

    #[test]
    fn test_signal_colors_live_on_base_layer() {
        let theme = Theme::dashboard();
        let layers = theme.layers();
        assert_eq!(
            layers
                .get(Layer::Base, SemanticRole::Profit)
                .and_then(|set| set.css_value(Property::Color)),
            Some("#4CAF50".to_string())
        );
        assert_eq!(
            layers
                .get(Layer::Base, SemanticRole::Loss)
                .and_then(|set| set.css_value(Property::Color)),
            Some("#FF5252".to_string())
        );
        assert_eq!(layers.layer(Layer::Base).len(), 3);
    }

    #[test]
    fn test_only_surfaces_adapt_to_dark() {
        let theme = Theme::dashboard();
        let mut dark: Vec<_> = theme.layers().layer(Layer::Mode).keys().copied().collect();
        dark.sort();
        assert_eq!(
            dark,
            vec![SemanticRole::CardSurface, SemanticRole::SidebarSurface]
        );
    }

    #[test]
    fn test_hover_lift_excludes_card_surface() {
        let theme = Theme::dashboard();
        let state = theme.layers().layer(Layer::State);
        assert!(state.contains_key(&SemanticRole::NewsCard));
        assert!(state.contains_key(&SemanticRole::Button));
        assert!(!state.contains_key(&SemanticRole::CardSurface));
    }
}
