//! Semantic roles: the abstract visual intents a dashboard element can carry.
//!
//! A role says what an element *means* ("a profit figure", "a news card")
//! and never how it looks. Roles fall into three groups that drive
//! resolution:
//!
//! - **Theme-independent** (`profit`, `loss`, `neutral`): fixed colors that
//!   read the same in light and dark mode.
//! - **Interactive** (`button`, `newsCard`): lift and gain shadow on hover.
//! - Everything else: structural chrome that may adapt to dark mode.
//!
//! Roles parse from their camelCase name (`cardSurface`), from their CSS
//! class name (`card-surface`), and from the legacy dashboard class names
//! `trading-card`, `stock-header` and `sidebar`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ResolveError;

/// An abstract visual intent, independent of concrete colors and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticRole {
    /// A gain: positive price change, buy signal, positive sentiment.
    Profit,
    /// A drop: negative price change, sell signal, negative sentiment.
    Loss,
    /// Neither gain nor drop: hold signal, neutral sentiment.
    Neutral,
    /// Container chrome for indicator cards.
    CardSurface,
    /// The navigation sidebar.
    SidebarSurface,
    /// Page and section headings.
    HeaderText,
    /// Boxed single-figure metrics.
    MetricBox,
    /// Inline code spans.
    CodeInline,
    /// Scrollbar track.
    ScrollTrack,
    /// Scrollbar thumb.
    ScrollThumb,
    /// A news headline card.
    NewsCard,
    /// A clickable button.
    Button,
}

impl SemanticRole {
    /// Every role, in declaration order.
    pub const ALL: [SemanticRole; 12] = [
        SemanticRole::Profit,
        SemanticRole::Loss,
        SemanticRole::Neutral,
        SemanticRole::CardSurface,
        SemanticRole::SidebarSurface,
        SemanticRole::HeaderText,
        SemanticRole::MetricBox,
        SemanticRole::CodeInline,
        SemanticRole::ScrollTrack,
        SemanticRole::ScrollThumb,
        SemanticRole::NewsCard,
        SemanticRole::Button,
    ];

    /// The camelCase role name.
    pub fn name(self) -> &'static str {
        match self {
            SemanticRole::Profit => "profit",
            SemanticRole::Loss => "loss",
            SemanticRole::Neutral => "neutral",
            SemanticRole::CardSurface => "cardSurface",
            SemanticRole::SidebarSurface => "sidebarSurface",
            SemanticRole::HeaderText => "headerText",
            SemanticRole::MetricBox => "metricBox",
            SemanticRole::CodeInline => "codeInline",
            SemanticRole::ScrollTrack => "scrollTrack",
            SemanticRole::ScrollThumb => "scrollThumb",
            SemanticRole::NewsCard => "newsCard",
            SemanticRole::Button => "button",
        }
    }

    /// The kebab-case CSS class name used in stylesheets.
    pub fn class_name(self) -> &'static str {
        match self {
            SemanticRole::Profit => "profit",
            SemanticRole::Loss => "loss",
            SemanticRole::Neutral => "neutral",
            SemanticRole::CardSurface => "card-surface",
            SemanticRole::SidebarSurface => "sidebar-surface",
            SemanticRole::HeaderText => "header-text",
            SemanticRole::MetricBox => "metric-box",
            SemanticRole::CodeInline => "code-inline",
            SemanticRole::ScrollTrack => "scroll-track",
            SemanticRole::ScrollThumb => "scroll-thumb",
            SemanticRole::NewsCard => "news-card",
            SemanticRole::Button => "button",
        }
    }

    /// True for roles whose styling is fixed across theme modes.
    ///
    /// These roles resolve from the base layer alone.
    pub fn is_theme_independent(self) -> bool {
        matches!(
            self,
            SemanticRole::Profit | SemanticRole::Loss | SemanticRole::Neutral
        )
    }

    /// True for roles that react to hover.
    pub fn is_interactive(self) -> bool {
        matches!(self, SemanticRole::Button | SemanticRole::NewsCard)
    }

    /// True for the large container surfaces that carry dark-mode chrome.
    pub fn is_surface(self) -> bool {
        matches!(
            self,
            SemanticRole::CardSurface | SemanticRole::SidebarSurface
        )
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SemanticRole {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(role) = SemanticRole::ALL
            .into_iter()
            .find(|role| role.name() == trimmed || role.class_name() == trimmed)
        {
            return Ok(role);
        }

        match trimmed {
            "trading-card" => Ok(SemanticRole::CardSurface),
            "stock-header" => Ok(SemanticRole::HeaderText),
            "sidebar" => Ok(SemanticRole::SidebarSurface),
            _ => Err(ResolveError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_names() {
        for role in SemanticRole::ALL {
            assert_eq!(role.name().parse::<SemanticRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_class_names() {
        for role in SemanticRole::ALL {
            assert_eq!(role.class_name().parse::<SemanticRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_legacy_class_names() {
        assert_eq!(
            "trading-card".parse::<SemanticRole>().unwrap(),
            SemanticRole::CardSurface
        );
        assert_eq!(
            "stock-header".parse::<SemanticRole>().unwrap(),
            SemanticRole::HeaderText
        );
        assert_eq!(
            "sidebar".parse::<SemanticRole>().unwrap(),
            SemanticRole::SidebarSurface
        );
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "notARole".parse::<SemanticRole>().unwrap_err();
        assert_eq!(err, ResolveError::UnknownRole("notARole".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Profit".parse::<SemanticRole>().is_err());
        assert!("CARD-SURFACE".parse::<SemanticRole>().is_err());
    }

    #[test]
    fn test_role_groups_are_disjoint() {
        for role in SemanticRole::ALL {
            assert!(!(role.is_theme_independent() && role.is_interactive()));
            assert!(!(role.is_theme_independent() && role.is_surface()));
        }
    }

    #[test]
    fn test_trading_card_does_not_lift() {
        assert!(!SemanticRole::CardSurface.is_interactive());
        assert!(SemanticRole::NewsCard.is_interactive());
        assert!(SemanticRole::Button.is_interactive());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_string(&SemanticRole::SidebarSurface).unwrap();
        assert_eq!(json, "\"sidebarSurface\"");
    }
}
