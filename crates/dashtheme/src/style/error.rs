//! Style-related error types.
//!
//! This module contains errors for both rule-layer validation and
//! stylesheet parsing.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::property::Property;
use super::rules::Layer;
use crate::role::SemanticRole;

/// Error returned when rule layers break a resolution invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    /// A theme-independent role has rules outside the base layer.
    #[error("role '{role}' is theme-independent and cannot carry {layer}-layer rules")]
    ThemeIndependentOverride { role: SemanticRole, layer: Layer },

    /// A hover rule targets a role that does not react to hover.
    #[error("role '{role}' is not interactive and cannot carry hover rules")]
    NonInteractiveHover { role: SemanticRole },

    /// A hover rule sets something other than transform or box-shadow.
    #[error("hover rule for '{role}' sets '{property}'; hover may only set transform and box-shadow")]
    HoverProperty {
        role: SemanticRole,
        property: Property,
    },

    /// A dark-mode rule targets a role that is not a surface.
    #[error("role '{role}' is not a surface and cannot carry dark-mode rules")]
    NonSurfaceDarkOverride { role: SemanticRole },

    /// A dark-mode rule sets something other than background, box-shadow or border.
    #[error("dark-mode rule for '{role}' sets '{property}'; dark mode may only set background, box-shadow and border")]
    DarkProperty {
        role: SemanticRole,
        property: Property,
    },

    /// A color property holds a non-color value.
    #[error("'{property}' of role '{role}' must be a color, got '{value}'")]
    NotAColor {
        role: SemanticRole,
        property: Property,
        value: String,
    },
}

/// Error type for stylesheet parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// YAML or CSS syntax error.
    #[error("Failed to parse stylesheet{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// A rule names a role that does not exist.
    #[error("Unknown role '{name}'{}", location(.path))]
    UnknownRole {
        name: String,
        path: Option<PathBuf>,
    },

    /// A YAML rule sets a property that does not exist.
    #[error("Unknown property '{property}' in role '{role}'{}", location(.path))]
    UnknownProperty {
        role: SemanticRole,
        property: String,
        path: Option<PathBuf>,
    },

    /// A property value could not be parsed.
    #[error("Invalid value '{value}' for '{property}' in role '{role}'{}: {message}", location(.path))]
    InvalidValue {
        role: SemanticRole,
        property: Property,
        value: String,
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid rule structure.
    #[error("Invalid definition for '{rule}'{}: {message}", location(.path))]
    InvalidDefinition {
        /// Role or selector where the error occurred.
        rule: String,
        /// Description of what was wrong.
        message: String,
        path: Option<PathBuf>,
    },

    /// The parsed rules break a resolution invariant.
    #[error("Invalid theme: {source}")]
    Validation {
        #[from]
        source: ThemeValidationError,
    },

    /// File loading error.
    #[error("Failed to load stylesheet: {message}")]
    Load { message: String },
}

impl StylesheetError {
    /// Attaches a source file path to errors that carry one.
    pub fn with_path(mut self, source: &Path) -> Self {
        match &mut self {
            StylesheetError::Parse { path, .. }
            | StylesheetError::UnknownRole { path, .. }
            | StylesheetError::UnknownProperty { path, .. }
            | StylesheetError::InvalidValue { path, .. }
            | StylesheetError::InvalidDefinition { path, .. } => {
                *path = Some(source.to_path_buf());
            }
            StylesheetError::Validation { .. } | StylesheetError::Load { .. } => {}
        }
        self
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_independent_override_display() {
        let err = ThemeValidationError::ThemeIndependentOverride {
            role: SemanticRole::Profit,
            layer: Layer::Mode,
        };
        let msg = err.to_string();
        assert!(msg.contains("profit"));
        assert!(msg.contains("mode-layer"));
    }

    #[test]
    fn test_hover_property_display() {
        let err = ThemeValidationError::HoverProperty {
            role: SemanticRole::Button,
            property: Property::Color,
        };
        assert!(err.to_string().contains("'color'"));
    }

    #[test]
    fn test_dark_property_display() {
        let err = ThemeValidationError::DarkProperty {
            role: SemanticRole::CardSurface,
            property: Property::BorderRadius,
        };
        assert!(err.to_string().contains("'border-radius'"));
    }

    #[test]
    fn test_parse_error_without_path() {
        let err = StylesheetError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse stylesheet: bad indent");
    }

    #[test]
    fn test_with_path_adds_location() {
        let err = StylesheetError::UnknownRole {
            name: "ticker".to_string(),
            path: None,
        }
        .with_path(Path::new("themes/dark.css"));
        assert_eq!(err.to_string(), "Unknown role 'ticker' in themes/dark.css");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: StylesheetError = ThemeValidationError::NonInteractiveHover {
            role: SemanticRole::CardSurface,
        }
        .into();
        assert!(matches!(err, StylesheetError::Validation { .. }));
        assert!(err.to_string().contains("cardSurface"));
    }
}
