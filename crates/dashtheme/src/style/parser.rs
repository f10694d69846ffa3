//! YAML stylesheet parser.
//!
//! Top-level keys are role names; each value is a mapping of property to
//! value, with optional `dark:` and `hover:` sub-mappings feeding the mode
//! and state layers:
//!
//! ```yaml
//! profit:
//!   color: "#4CAF50"
//!
//! newsCard:
//!   background: "#FFFFFF"
//!   border-radius: 8px
//!   transition-duration: 0.3s
//!   hover:
//!     transform: translateY(-2px)
//!     box-shadow: 0 4px 8px rgba(0,0,0,0.2)
//!
//! card-surface:
//!   background: "#FFFFFF"
//!   dark:
//!     background: "#2D2D2D"
//! ```
//!
//! Unqualified properties land on the base layer for theme-independent
//! roles and on the component layer for everything else. Unlike the CSS
//! parser, which skips bad declarations the way browsers do, the YAML
//! parser rejects unknown properties and malformed values outright.

use super::error::StylesheetError;
use super::property::{Property, PropertySet, PropertyValue};
use super::rules::{Layer, RuleLayers};
use crate::role::SemanticRole;

const DARK_KEY: &str = "dark";
const HOVER_KEY: &str = "hover";

/// Parses a YAML stylesheet into rule layers.
///
/// # Errors
///
/// Returns `StylesheetError` if:
/// - YAML parsing fails or the root is not a mapping
/// - A key names an unknown role or property
/// - A value cannot be parsed for its property
///
/// # Example
///
/// ```rust
/// use dashtheme::style::{parse_stylesheet, Layer};
/// use dashtheme::SemanticRole;
///
/// let layers = parse_stylesheet(r##"
/// cardSurface:
///   border-radius: 8px
///   dark:
///     background: "#2D2D2D"
/// "##).unwrap();
///
/// assert!(layers.get(Layer::Mode, SemanticRole::CardSurface).is_some());
/// ```
pub fn parse_stylesheet(yaml: &str) -> Result<RuleLayers, StylesheetError> {
    let root: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            path: None,
            message: e.to_string(),
        })?;

    let mut layers = RuleLayers::new();

    // An empty document is an empty stylesheet.
    if root.is_null() {
        return Ok(layers);
    }

    let mapping = root.as_mapping().ok_or_else(|| StylesheetError::Parse {
        path: None,
        message: "Stylesheet must be a YAML mapping".to_string(),
    })?;

    for (key, value) in mapping {
        let name = key.as_str().ok_or_else(|| StylesheetError::Parse {
            path: None,
            message: format!("Role name must be a string, got {:?}", key),
        })?;
        let role = name
            .parse::<SemanticRole>()
            .map_err(|_| StylesheetError::UnknownRole {
                name: name.to_string(),
                path: None,
            })?;

        let rule = value
            .as_mapping()
            .ok_or_else(|| StylesheetError::InvalidDefinition {
                rule: name.to_string(),
                message: format!("Expected a mapping of properties, got {:?}", value),
                path: None,
            })?;

        let unqualified = parse_properties(rule, role, true)?;
        if !unqualified.is_empty() {
            layers.insert(Layer::default_for(role), role, unqualified);
        }

        for (section, layer) in [(DARK_KEY, Layer::Mode), (HOVER_KEY, Layer::State)] {
            if let Some(section_value) = rule.get(serde_yaml::Value::String(section.into())) {
                let section_map =
                    section_value
                        .as_mapping()
                        .ok_or_else(|| StylesheetError::InvalidDefinition {
                            rule: name.to_string(),
                            message: format!("'{}' must be a mapping", section),
                            path: None,
                        })?;
                let properties = parse_properties(section_map, role, false)?;
                if !properties.is_empty() {
                    layers.insert(layer, role, properties);
                }
            }
        }
    }

    Ok(layers)
}

/// Parses a property mapping, skipping `dark`/`hover` sections when
/// `top_level` is set.
fn parse_properties(
    map: &serde_yaml::Mapping,
    role: SemanticRole,
    top_level: bool,
) -> Result<PropertySet, StylesheetError> {
    let mut properties = PropertySet::new();

    for (key, value) in map {
        let key_str = key
            .as_str()
            .ok_or_else(|| StylesheetError::InvalidDefinition {
                rule: role.to_string(),
                message: format!("Non-string key in rule: {:?}", key),
                path: None,
            })?;

        if top_level && (key_str == DARK_KEY || key_str == HOVER_KEY) {
            continue;
        }

        let property =
            Property::from_css_name(key_str).ok_or_else(|| StylesheetError::UnknownProperty {
                role,
                property: key_str.to_string(),
                path: None,
            })?;

        let raw = scalar_text(value).ok_or_else(|| StylesheetError::InvalidValue {
            role,
            property,
            value: format!("{:?}", value),
            message: "expected a string or number".to_string(),
            path: None,
        })?;

        let parsed =
            PropertyValue::parse(property, &raw).map_err(|message| StylesheetError::InvalidValue {
                role,
                property,
                value: raw.clone(),
                message,
                path: None,
            })?;
        properties.set(property, parsed);
    }

    Ok(properties)
}

/// Text of a scalar YAML value; numbers keep their YAML spelling.
fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
