//! Style values, rule layers and stylesheet parsing.
//!
//! This module holds everything between a stylesheet on disk and the layers
//! a [`Theme`](crate::Theme) resolves against:
//!
//! - [`Color`], [`Property`] and [`PropertyValue`]: typed property values.
//! - [`PropertySet`]: an ordered property-to-value map, the unit every
//!   layer stores and every resolution returns.
//! - [`RuleLayers`]: the four layers keyed by role, with the invariants
//!   checked by [`RuleLayers::validate`].
//! - [`parse_stylesheet`] (YAML) and [`parse_css`] (CSS).

mod color;
mod css_parser;
mod error;
mod parser;
mod property;
mod rules;

pub use color::Color;
pub use css_parser::parse_css;
pub use error::{StylesheetError, ThemeValidationError};
pub use parser::parse_stylesheet;
pub use property::{Property, PropertySet, PropertyValue};
pub use rules::{Layer, RuleLayers};

/// File extensions recognized as stylesheets.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["css", "yaml", "yml"];
