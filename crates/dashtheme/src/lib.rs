//! # Dashtheme - Semantic Theme Resolution for Financial Dashboards
//!
//! `dashtheme` decides how every element of a market dashboard looks. Elements
//! carry a [`SemanticRole`] ("a profit figure", "a news card") rather than
//! colors; a [`ThemeResolver`] turns a role plus the active [`ThemeMode`] and
//! the element's [`InteractionState`] into a concrete [`PropertySet`].
//!
//! ## Core Concepts
//!
//! - [`SemanticRole`]: the abstract visual intent of an element
//! - [`Theme`]: four rule layers (base, component, mode, state)
//! - [`ThemeResolver`]: merges the layers for one request
//! - [`ModeSwitch`]: the process-wide light/dark mode
//! - [`market`]: maps signals, sentiment and price bars onto roles
//!
//! ## Quick Start
//!
//! ```rust
//! use dashtheme::{InteractionState, Property, SemanticRole, ThemeMode, ThemeResolver};
//!
//! let resolver = ThemeResolver::dashboard();
//!
//! // Signal colors never change with the mode.
//! let light = resolver.resolve(SemanticRole::Profit, ThemeMode::Light, InteractionState::Normal);
//! let dark = resolver.resolve(SemanticRole::Profit, ThemeMode::Dark, InteractionState::Normal);
//! assert_eq!(light, dark);
//! assert_eq!(dark.css_value(Property::Color).as_deref(), Some("#4CAF50"));
//!
//! // Surfaces adapt.
//! let card = resolver.resolve(SemanticRole::CardSurface, ThemeMode::Dark, InteractionState::Normal);
//! assert_eq!(card.css_value(Property::Background).as_deref(), Some("#2D2D2D"));
//! ```
//!
//! ## Custom Themes
//!
//! Stylesheets are written in CSS or YAML and layered over the built-in
//! theme:
//!
//! ```rust
//! use dashtheme::{Theme, ThemeResolver};
//!
//! let css = r#"
//! .metric-box { padding: 20px; }
//! @media (prefers-color-scheme: dark) {
//!     .sidebar { background: #252525; }
//! }
//! "#;
//!
//! let theme = Theme::dashboard().merge(Theme::from_css(css).unwrap());
//! let resolver = ThemeResolver::new(theme).unwrap();
//! assert!(resolver.to_css(dashtheme::ThemeMode::Dark).contains("#252525"));
//! ```
//!
//! Hosts that receive names instead of typed values go through
//! [`ThemeResolver::resolve_str`], the only place resolution can fail.

mod error;
pub mod market;
pub mod prelude;
mod resolver;
mod role;
pub mod style;
pub mod terminal;
pub mod theme;

pub use error::ResolveError;
pub use resolver::{ResolveRequest, ThemeResolver};
pub use role::SemanticRole;

pub use style::{
    parse_css, parse_stylesheet, Color, Layer, Property, PropertySet, PropertyValue, RuleLayers,
    StylesheetError, ThemeValidationError, STYLESHEET_EXTENSIONS,
};

pub use theme::{
    detect_theme_mode, set_mode_detector, InteractionState, ModeSwitch, Theme, ThemeMode,
};
