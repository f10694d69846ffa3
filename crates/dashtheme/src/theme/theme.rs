//! Theme struct wrapping the four rule layers.
//!
//! A theme is built once at startup and never mutated while resolution is
//! in use. Construction methods:
//!
//! - [`Theme::dashboard`]: the built-in financial dashboard theme.
//! - Builder API ([`add_base`](Theme::add_base), [`add_component`](Theme::add_component),
//!   [`add_dark`](Theme::add_dark), [`add_hover`](Theme::add_hover)).
//! - [`Theme::from_yaml`], [`Theme::from_css`], [`Theme::from_file`].
//!
//! Builder methods never fail; [`Theme::validate`] checks the layer
//! invariants, and every parsing constructor calls it before returning.
//!
//! # Layering user overrides
//!
//! ```rust
//! use dashtheme::Theme;
//!
//! let user = Theme::from_css(".metric-box { padding: 20px; }").unwrap();
//! let theme = Theme::dashboard().merge(user);
//! assert!(theme.validate().is_ok());
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::role::SemanticRole;
use crate::style::{
    parse_css, parse_stylesheet, Layer, PropertySet, RuleLayers, StylesheetError,
    ThemeValidationError, STYLESHEET_EXTENSIONS,
};

/// A named collection of layered style rules.
///
/// # Example
///
/// ```rust
/// use dashtheme::{Color, Property, PropertySet, SemanticRole, Theme};
///
/// let theme = Theme::named("minimal")
///     .add_base(
///         SemanticRole::Profit,
///         PropertySet::new().with(Property::Color, Color::hex(0x4CAF50)),
///     )
///     .add_component(
///         SemanticRole::CardSurface,
///         PropertySet::new().with(Property::BorderRadius, "8px"),
///     )
///     .add_dark(
///         SemanticRole::CardSurface,
///         PropertySet::new().with(Property::Background, Color::hex(0x2D2D2D)),
///     );
///
/// assert!(theme.validate().is_ok());
/// assert_eq!(theme.dark_override_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    layers: RuleLayers,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Creates a theme from pre-built rule layers.
    pub fn from_layers(layers: RuleLayers) -> Self {
        Self {
            name: None,
            source_path: None,
            layers,
        }
    }

    /// Creates a validated theme from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`StylesheetError`] if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        Self::checked(parse_stylesheet(yaml)?)
    }

    /// Creates a validated theme from CSS content.
    ///
    /// # Errors
    ///
    /// Returns a [`StylesheetError`] if parsing or validation fails.
    pub fn from_css(css: &str) -> Result<Self, StylesheetError> {
        Self::checked(parse_css(css)?)
    }

    fn checked(layers: RuleLayers) -> Result<Self, StylesheetError> {
        layers.validate()?;
        Ok(Self::from_layers(layers))
    }

    /// Loads a theme from a `.css`, `.yaml` or `.yml` file.
    ///
    /// The theme name is derived from the filename (without extension).
    /// The source path is stored for [`refresh`](Theme::refresh) support.
    ///
    /// # Errors
    ///
    /// Returns a [`StylesheetError`] if the file cannot be read, has an
    /// unsupported extension, or fails to parse or validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let layers = load_layers(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        debug!(
            path = %path.display(),
            rules = layers.len(),
            "loaded theme stylesheet"
        );

        Ok(Self {
            name,
            source_path: Some(path.to_path_buf()),
            layers,
        })
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if this theme was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reloads the theme from its source file.
    ///
    /// On failure the theme keeps its previous rules.
    ///
    /// # Errors
    ///
    /// Returns a [`StylesheetError`] if the theme has no source file or the
    /// file cannot be read, parsed or validated.
    pub fn refresh(&mut self) -> Result<(), StylesheetError> {
        let path = self
            .source_path
            .as_ref()
            .ok_or_else(|| StylesheetError::Load {
                message: "Cannot refresh: theme has no source file".to_string(),
            })?;

        self.layers = load_layers(path)?;
        Ok(())
    }

    /// Adds base-layer properties for a role.
    pub fn add_base(self, role: SemanticRole, properties: PropertySet) -> Self {
        self.add(Layer::Base, role, properties)
    }

    /// Adds component-layer properties for a role.
    pub fn add_component(self, role: SemanticRole, properties: PropertySet) -> Self {
        self.add(Layer::Component, role, properties)
    }

    /// Adds dark-mode overrides for a role.
    pub fn add_dark(self, role: SemanticRole, properties: PropertySet) -> Self {
        self.add(Layer::Mode, role, properties)
    }

    /// Adds hover overrides for a role.
    pub fn add_hover(self, role: SemanticRole, properties: PropertySet) -> Self {
        self.add(Layer::State, role, properties)
    }

    /// Adds properties for a role on any layer, merging with what is there.
    pub fn add(mut self, layer: Layer, role: SemanticRole, properties: PropertySet) -> Self {
        self.layers.insert(layer, role, properties);
        self
    }

    /// The rule layers.
    pub fn layers(&self) -> &RuleLayers {
        &self.layers
    }

    /// Checks that the layers uphold the resolution invariants.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        self.layers.validate()
    }

    /// Returns true if no rules are defined.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the number of rules across all layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns the number of dark-mode overrides.
    pub fn dark_override_count(&self) -> usize {
        self.layers.layer(Layer::Mode).len()
    }

    /// Returns the number of hover overrides.
    pub fn hover_override_count(&self) -> usize {
        self.layers.layer(Layer::State).len()
    }

    /// Merges another theme into this one.
    ///
    /// Rules from `other` take precedence property by property, so a user
    /// theme only needs to state what it changes. The name and source path
    /// of `self` are kept.
    pub fn merge(mut self, other: Theme) -> Self {
        self.layers = self.layers.merge(other.layers);
        self
    }
}

/// Reads and parses a stylesheet file, choosing the parser by extension.
fn load_layers(path: &Path) -> Result<RuleLayers, StylesheetError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !STYLESHEET_EXTENSIONS.contains(&extension.as_str()) {
        return Err(StylesheetError::Load {
            message: format!(
                "Unsupported stylesheet extension for {} (expected one of {:?})",
                path.display(),
                STYLESHEET_EXTENSIONS
            ),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let layers = if extension == "css" {
        parse_css(&content)
    } else {
        parse_stylesheet(&content)
    }
    .map_err(|e| e.with_path(path))?;

    layers.validate()?;
    Ok(layers)
}
