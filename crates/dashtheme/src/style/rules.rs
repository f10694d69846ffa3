//! Layered rule tables.
//!
//! Rules are authored as four layers of partial property sets, merged in a
//! fixed order at resolution time:
//!
//! | Layer | Applies when | Typical content |
//! |-------|--------------|-----------------|
//! | [`Layer::Base`] | always | fixed profit/loss/neutral colors |
//! | [`Layer::Component`] | always | radius, padding, light backgrounds |
//! | [`Layer::Mode`] | dark mode | surface backgrounds, shadows, borders |
//! | [`Layer::State`] | hover on interactive roles | lift transform and shadow |
//!
//! [`RuleLayers`] is what the stylesheet parsers produce and what a
//! [`Theme`](crate::Theme) wraps. Inserting into a layer that already holds
//! rules for a role merges property by property, so several stylesheet
//! rules for the same selector accumulate the way they would in CSS.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::error::ThemeValidationError;
use super::property::{PropertySet, PropertyValue};
use crate::role::SemanticRole;

/// One of the four rule layers, in merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Base,
    Component,
    Mode,
    State,
}

impl Layer {
    /// Every layer, in merge order.
    pub const ALL: [Layer; 4] = [Layer::Base, Layer::Component, Layer::Mode, Layer::State];

    /// The layer unqualified rules for `role` belong to.
    ///
    /// Theme-independent roles live in the base layer; everything else in
    /// the component layer.
    pub fn default_for(role: SemanticRole) -> Layer {
        if role.is_theme_independent() {
            Layer::Base
        } else {
            Layer::Component
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Component => "component",
            Layer::Mode => "mode",
            Layer::State => "state",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four rule layers of a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleLayers {
    base: HashMap<SemanticRole, PropertySet>,
    component: HashMap<SemanticRole, PropertySet>,
    /// Dark-mode overrides.
    mode: HashMap<SemanticRole, PropertySet>,
    /// Hover overrides.
    state: HashMap<SemanticRole, PropertySet>,
}

impl RuleLayers {
    /// Creates empty layers.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, layer: Layer) -> &HashMap<SemanticRole, PropertySet> {
        match layer {
            Layer::Base => &self.base,
            Layer::Component => &self.component,
            Layer::Mode => &self.mode,
            Layer::State => &self.state,
        }
    }

    fn table_mut(&mut self, layer: Layer) -> &mut HashMap<SemanticRole, PropertySet> {
        match layer {
            Layer::Base => &mut self.base,
            Layer::Component => &mut self.component,
            Layer::Mode => &mut self.mode,
            Layer::State => &mut self.state,
        }
    }

    /// Merges `properties` into the rule for `role` on `layer`.
    pub fn insert(&mut self, layer: Layer, role: SemanticRole, properties: PropertySet) {
        self.table_mut(layer)
            .entry(role)
            .or_default()
            .apply(&properties);
    }

    /// The rule for `role` on `layer`, if any.
    pub fn get(&self, layer: Layer, role: SemanticRole) -> Option<&PropertySet> {
        self.table(layer).get(&role)
    }

    /// All rules on one layer.
    pub fn layer(&self, layer: Layer) -> &HashMap<SemanticRole, PropertySet> {
        self.table(layer)
    }

    /// Merges `other` on top of these layers, rule by rule.
    pub fn merge(mut self, other: RuleLayers) -> Self {
        for layer in Layer::ALL {
            for (role, properties) in other.table(layer) {
                self.insert(layer, *role, properties.clone());
            }
        }
        self
    }

    /// Roles with at least one rule on any layer.
    pub fn roles(&self) -> BTreeSet<SemanticRole> {
        Layer::ALL
            .iter()
            .flat_map(|layer| self.table(*layer).keys().copied())
            .collect()
    }

    /// Number of rules across all layers.
    pub fn len(&self) -> usize {
        Layer::ALL.iter().map(|layer| self.table(*layer).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks the invariants resolution relies on.
    ///
    /// - Theme-independent roles have rules on the base layer only.
    /// - Dark-mode rules target surface roles and set only background,
    ///   box-shadow and border.
    /// - Hover rules target interactive roles and set only lift properties.
    /// - Color properties hold colors.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        for layer in [Layer::Component, Layer::Mode, Layer::State] {
            if let Some(role) = sorted(self.table(layer).keys())
                .into_iter()
                .find(|role| role.is_theme_independent())
            {
                return Err(ThemeValidationError::ThemeIndependentOverride { role, layer });
            }
        }

        for role in sorted(self.mode.keys()) {
            if !role.is_surface() {
                return Err(ThemeValidationError::NonSurfaceDarkOverride { role });
            }
            if let Some(property) = self.mode[&role]
                .properties()
                .find(|p| !p.is_mode_adaptive())
            {
                return Err(ThemeValidationError::DarkProperty { role, property });
            }
        }

        for role in sorted(self.state.keys()) {
            if !role.is_interactive() {
                return Err(ThemeValidationError::NonInteractiveHover { role });
            }
            if let Some(property) = self.state[&role].properties().find(|p| !p.is_lift()) {
                return Err(ThemeValidationError::HoverProperty { role, property });
            }
        }

        for layer in Layer::ALL {
            for role in sorted(self.table(layer).keys()) {
                for (property, value) in &self.table(layer)[&role] {
                    if property.is_color() && !matches!(value, PropertyValue::Color(_)) {
                        return Err(ThemeValidationError::NotAColor {
                            role,
                            property: *property,
                            value: value.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Sorts roles so validation reports the same error on every run.
fn sorted<'a>(roles: impl Iterator<Item = &'a SemanticRole>) -> Vec<SemanticRole> {
    let mut roles: Vec<SemanticRole> = roles.copied().collect();
    roles.sort();
    roles
}
