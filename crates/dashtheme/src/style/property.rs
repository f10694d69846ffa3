//! Visual properties and the property sets that carry them.
//!
//! A [`PropertySet`] is both a partial rule (one layer's contribution for a
//! role) and a resolved style (the merged result handed to the host). The
//! same merge rule applies everywhere:
//!
//! ```text
//! component:  background=#FFFFFF  border-radius=8px  box-shadow=A
//! dark:       background=#2D2D2D                     box-shadow=B
//! ---------------------------------------------------------------
//! resolved:   background=#2D2D2D  border-radius=8px  box-shadow=B
//! ```
//!
//! Properties set by the overriding layer replace; properties it leaves
//! out are preserved.
//!
//! Sets are keyed by [`Property`] in declaration order, so equal sets
//! iterate, serialize and print identically.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::color::Color;

/// A visual attribute a rule can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    /// Foreground (text) color.
    Color,
    /// Background color.
    Background,
    /// Border shorthand, e.g. `1px solid #E0E0E0`.
    Border,
    BorderRadius,
    Padding,
    Margin,
    BoxShadow,
    Transform,
    /// How long property changes animate.
    TransitionDuration,
    FontWeight,
    Width,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 11] = [
        Property::Color,
        Property::Background,
        Property::Border,
        Property::BorderRadius,
        Property::Padding,
        Property::Margin,
        Property::BoxShadow,
        Property::Transform,
        Property::TransitionDuration,
        Property::FontWeight,
        Property::Width,
    ];

    /// The CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Property::Color => "color",
            Property::Background => "background",
            Property::Border => "border",
            Property::BorderRadius => "border-radius",
            Property::Padding => "padding",
            Property::Margin => "margin",
            Property::BoxShadow => "box-shadow",
            Property::Transform => "transform",
            Property::TransitionDuration => "transition-duration",
            Property::FontWeight => "font-weight",
            Property::Width => "width",
        }
    }

    /// Looks a property up by CSS name or stylesheet shorthand.
    ///
    /// Accepts `fg`, `bg`, `background-color`, `radius`, `shadow` and
    /// `transition` besides the canonical names.
    pub fn from_css_name(name: &str) -> Option<Self> {
        let property = match name.trim() {
            "color" | "fg" => Property::Color,
            "background" | "background-color" | "bg" => Property::Background,
            "border" => Property::Border,
            "border-radius" | "radius" => Property::BorderRadius,
            "padding" => Property::Padding,
            "margin" => Property::Margin,
            "box-shadow" | "shadow" => Property::BoxShadow,
            "transform" => Property::Transform,
            "transition-duration" | "transition" => Property::TransitionDuration,
            "font-weight" => Property::FontWeight,
            "width" => Property::Width,
            _ => return None,
        };
        Some(property)
    }

    /// True for properties whose values are colors.
    pub fn is_color(self) -> bool {
        matches!(self, Property::Color | Property::Background)
    }

    /// True for the properties a hover lift may change.
    pub fn is_lift(self) -> bool {
        matches!(self, Property::Transform | Property::BoxShadow)
    }

    /// True for the properties a dark-mode rule may change.
    pub fn is_mode_adaptive(self) -> bool {
        matches!(
            self,
            Property::Background | Property::BoxShadow | Property::Border
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A concrete property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Color(Color),
    /// Millisecond-precision duration, printed in seconds (`0.3s`).
    Duration(Duration),
    /// Any other CSS value, kept verbatim (`8px`, `translateY(-2px)`).
    Keyword(String),
}

impl PropertyValue {
    /// Parses a raw value for the given property.
    ///
    /// Color properties must hold a color and `transition-duration` a
    /// duration; everything else is accepted verbatim if non-empty and free
    /// of rule punctuation.
    pub fn parse(property: Property, raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        if property.is_color() {
            return Color::parse(raw).map(PropertyValue::Color);
        }
        if property == Property::TransitionDuration {
            return parse_duration(raw).map(PropertyValue::Duration);
        }
        if raw.is_empty() {
            return Err("empty value".to_string());
        }
        if raw.contains([';', '{', '}']) {
            return Err(format!("unexpected punctuation in '{}'", raw));
        }
        Ok(PropertyValue::Keyword(raw.to_string()))
    }

    /// The color, if this is a color value.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropertyValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// The duration, if this is a duration value.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            PropertyValue::Duration(duration) => Some(*duration),
            _ => None,
        }
    }
}

/// Parses `0.3s` or `300ms` into a millisecond-precision duration.
fn parse_duration(raw: &str) -> Result<Duration, String> {
    let (number, scale) = if let Some(ms) = raw.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(secs) = raw.strip_suffix('s') {
        (secs, 1000.0)
    } else {
        return Err(format!("duration '{}' needs an 's' or 'ms' unit", raw));
    };

    let value = number
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid duration '{}'", raw))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("duration '{}' must be finite and non-negative", raw));
    }
    Ok(Duration::from_millis((value * scale).round() as u64))
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Color(color) => write!(f, "{}", color),
            PropertyValue::Duration(duration) => {
                let millis = duration.as_millis();
                if millis % 1000 == 0 {
                    write!(f, "{}s", millis / 1000)
                } else {
                    write!(f, "{}s", millis as f64 / 1000.0)
                }
            }
            PropertyValue::Keyword(text) => f.write_str(text),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Color> for PropertyValue {
    fn from(color: Color) -> Self {
        PropertyValue::Color(color)
    }
}

impl From<Duration> for PropertyValue {
    fn from(duration: Duration) -> Self {
        PropertyValue::Duration(duration)
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Keyword(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Keyword(text)
    }
}

/// An ordered mapping from property to concrete value.
///
/// # Example
///
/// ```rust
/// use dashtheme::style::{Color, Property, PropertySet};
///
/// let card = PropertySet::new()
///     .with(Property::Background, Color::hex(0xFFFFFF))
///     .with(Property::BorderRadius, "8px");
/// let dark = PropertySet::new().with(Property::Background, Color::hex(0x2D2D2D));
///
/// let merged = card.merge(&dark);
/// assert_eq!(merged.css_value(Property::Background).as_deref(), Some("#2D2D2D"));
/// assert_eq!(merged.css_value(Property::BorderRadius).as_deref(), Some("8px"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PropertySet {
    values: BTreeMap<Property, PropertyValue>,
}

impl PropertySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning `self` for chaining.
    pub fn with<V: Into<PropertyValue>>(mut self, property: Property, value: V) -> Self {
        self.set(property, value);
        self
    }

    /// Sets a property, replacing any previous value.
    pub fn set<V: Into<PropertyValue>>(&mut self, property: Property, value: V) {
        self.values.insert(property, value.into());
    }

    pub fn get(&self, property: Property) -> Option<&PropertyValue> {
        self.values.get(&property)
    }

    /// The value of a property rendered as CSS text.
    pub fn css_value(&self, property: Property) -> Option<String> {
        self.get(property).map(ToString::to_string)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.values.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates properties in declaration order.
    pub fn iter(&self) -> btree_map::Iter<'_, Property, PropertyValue> {
        self.values.iter()
    }

    /// The properties this set defines, in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.values.keys().copied()
    }

    /// Applies `other` on top of this set in place.
    pub fn apply(&mut self, other: &PropertySet) {
        for (property, value) in &other.values {
            self.values.insert(*property, value.clone());
        }
    }

    /// Merges another set onto this one.
    ///
    /// Values in `other` override values in `self`; properties `other`
    /// leaves out are preserved.
    pub fn merge(&self, other: &PropertySet) -> PropertySet {
        let mut merged = self.clone();
        merged.apply(other);
        merged
    }

    /// The properties of `self` that are absent from or differ in `other`.
    pub fn changed_from(&self, other: &PropertySet) -> PropertySet {
        let values = self
            .values
            .iter()
            .filter(|(property, value)| other.get(**property) != Some(*value))
            .map(|(property, value)| (*property, value.clone()))
            .collect();
        PropertySet { values }
    }

    /// Renders the set as CSS declarations: `color: #4CAF50; padding: 16px;`.
    pub fn to_css_declarations(&self) -> String {
        self.values
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = (&'a Property, &'a PropertyValue);
    type IntoIter = btree_map::Iter<'a, Property, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<(Property, PropertyValue)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (Property, PropertyValue)>>(iter: I) -> Self {
        PropertySet {
            values: iter.into_iter().collect(),
        }
    }
}

impl Serialize for PropertySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (property, value) in &self.values {
            map.serialize_entry(property.css_name(), value)?;
        }
        map.end()
    }
}
