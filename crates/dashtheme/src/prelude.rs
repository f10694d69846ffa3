//! Convenient imports for hosts.
//!
//! ```rust
//! use dashtheme::prelude::*;
//!
//! let resolver = ThemeResolver::dashboard();
//! let button = resolver.resolve(SemanticRole::Button, ThemeMode::Light, InteractionState::Hover);
//! assert!(button.contains(Property::Transform));
//! ```

pub use crate::resolver::{ResolveRequest, ThemeResolver};
pub use crate::role::SemanticRole;
pub use crate::style::{Color, Property, PropertySet, PropertyValue};
pub use crate::theme::{InteractionState, ModeSwitch, Theme, ThemeMode};
pub use crate::ResolveError;
