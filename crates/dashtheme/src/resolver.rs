//! Style resolution: turning (role, mode, state) into concrete properties.
//!
//! [`ThemeResolver`] applies the rule layers of a [`Theme`] in a fixed order,
//! each layer overwriting only the properties it sets:
//!
//! 1. **Base**: theme-independent signal colors. `profit`, `loss` and
//!    `neutral` stop here, so no mode or state can recolor them.
//! 2. **Component**: structural defaults (radius, padding, background,
//!    transition duration).
//! 3. **Mode**: applied only in dark mode. Roles without a dark entry keep
//!    their component styling.
//! 4. **State**: applied only on hover, and only for interactive roles.
//!
//! Resolution is a pure function of its inputs and the immutable layers.
//! The typed entry point [`ThemeResolver::resolve`] cannot fail; the string
//! boundary [`ThemeResolver::resolve_str`] is where unknown roles, modes and
//! states are rejected.
//!
//! ```rust
//! use dashtheme::{InteractionState, Property, SemanticRole, ThemeMode, ThemeResolver};
//!
//! let resolver = ThemeResolver::dashboard();
//! let card = resolver.resolve(
//!     SemanticRole::CardSurface,
//!     ThemeMode::Dark,
//!     InteractionState::Normal,
//! );
//! assert_eq!(card.css_value(Property::Background).as_deref(), Some("#2D2D2D"));
//! assert_eq!(card.css_value(Property::BorderRadius).as_deref(), Some("8px"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::role::SemanticRole;
use crate::style::{Layer, PropertySet, ThemeValidationError};
use crate::theme::{InteractionState, ModeSwitch, Theme, ThemeMode};

/// Resolves semantic roles against a validated theme.
///
/// Cheap to clone and safe to share across threads; clones share the same
/// theme.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    theme: Arc<Theme>,
}

impl ThemeResolver {
    /// Creates a resolver, validating the theme's layers first.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeValidationError`] if the theme breaks a layer
    /// invariant (for example a hover rule on a non-interactive role).
    pub fn new(theme: Theme) -> Result<Self, ThemeValidationError> {
        theme.validate()?;
        debug!(
            theme = theme.name().unwrap_or("<unnamed>"),
            rules = theme.len(),
            dark_overrides = theme.dark_override_count(),
            hover_overrides = theme.hover_override_count(),
            "theme resolver ready"
        );
        Ok(Self {
            theme: Arc::new(theme),
        })
    }

    /// A resolver over [`Theme::dashboard`].
    pub fn dashboard() -> Self {
        Self {
            theme: Arc::new(Theme::dashboard()),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolves the properties for `role` in `mode` and `state`.
    pub fn resolve(
        &self,
        role: SemanticRole,
        mode: ThemeMode,
        state: InteractionState,
    ) -> PropertySet {
        let layers = self.theme.layers();
        let mut resolved = PropertySet::new();

        if let Some(base) = layers.get(Layer::Base, role) {
            resolved.apply(base);
        }

        if !role.is_theme_independent() {
            if let Some(component) = layers.get(Layer::Component, role) {
                resolved.apply(component);
            }
            if mode == ThemeMode::Dark {
                if let Some(dark) = layers.get(Layer::Mode, role) {
                    resolved.apply(dark);
                }
            }
            if state == InteractionState::Hover && role.is_interactive() {
                if let Some(hover) = layers.get(Layer::State, role) {
                    resolved.apply(hover);
                }
            }
        }

        trace!(%role, %mode, %state, properties = resolved.len(), "resolved style");
        resolved
    }

    /// Resolves a [`ResolveRequest`], filling unspecified fields with
    /// light mode and the default state.
    pub fn resolve_request(&self, request: ResolveRequest) -> PropertySet {
        self.resolve(
            request.role,
            request.mode.unwrap_or_default(),
            request.state.unwrap_or_default(),
        )
    }

    /// Resolves from names, as received from a host that tracks roles,
    /// modes and states as strings.
    ///
    /// `None` for mode or state means light and default respectively.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownRole`], [`ResolveError::InvalidMode`]
    /// or [`ResolveError::InvalidState`] for unrecognized names. No partial
    /// result is ever returned.
    pub fn resolve_str(
        &self,
        role: &str,
        mode: Option<&str>,
        state: Option<&str>,
    ) -> Result<PropertySet, ResolveError> {
        let request = ResolveRequest {
            role: role.parse()?,
            mode: mode.map(str::parse).transpose()?,
            state: state.map(str::parse).transpose()?,
        };
        Ok(self.resolve_request(request))
    }

    /// Resolves with the mode currently held by `switch`.
    ///
    /// The switch is read exactly once, so a concurrent toggle either fully
    /// applies to this call or not at all.
    pub fn resolve_current(
        &self,
        role: SemanticRole,
        state: InteractionState,
        switch: &ModeSwitch,
    ) -> PropertySet {
        self.resolve(role, switch.get(), state)
    }

    /// Resolves every role, as needed to re-render after a mode change.
    pub fn resolve_all(
        &self,
        mode: ThemeMode,
        state: InteractionState,
    ) -> BTreeMap<SemanticRole, PropertySet> {
        SemanticRole::ALL
            .into_iter()
            .map(|role| (role, self.resolve(role, mode, state)))
            .collect()
    }

    /// Serializes [`resolve_all`](Self::resolve_all) as JSON, keyed by role
    /// name, for hosts that apply styles from script.
    pub fn to_json(
        &self,
        mode: ThemeMode,
        state: InteractionState,
    ) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.resolve_all(mode, state))
    }

    /// Renders the resolved theme for `mode` as a CSS stylesheet.
    ///
    /// Each role becomes a rule on its class name. Interactive roles also
    /// get a `:hover` rule holding only the properties hover changes.
    pub fn to_css(&self, mode: ThemeMode) -> String {
        let mut css = String::new();
        for role in SemanticRole::ALL {
            let normal = self.resolve(role, mode, InteractionState::Normal);
            if !normal.is_empty() {
                let _ = writeln!(
                    css,
                    ".{} {{ {} }}",
                    role.class_name(),
                    normal.to_css_declarations()
                );
            }

            if role.is_interactive() {
                let hover = self
                    .resolve(role, mode, InteractionState::Hover)
                    .changed_from(&normal);
                if !hover.is_empty() {
                    let _ = writeln!(
                        css,
                        ".{}:hover {{ {} }}",
                        role.class_name(),
                        hover.to_css_declarations()
                    );
                }
            }
        }
        css
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::dashboard()
    }
}

/// A resolution request whose mode and state may be left unspecified.
///
/// ```rust
/// use dashtheme::{ResolveRequest, SemanticRole, ThemeMode, ThemeResolver};
///
/// let resolver = ThemeResolver::dashboard();
/// let header = resolver.resolve_request(
///     ResolveRequest::new(SemanticRole::HeaderText).with_mode(ThemeMode::Dark),
/// );
/// assert!(!header.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveRequest {
    pub role: SemanticRole,
    pub mode: Option<ThemeMode>,
    pub state: Option<InteractionState>,
}

impl ResolveRequest {
    pub fn new(role: SemanticRole) -> Self {
        Self {
            role,
            mode: None,
            state: None,
        }
    }

    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_state(mut self, state: InteractionState) -> Self {
        self.state = Some(state);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Property, StylesheetError};
    use proptest::prelude::*;

    const MODES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];
    const STATES: [InteractionState; 2] = [InteractionState::Normal, InteractionState::Hover];

    fn resolver() -> ThemeResolver {
        ThemeResolver::dashboard()
    }

    #[test]
    fn test_card_surface_dark() {
        let card = resolver().resolve(
            SemanticRole::CardSurface,
            ThemeMode::Dark,
            InteractionState::Normal,
        );
        assert_eq!(
            card.css_value(Property::Background).as_deref(),
            Some("#2D2D2D")
        );
        assert_eq!(
            card.css_value(Property::BoxShadow).as_deref(),
            Some("0 2px 4px rgba(0,0,0,0.2)")
        );
        assert_eq!(
            card.css_value(Property::BorderRadius).as_deref(),
            Some("8px")
        );
        assert_eq!(card.css_value(Property::Padding).as_deref(), Some("16px"));
    }

    #[test]
    fn test_card_surface_light() {
        let card = resolver().resolve(
            SemanticRole::CardSurface,
            ThemeMode::Light,
            InteractionState::Normal,
        );
        assert_eq!(
            card.css_value(Property::Background).as_deref(),
            Some("#FFFFFF")
        );
        assert_eq!(
            card.css_value(Property::BoxShadow).as_deref(),
            Some("0 2px 4px rgba(0,0,0,0.1)")
        );
    }

    #[test]
    fn test_profit_same_in_both_modes() {
        let resolver = resolver();
        let light = resolver.resolve(
            SemanticRole::Profit,
            ThemeMode::Light,
            InteractionState::Normal,
        );
        let dark = resolver.resolve(
            SemanticRole::Profit,
            ThemeMode::Dark,
            InteractionState::Normal,
        );
        assert_eq!(light, dark);
        assert_eq!(
            dark.get(Property::Color).and_then(|v| v.as_color()),
            Some(Color::hex(0x4CAF50))
        );
    }

    #[test]
    fn test_news_card_hover_lifts() {
        let resolver = resolver();
        let normal = resolver.resolve(
            SemanticRole::NewsCard,
            ThemeMode::Light,
            InteractionState::Normal,
        );
        let hover = resolver.resolve(
            SemanticRole::NewsCard,
            ThemeMode::Light,
            InteractionState::Hover,
        );
        assert_eq!(normal.css_value(Property::Transform), None);
        assert_eq!(
            hover.css_value(Property::Transform).as_deref(),
            Some("translateY(-2px)")
        );
        assert_eq!(
            hover.css_value(Property::BoxShadow).as_deref(),
            Some("0 4px 8px rgba(0,0,0,0.2)")
        );
        assert_eq!(
            hover.css_value(Property::TransitionDuration).as_deref(),
            Some("0.3s")
        );
    }

    #[test]
    fn test_card_surface_does_not_lift() {
        let resolver = resolver();
        for mode in MODES {
            assert_eq!(
                resolver.resolve(SemanticRole::CardSurface, mode, InteractionState::Hover),
                resolver.resolve(SemanticRole::CardSurface, mode, InteractionState::Normal),
            );
        }
    }

    #[test]
    fn test_non_interactive_roles_have_no_transition() {
        let metric = resolver().resolve(
            SemanticRole::MetricBox,
            ThemeMode::Light,
            InteractionState::Normal,
        );
        assert!(!metric.contains(Property::TransitionDuration));
    }

    #[test]
    fn test_resolve_str_defaults() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve_str("card-surface", None, None).unwrap(),
            resolver.resolve(
                SemanticRole::CardSurface,
                ThemeMode::Light,
                InteractionState::Normal
            )
        );
    }

    #[test]
    fn test_resolve_str_legacy_alias() {
        let resolver = resolver();
        assert_eq!(
            resolver
                .resolve_str("trading-card", Some("dark"), Some("default"))
                .unwrap(),
            resolver.resolve(
                SemanticRole::CardSurface,
                ThemeMode::Dark,
                InteractionState::Normal
            )
        );
    }

    #[test]
    fn test_resolve_str_unknown_role() {
        assert_eq!(
            resolver().resolve_str("notARole", Some("light"), Some("default")),
            Err(ResolveError::UnknownRole("notARole".to_string()))
        );
    }

    #[test]
    fn test_resolve_str_invalid_mode() {
        assert_eq!(
            resolver().resolve_str("profit", Some("sepia"), None),
            Err(ResolveError::InvalidMode("sepia".to_string()))
        );
    }

    #[test]
    fn test_resolve_str_invalid_state() {
        assert_eq!(
            resolver().resolve_str("button", None, Some("pressed")),
            Err(ResolveError::InvalidState("pressed".to_string()))
        );
    }

    #[test]
    fn test_resolve_request_defaults() {
        let resolver = resolver();
        let request = ResolveRequest::new(SemanticRole::Button);
        assert_eq!(
            resolver.resolve_request(request),
            resolver.resolve(
                SemanticRole::Button,
                ThemeMode::Light,
                InteractionState::Normal
            )
        );
        let hovered = request.with_state(InteractionState::Hover);
        assert!(resolver
            .resolve_request(hovered)
            .contains(Property::Transform));
    }

    #[test]
    fn test_resolve_current_reads_switch() {
        let resolver = resolver();
        let switch = ModeSwitch::new(ThemeMode::Light);
        let light = resolver.resolve_current(
            SemanticRole::SidebarSurface,
            InteractionState::Normal,
            &switch,
        );
        switch.toggle();
        let dark = resolver.resolve_current(
            SemanticRole::SidebarSurface,
            InteractionState::Normal,
            &switch,
        );
        assert_eq!(
            light.css_value(Property::Background).as_deref(),
            Some("#F8F9FA")
        );
        assert_eq!(
            dark.css_value(Property::Background).as_deref(),
            Some("#1E1E1E")
        );
    }

    #[test]
    fn test_resolve_all_covers_every_role() {
        let all = resolver().resolve_all(ThemeMode::Dark, InteractionState::Normal);
        assert_eq!(all.len(), SemanticRole::ALL.len());
        assert_eq!(
            all[&SemanticRole::SidebarSurface]
                .css_value(Property::Border)
                .as_deref(),
            Some("1px solid #333333")
        );
    }

    #[test]
    fn test_new_rejects_invalid_theme() {
        let theme = Theme::new().add_dark(
            SemanticRole::Loss,
            PropertySet::new().with(Property::Color, Color::hex(0xFF0000)),
        );
        assert_eq!(
            ThemeResolver::new(theme).unwrap_err(),
            ThemeValidationError::ThemeIndependentOverride {
                role: SemanticRole::Loss,
                layer: Layer::Mode,
            }
        );
    }

    #[test]
    fn test_user_theme_merges_over_dashboard() {
        let user = Theme::from_css(
            ".metric-box { padding: 20px; } \
             @media (prefers-color-scheme: dark) { .trading-card { background: #222222; } }",
        )
        .unwrap();
        let resolver = ThemeResolver::new(Theme::dashboard().merge(user)).unwrap();
        let card = resolver.resolve(
            SemanticRole::CardSurface,
            ThemeMode::Dark,
            InteractionState::Normal,
        );
        assert_eq!(
            card.css_value(Property::Background).as_deref(),
            Some("#222222")
        );
        assert_eq!(
            card.css_value(Property::BoxShadow).as_deref(),
            Some("0 2px 4px rgba(0,0,0,0.2)")
        );
        let metric = resolver.resolve(
            SemanticRole::MetricBox,
            ThemeMode::Dark,
            InteractionState::Normal,
        );
        assert_eq!(metric.css_value(Property::Padding).as_deref(), Some("20px"));
        assert_eq!(
            metric.css_value(Property::Background).as_deref(),
            Some("#F8F9FA")
        );
    }

    #[test]
    fn test_dark_rules_cannot_restyle_buttons() {
        let err = Theme::from_css(
            "@media (prefers-color-scheme: dark) { .button { border-radius: 20px; color: #FFFFFF; } }",
        )
        .unwrap_err();
        assert_eq!(
            err,
            StylesheetError::Validation {
                source: ThemeValidationError::NonSurfaceDarkOverride {
                    role: SemanticRole::Button,
                },
            }
        );
    }

    #[test]
    fn test_to_json_keys_by_role_name() {
        let json = resolver()
            .to_json(ThemeMode::Dark, InteractionState::Normal)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cardSurface"]["background"], "#2D2D2D");
        assert_eq!(value["newsCard"]["transition-duration"], "0.3s");
        assert_eq!(value["profit"]["color"], "#4CAF50");
    }

    #[test]
    fn test_to_css_light() {
        let css = resolver().to_css(ThemeMode::Light);
        assert!(css.contains(".profit { color: #4CAF50; }"));
        assert!(css.contains(
            ".news-card:hover { box-shadow: 0 4px 8px rgba(0,0,0,0.2); transform: translateY(-2px); }"
        ));
        assert!(css.contains(".button:hover {"));
        assert!(!css.contains(".card-surface:hover"));
    }

    #[test]
    fn test_to_css_dark_uses_dark_surfaces() {
        let css = resolver().to_css(ThemeMode::Dark);
        assert!(css.contains("background: #2D2D2D;"));
        assert!(css.contains(
            ".sidebar-surface { background: #1E1E1E; border: 1px solid #333333; padding: 16px; }"
        ));
    }

    #[test]
    fn test_to_css_round_trips_through_parser() {
        let resolver = resolver();
        let css = resolver.to_css(ThemeMode::Light);
        let reparsed = ThemeResolver::new(Theme::from_css(&css).unwrap()).unwrap();
        for role in SemanticRole::ALL {
            for state in STATES {
                assert_eq!(
                    reparsed.resolve(role, ThemeMode::Light, state),
                    resolver.resolve(role, ThemeMode::Light, state),
                    "{role} {state}"
                );
            }
        }
    }

    #[test]
    fn test_resolver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThemeResolver>();
    }

    fn any_role() -> impl Strategy<Value = SemanticRole> {
        proptest::sample::select(SemanticRole::ALL.to_vec())
    }

    fn any_mode() -> impl Strategy<Value = ThemeMode> {
        proptest::sample::select(MODES.to_vec())
    }

    fn any_state() -> impl Strategy<Value = InteractionState> {
        proptest::sample::select(STATES.to_vec())
    }

    proptest! {
        #[test]
        fn prop_resolution_is_deterministic(
            role in any_role(),
            mode in any_mode(),
            state in any_state(),
        ) {
            let resolver = resolver();
            let first = resolver.resolve(role, mode, state);
            let second = resolver.resolve(role, mode, state);
            prop_assert_eq!(first.to_css_declarations(), second.to_css_declarations());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_theme_independent_roles_ignore_mode_and_state(
            mode in any_mode(),
            state in any_state(),
        ) {
            let resolver = resolver();
            for role in [SemanticRole::Profit, SemanticRole::Loss, SemanticRole::Neutral] {
                prop_assert_eq!(
                    resolver.resolve(role, mode, state),
                    resolver.resolve(role, ThemeMode::Light, InteractionState::Normal)
                );
            }
        }

        #[test]
        fn prop_hover_only_changes_lift(role in any_role(), mode in any_mode()) {
            let resolver = resolver();
            let normal = resolver.resolve(role, mode, InteractionState::Normal);
            let hover = resolver.resolve(role, mode, InteractionState::Hover);
            let changed = hover.changed_from(&normal);
            if role.is_interactive() {
                prop_assert!(changed.properties().all(Property::is_lift));
            } else {
                prop_assert!(changed.is_empty());
            }
        }

        #[test]
        fn prop_roles_without_dark_rules_match_light(role in any_role(), state in any_state()) {
            let resolver = resolver();
            if resolver.theme().layers().get(Layer::Mode, role).is_none() {
                prop_assert_eq!(
                    resolver.resolve(role, ThemeMode::Dark, state),
                    resolver.resolve(role, ThemeMode::Light, state)
                );
            }
        }
    }
}
