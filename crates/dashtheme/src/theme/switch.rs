//! The process-wide active theme mode.
//!
//! Resolution itself takes the mode as an explicit argument. [`ModeSwitch`]
//! is the one shared mutable value a host keeps next to it: read on every
//! render, written only on user toggle.
//!
//! Backed by `arc-swap`, so reads are wait-free and never observe a torn
//! value, and a write is visible to every subsequent read. A resolution
//! that already loaded the mode finishes with the value it loaded.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use super::adaptive::{detect_theme_mode, ThemeMode};

/// Shared holder for the active [`ThemeMode`].
///
/// # Example
///
/// ```rust
/// use dashtheme::{ModeSwitch, ThemeMode};
///
/// let switch = ModeSwitch::new(ThemeMode::Light);
/// assert_eq!(switch.toggle(), ThemeMode::Dark);
/// assert_eq!(switch.get(), ThemeMode::Dark);
/// ```
#[derive(Debug)]
pub struct ModeSwitch {
    current: ArcSwap<ThemeMode>,
}

impl ModeSwitch {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current: ArcSwap::from_pointee(mode),
        }
    }

    /// Starts from the OS preference.
    pub fn detect() -> Self {
        Self::new(detect_theme_mode())
    }

    /// The active mode.
    pub fn get(&self) -> ThemeMode {
        **self.current.load()
    }

    /// Replaces the active mode, returning the previous one.
    pub fn set(&self, mode: ThemeMode) -> ThemeMode {
        let previous = *self.current.swap(Arc::new(mode));
        if previous != mode {
            debug!(from = %previous, to = %mode, "theme mode changed");
        }
        previous
    }

    /// Flips the active mode atomically, returning the new one.
    pub fn toggle(&self) -> ThemeMode {
        let previous = *self.current.rcu(|mode| mode.toggled());
        let current = previous.toggled();
        debug!(from = %previous, to = %current, "theme mode toggled");
        current
    }
}

impl Default for ModeSwitch {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
