//! Theme mode and OS color-scheme detection.
//!
//! [`ThemeMode`] is the light/dark presentation variant selected for the
//! whole UI. Hosts usually start from the OS preference via
//! [`detect_theme_mode`] and switch on user toggle. Override detection for
//! testing with [`set_mode_detector`]:
//!
//! ```rust
//! use dashtheme::{detect_theme_mode, set_mode_detector, ThemeMode};
//!
//! set_mode_detector(|| ThemeMode::Dark);
//! assert_eq!(detect_theme_mode(), ThemeMode::Dark);
//! # set_mode_detector(|| ThemeMode::Light);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::Mode as OsThemeMode;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::warn;

use crate::error::ResolveError;

/// The light/dark presentation variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background, dark text. Also the fallback styling for any role
    /// without a dark-mode rule.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeMode {
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ResolveError::InvalidMode(s.to_string())),
        }
    }
}

type ModeDetector = fn() -> ThemeMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine the user's preferred mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Detects the user's preferred mode from the OS.
///
/// Uses the `dark-light` crate unless overridden via [`set_mode_detector`].
/// When the OS gives no answer, light mode is assumed.
pub fn detect_theme_mode() -> ThemeMode {
    let detector = MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> ThemeMode {
    match dark_light::detect() {
        Ok(OsThemeMode::Dark) => ThemeMode::Dark,
        Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => ThemeMode::Light,
        Err(err) => {
            warn!(error = %err, "color scheme detection failed; assuming light mode");
            ThemeMode::Light
        }
    }
}
