//! Themes and the inputs that select a presentation variant.
//!
//! A [`Theme`] owns the four rule layers (base, component, mode, state).
//! Dark mode is expressed per role rather than as a second theme file: a
//! role lists only the properties that differ in dark mode, and everything
//! else falls through from the light styling.
//!
//! ```yaml
//! cardSurface:
//!   background: "#FFFFFF"      # component layer
//!   border-radius: 8px
//!   dark:
//!     background: "#2D2D2D"    # mode layer, dark only
//! newsCard:
//!   hover:
//!     transform: translateY(-2px)
//! ```
//!
//! ## Mode Detection
//!
//! [`detect_theme_mode`] asks the OS for the preferred scheme and
//! [`ModeSwitch`] holds the mode that is active for the whole process.
//! Interaction state ([`InteractionState`]) is per element and is never
//! stored here.

mod adaptive;
mod dashboard;
mod state;
mod switch;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_theme_mode, set_mode_detector, ThemeMode};
pub use state::InteractionState;
pub use switch::ModeSwitch;
pub use theme::Theme;
