//! Per-element interaction state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ResolveError;

/// A transient, host-tracked condition of one rendered element.
///
/// The resolver never stores this; hosts pass it in on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum InteractionState {
    /// Not interacted with. Spelled `default` in requests and stylesheets.
    #[default]
    #[serde(rename = "default")]
    Normal,
    /// Pointer is over the element.
    #[serde(rename = "hover")]
    Hover,
}

impl InteractionState {
    pub fn name(self) -> &'static str {
        match self {
            InteractionState::Normal => "default",
            InteractionState::Hover => "hover",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteractionState {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" | "normal" => Ok(InteractionState::Normal),
            "hover" => Ok(InteractionState::Hover),
            _ => Err(ResolveError::InvalidState(s.to_string())),
        }
    }
}
