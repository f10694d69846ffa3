//! Error type for style resolution requests.
//!
//! Resolution over typed inputs cannot fail. [`ResolveError`] covers the
//! string boundary, where a host hands over role, mode and state names it
//! read from markup or configuration. None of these failures is ever
//! coerced to a default: the caller decides whether an invalid request is a
//! programming error or something to recover from.

use thiserror::Error;

/// Errors raised when a resolution request names something unknown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The role name does not match any semantic role.
    #[error("unknown semantic role '{0}'")]
    UnknownRole(String),

    /// The mode name is neither `light` nor `dark`.
    #[error("invalid theme mode '{0}' (expected 'light' or 'dark')")]
    InvalidMode(String),

    /// The state name is neither `default` nor `hover`.
    #[error("invalid interaction state '{0}' (expected 'default' or 'hover')")]
    InvalidState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_display() {
        let err = ResolveError::UnknownRole("notARole".to_string());
        assert_eq!(err.to_string(), "unknown semantic role 'notARole'");
    }

    #[test]
    fn test_invalid_mode_display() {
        let err = ResolveError::InvalidMode("sepia".to_string());
        assert!(err.to_string().contains("sepia"));
        assert!(err.to_string().contains("light"));
    }

    #[test]
    fn test_invalid_state_display() {
        let err = ResolveError::InvalidState("pressed".to_string());
        assert!(err.to_string().contains("pressed"));
        assert!(err.to_string().contains("hover"));
    }
}
