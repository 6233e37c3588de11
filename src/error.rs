//! Centralized error types for Tabhop.
//!
//! This module provides a unified error type (`TabhopError`) covering every
//! failure the engine and its collaborators can produce. Using a single type
//! provides:
//!
//! - Consistent error handling patterns
//! - Clear separation of user-facing failures from silent background aborts
//! - Easy integration with `anyhow` for context
//!
//! # Example
//!
//! ```
//! use tabhop::error::{TabhopError, TabhopResult};
//!
//! fn require_pattern(pattern: &str) -> TabhopResult<()> {
//!     if pattern.trim().is_empty() {
//!         return Err(TabhopError::invalid_input("a pattern is required"));
//!     }
//!     Ok(())
//! }
//!
//! fn main() {
//!     match require_pattern("") {
//!         Ok(()) => println!("ok"),
//!         Err(e) => {
//!             println!("Error: {}", e);
//!             if e.is_user_facing() {
//!                 println!("show this one in the popup");
//!             }
//!         }
//!     }
//! }
//! ```

use std::fmt;

/// Result type alias using `TabhopError`.
pub type TabhopResult<T> = Result<T, TabhopError>;

/// Centralized error type for Tabhop.
#[derive(Debug)]
pub enum TabhopError {
    // ============== Input Errors ==============
    /// A required field is missing or empty.
    InvalidInput {
        /// Field-level validation message.
        message: String,
    },

    /// The shortcut pattern does not compile as a regular expression.
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Compiler diagnostic.
        message: String,
    },

    // ============== Match Errors ==============
    /// The pattern compiles but does not match the given URL.
    NoMatch {
        /// The pattern that failed to match.
        pattern: String,
    },

    // ============== Safety Errors ==============
    /// Enabling auto-execute would create a navigation loop.
    LoopRejected {
        /// Display name of the rejected shortcut.
        name: String,
    },

    // ============== Collaborator Errors ==============
    /// The shortcut store failed to load or persist the list.
    Store {
        /// Description of the store failure.
        message: String,
    },

    /// Tab lookup or navigation failed.
    Tab {
        /// Description of the tab failure.
        message: String,
    },

    // ============== Wrapped Errors ==============
    /// Error from anyhow or other sources.
    Other {
        /// The wrapped error message.
        message: String,
        /// The original error, if available.
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// ============== Constructor Methods ==============

impl TabhopError {
    /// Creates a field validation error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates a no-match error.
    #[must_use]
    pub fn no_match(pattern: impl Into<String>) -> Self {
        Self::NoMatch {
            pattern: pattern.into(),
        }
    }

    /// Creates a loop rejection error.
    #[must_use]
    pub fn loop_rejected(name: impl Into<String>) -> Self {
        Self::LoopRejected { name: name.into() }
    }

    /// Creates a store failure error.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Creates a tab failure error.
    #[must_use]
    pub fn tab(message: impl Into<String>) -> Self {
        Self::Tab {
            message: message.into(),
        }
    }
}

// ============== Category Methods ==============

impl TabhopError {
    /// Returns `true` if this error carries a message meant for the user.
    ///
    /// Validation, pattern, match, and loop failures are surfaced in the
    /// interactive UI. Collaborator failures are relayed as generic failures
    /// and background aborts are only logged.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::InvalidPattern { .. }
                | Self::NoMatch { .. }
                | Self::LoopRejected { .. }
        )
    }

    /// Returns `true` if this error came from a collaborator rather than the
    /// engine itself.
    #[must_use]
    pub fn is_collaborator(&self) -> bool {
        matches!(self, Self::Store { .. } | Self::Tab { .. })
    }

    /// Returns the module name where this error originated.
    #[must_use]
    pub fn module(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. }
            | Self::InvalidPattern { .. }
            | Self::NoMatch { .. }
            | Self::LoopRejected { .. } => "engine",

            Self::Store { .. } => "store",

            Self::Tab { .. } => "browser",

            Self::Other { .. } => "unknown",
        }
    }
}

// ============== Display Implementation ==============

impl fmt::Display for TabhopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { message } => {
                write!(f, "engine: invalid input: {}", message)
            }
            Self::InvalidPattern { pattern, message } => {
                write!(f, "engine: invalid pattern '{}': {}", pattern, message)
            }
            Self::NoMatch { pattern } => {
                write!(f, "engine: pattern '{}' does not match the current URL", pattern)
            }
            Self::LoopRejected { name } => {
                write!(f, "engine: '{}' would loop back onto its own pattern", name)
            }
            Self::Store { message } => {
                write!(f, "store: {}", message)
            }
            Self::Tab { message } => {
                write!(f, "browser: {}", message)
            }
            Self::Other { message, .. } => {
                write!(f, "error: {}", message)
            }
        }
    }
}

// ============== Error Implementation ==============

impl std::error::Error for TabhopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other {
                source: Some(src), ..
            } => Some(src.as_ref()),
            _ => None,
        }
    }
}

// ============== Conversion Implementations ==============

impl From<anyhow::Error> for TabhopError {
    fn from(err: anyhow::Error) -> Self {
        // Flatten the context chain into a single descriptive string
        Self::Other {
            message: format!("{:#}", err),
            source: None,
        }
    }
}

// ============== Unit Tests ==============
