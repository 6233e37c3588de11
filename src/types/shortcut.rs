//! The stored shortcut record.
//!
//! A shortcut pairs a URL-matching regular expression with a destination
//! template whose `$1`..`$9` placeholders are filled from the pattern's
//! capture groups. The stored list is ordered: insertion order is display
//! order and, for auto-execution, priority order.

use serde::{Deserialize, Serialize};

/// Icon identifier used when a shortcut declares none.
pub const DEFAULT_ICON: &str = "link-45deg";

/// A user-authored navigation shortcut.
///
/// Identity within the stored list is positional: reordering, inserting, or
/// deleting shifts every subsequent index, so callers reload the list after
/// any mutation.
///
/// # Wire format
///
/// Serializes as the camelCase JSON object used by the import/export format:
///
/// ```json
/// { "name": "issue board", "pattern": "^https://git\\.example/(\\w+)",
///   "target": "https://board.example/$1", "openNewTab": false,
///   "autoExecute": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    /// Display label. Required, non-empty after trimming.
    pub name: String,

    /// Symbolic icon identifier; `None` means [`DEFAULT_ICON`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Regular-expression source matched against the tab URL (as a search,
    /// not a full-string match). Must compile at save time.
    pub pattern: String,

    /// Destination template; may reference capture groups as `$1`..`$9`.
    pub target: String,

    /// Open the destination in a new tab instead of updating the current one.
    #[serde(default)]
    pub open_new_tab: bool,

    /// Candidate for automatic application when a matching page loads.
    #[serde(default)]
    pub auto_execute: bool,
}

impl Shortcut {
    /// Creates a shortcut with the three required fields; everything else
    /// takes its default.
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            pattern: pattern.into(),
            target: target.into(),
            open_new_tab: false,
            auto_execute: false,
        }
    }

    /// Returns the icon identifier, falling back to [`DEFAULT_ICON`].
    #[must_use]
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().filter(|i| !i.is_empty()).unwrap_or(DEFAULT_ICON)
    }

    /// Collects field-level validation messages.
    ///
    /// An empty result means the shortcut is storable. The loop invariant for
    /// auto-executing shortcuts is checked separately at save time, since it
    /// needs the guard rather than the fields alone.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("a name is required".to_string());
        }

        if self.pattern.trim().is_empty() {
            errors.push("a pattern is required".to_string());
        } else if let Err(e) = regex::Regex::new(&self.pattern) {
            errors.push(format!("invalid pattern: {}", e));
        }

        if self.target.trim().is_empty() {
            errors.push("a target is required".to_string());
        }

        errors
    }
}
