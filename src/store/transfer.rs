//! Import/export of shortcut lists.
//!
//! The exchange format is a JSON array of shortcut objects, each with at
//! minimum `name`, `pattern`, and `target` string fields. Optional fields
//! (`icon`, `openNewTab`, `autoExecute`) default when absent. Exporting then
//! importing yields a list equal element-for-element to the original.

use serde_json::Value;
use thiserror::Error;

use crate::types::Shortcut;

/// Errors that can occur when importing a shortcut list.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The input is not valid JSON at all.
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("expected a JSON array of shortcuts")]
    NotAnArray,

    /// An entry lacks one of the required string fields.
    #[error("entry {index} is missing required field `{field}`")]
    MissingField {
        /// Zero-based position of the offending entry.
        index: usize,
        /// The absent or empty field.
        field: &'static str,
    },
}

/// Serializes a shortcut list into the exchange format.
///
/// # Errors
///
/// Returns a [`TransferError::Json`] if serialization fails, which for this
/// data model would indicate a serde_json internal failure.
pub fn export_json(shortcuts: &[Shortcut]) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(shortcuts)?)
}

/// Parses the exchange format back into a shortcut list.
///
/// Rejects non-array JSON and any element missing `name`, `pattern`, or
/// `target` (absent, non-string, or empty after trimming all count as
/// missing).
pub fn import_json(raw: &str) -> Result<Vec<Shortcut>, TransferError> {
    let value: Value = serde_json::from_str(raw)?;
    let entries = value.as_array().ok_or(TransferError::NotAnArray)?;

    let mut shortcuts = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        for field in ["name", "pattern", "target"] {
            let present = entry
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty());
            if !present {
                return Err(TransferError::MissingField { index, field });
            }
        }
        shortcuts.push(serde_json::from_value(entry.clone())?);
    }

    Ok(shortcuts)
}
