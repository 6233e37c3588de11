//! Destination resolution: pattern match plus placeholder expansion.

use regex::{Captures, Regex};

use crate::engine::expand::expand;
use crate::error::{TabhopError, TabhopResult};
use crate::types::Shortcut;

/// Compiles a shortcut pattern, mapping syntax failures into the error
/// taxonomy.
pub(crate) fn compile_pattern(pattern: &str) -> TabhopResult<Regex> {
    Regex::new(pattern).map_err(|e| TabhopError::invalid_pattern(pattern, e.to_string()))
}

/// Collects the capture-group values of a match, index 0 first.
///
/// A group that did not participate in the match contributes an empty
/// string.
pub(crate) fn capture_values(caps: &Captures<'_>) -> Vec<String> {
    (0..caps.len())
        .map(|i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect()
}

/// Computes the destination a shortcut produces for `current_url`.
///
/// The pattern is applied as a search, not a full-string match. The result
/// is the raw expanded template; normalization happens at the navigation
/// boundary, not here.
///
/// # Errors
///
/// - [`TabhopError::InvalidInput`] when pattern, target, or URL is empty;
/// - [`TabhopError::InvalidPattern`] when the pattern does not compile;
/// - [`TabhopError::NoMatch`] when the pattern does not match the URL.
pub fn resolve(shortcut: &Shortcut, current_url: &str) -> TabhopResult<String> {
    if shortcut.pattern.trim().is_empty() || shortcut.target.trim().is_empty() {
        return Err(TabhopError::invalid_input(
            "a shortcut needs both a pattern and a target",
        ));
    }
    if current_url.is_empty() {
        return Err(TabhopError::invalid_input("the current tab URL was not detected"));
    }

    let regex = compile_pattern(&shortcut.pattern)?;
    let caps = regex
        .captures(current_url)
        .ok_or_else(|| TabhopError::no_match(&shortcut.pattern))?;

    Ok(expand(&shortcut.target, &capture_values(&caps)))
}
