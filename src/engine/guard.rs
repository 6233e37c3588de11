//! Navigation-loop detection.
//!
//! A shortcut loops when its computed destination would itself match the
//! shortcut's own pattern: auto-applying it re-triggers on the page it just
//! navigated to, forever. Two checks cover the two moments that matter:
//!
//! - [`would_loop_static`] runs at authoring time, before any concrete URL
//!   exists. It is a heuristic: false negatives and false positives are both
//!   possible, so it gates the auto-execute checkbox but proves nothing.
//! - [`would_loop_for`] runs against the actual URL immediately before an
//!   unattended navigation. It is exact for that URL and is the final gate.
//!
//! The two fail differently on internal errors, deliberately: the static
//! check answers `false` (refuse silently at authoring time), the dynamic
//! check answers `true` (block defensively at execution time).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::expand::expand;
use crate::engine::resolve::{capture_values, compile_pattern};
use crate::error::TabhopResult;
use crate::types::Shortcut;

/// A `$1`..`$9` placeholder token.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$[1-9]").unwrap());

/// A parenthesized group in a pattern, non-nested.
static GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Literal substituted for every placeholder when probing a template.
const LOOP_PROBE: &str = "test123";

/// Exact loop check against a concrete URL.
///
/// Matches `url` against the shortcut's pattern; no match means no loop.
/// Otherwise the destination is computed the same way [`resolve`] would and
/// tested against the pattern again (a search, like every pattern use).
///
/// Any internal failure, such as an uncompilable pattern, answers `true`:
/// when in doubt, an unattended navigation is blocked.
///
/// [`resolve`]: crate::engine::resolve::resolve
///
/// # Examples
///
/// ```
/// use tabhop::engine::would_loop_for;
/// use tabhop::Shortcut;
///
/// let shortcut = Shortcut::new("echo", "^http://a/(.*)$", "http://a/$1");
/// assert!(would_loop_for(&shortcut, "http://a/x"));
/// ```
#[must_use]
pub fn would_loop_for(shortcut: &Shortcut, url: &str) -> bool {
    dynamic_check(shortcut, url).unwrap_or(true)
}

fn dynamic_check(shortcut: &Shortcut, url: &str) -> TabhopResult<bool> {
    let regex = compile_pattern(&shortcut.pattern)?;

    let caps = match regex.captures(url) {
        Some(caps) => caps,
        None => return Ok(false),
    };

    let destination = expand(&shortcut.target, &capture_values(&caps));
    Ok(regex.is_match(&destination))
}

/// Heuristic loop check from pattern/target shape alone.
///
/// Used at authoring time, when no concrete URL is available yet:
///
/// 1. a target without placeholders is tested literally against the pattern;
/// 2. the pattern with its regex machinery stripped is compared to the
///    target with its placeholders stripped — equal bases loop;
/// 3. placeholders are substituted with a fixed probe literal and the probe
///    destination is tested against the pattern.
///
/// A `false` answer is not a proof: a pattern/target pair can still loop for
/// some URLs. The dynamic check stays in place at execution time regardless.
/// Any internal failure answers `false`.
///
/// # Examples
///
/// ```
/// use tabhop::engine::would_loop_static;
/// use tabhop::Shortcut;
///
/// assert!(would_loop_static(&Shortcut::new("same", "^/foo$", "/foo")));
/// assert!(!would_loop_static(&Shortcut::new("move", "^/old/(.*)$", "/new/$1")));
/// ```
#[must_use]
pub fn would_loop_static(shortcut: &Shortcut) -> bool {
    static_check(shortcut).unwrap_or(false)
}

fn static_check(shortcut: &Shortcut) -> TabhopResult<bool> {
    let regex = compile_pattern(&shortcut.pattern)?;

    // No placeholders: the target is a literal destination
    if !PLACEHOLDER_RE.is_match(&shortcut.target) {
        return Ok(regex.is_match(&shortcut.target));
    }

    if pattern_base(&shortcut.pattern) == target_base(&shortcut.target) {
        return Ok(true);
    }

    let probe = PLACEHOLDER_RE.replace_all(&shortcut.target, LOOP_PROBE);
    Ok(regex.is_match(&probe))
}

/// Strips regex machinery from a pattern, leaving its literal skeleton.
fn pattern_base(pattern: &str) -> String {
    let mut base = pattern.replace('^', "");
    if let Some(stripped) = base.strip_suffix('$') {
        base = stripped.to_string();
    }
    base = base.replace('\\', "");
    base = GROUP_RE.replace_all(&base, "").into_owned();
    base = base.replace(".*", "").replace(".+", "").replace('?', "");
    base.trim().to_string()
}

/// Strips placeholders and surrounding whitespace from a target template.
fn target_base(target: &str) -> String {
    PLACEHOLDER_RE.replace_all(target, "").trim().to_string()
}
