//! URL normalization.
//!
//! Turns loosely-formed user input into an absolute URL with a scheme. This
//! is purely syntactic: no DNS lookups, no validation that the host exists.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything already carrying a URI scheme, e.g. `https:`, `ftp:`, `mailto:`.
static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)[a-z][a-z0-9+.-]*:").unwrap());

/// `localhost` or a dotted IPv4 address, optionally with a `:port`.
static LOCAL_HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(localhost|(\d{1,3}\.){3}\d{1,3})(:\d+)?").unwrap());

/// One or more `label.` segments ending in a 2+-letter TLD.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-z0-9-]+\.)+[a-z]{2,}").unwrap());

/// Normalizes a destination string into an absolute URL.
///
/// The first rule that matches wins:
///
/// 1. a scheme is already present → returned unchanged;
/// 2. `localhost` / IPv4 → `http://` prefixed;
/// 3. looks like a domain, or contains a `/` → `https://` prefixed;
/// 4. anything else → `https://` prefixed.
///
/// Empty input passes through unchanged.
///
/// # Examples
///
/// ```
/// use tabhop::engine::normalize;
///
/// assert_eq!(normalize("https://example.com"), "https://example.com");
/// assert_eq!(normalize("localhost:8080"), "http://localhost:8080");
/// assert_eq!(normalize("example.com/path"), "https://example.com/path");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return raw.to_string();
    }
    let trimmed = raw.trim();

    if SCHEME_RE.is_match(trimmed) {
        return trimmed.to_string();
    }

    if LOCAL_HOST_RE.is_match(trimmed) {
        return format!("http://{}", trimmed);
    }

    if DOMAIN_RE.is_match(trimmed) || trimmed.contains('/') {
        return format!("https://{}", trimmed);
    }

    format!("https://{}", trimmed)
}
