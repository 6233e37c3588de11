//! Placeholder expansion for destination templates.

/// Substitutes `$1`..`$N` tokens in `template` with capture-group values.
///
/// `captures[0]` is the whole match and is never substituted; for each group
/// index `i` from 1 upward, every occurrence of the literal text `$i` is
/// replaced with `captures[i]`, in ascending order of `i`.
///
/// The passes are sequential, not simultaneous: text inserted by an earlier
/// replacement is visible to later ones, so a captured value that itself
/// contains `$3` will have that token rewritten when the loop reaches group
/// 3. Stored shortcuts depend on this exact order, so it must not be
/// collapsed into a single pass.
///
/// # Examples
///
/// ```
/// use tabhop::engine::expand;
///
/// let captures = vec!["full".into(), "X".into(), "Y".into()];
/// assert_eq!(expand("a$1b$2c", &captures), "aXbYc");
/// ```
#[must_use]
pub fn expand(template: &str, captures: &[String]) -> String {
    let mut result = template.to_string();
    for (i, value) in captures.iter().enumerate().skip(1) {
        let placeholder = format!("${}", i);
        result = result.replace(&placeholder, value);
    }
    result
}
