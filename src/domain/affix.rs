//! Stripping of the literal prefix/suffix a naming convention wraps
//! around the semantic-version core of a name.

fn strip_front<'a>(name: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return name;
    }
    name.get(prefix.len()..).unwrap_or("")
}

fn strip_back<'a>(name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return name;
    }
    let end = name.len().saturating_sub(suffix.len());
    name.get(..end).unwrap_or("")
}

/// Remove `prefix` from the start and `suffix` from the end of `name`,
/// prefix first, then suffix on the prefix-stripped result.
///
/// Removal is by length only: whether the affix actually matches is the
/// caller's concern, and a name shorter than an affix strips to the
/// empty string. Never panics.
pub fn strip_affixes<'a>(name: &'a str, prefix: &str, suffix: &str) -> &'a str {
    strip_back(strip_front(name, prefix), suffix)
}
