//! Name convention matching: does a raw name carry the required
//! affixes around a valid semantic version?

use semver::Version;

use crate::domain::affix;

/// Parse a semantic version, tolerating a single leading 'v' or 'V'.
///
/// Parsing proper is delegated to the `semver` crate; this only peels
/// the conventional tag prefix (so "v1.2.3" parses, "vv1.2.3" does not).
pub fn parse_loose(s: &str) -> Option<Version> {
    let bare = s
        .strip_prefix('v')
        .or_else(|| s.strip_prefix('V'))
        .unwrap_or(s);
    Version::parse(bare).ok()
}

/// Whether `name` conforms to the prefix/suffix convention and carries
/// a valid semantic version between the affixes.
///
/// An absent name never conforms. A non-empty `prefix` must start the
/// name, a non-empty `suffix` must end it, and what remains after
/// stripping both must be a non-empty valid semantic version.
pub fn is_valid(prefix: &str, suffix: &str, name: Option<&str>) -> bool {
    let Some(name) = name else {
        return false;
    };
    if !prefix.is_empty() && !name.starts_with(prefix) {
        return false;
    }
    if !suffix.is_empty() && !name.ends_with(suffix) {
        return false;
    }
    let core = affix::strip_affixes(name, prefix, suffix);
    if core.is_empty() {
        return false;
    }
    parse_loose(core).is_some()
}

/// Keep the names that conform to the convention, preserving order.
pub fn filter<'a>(prefix: &str, suffix: &str, names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| is_valid(prefix, suffix, Some(name)))
        .collect()
}
