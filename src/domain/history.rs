//! Acceptance of a proposed version against one list of historical
//! names (a repository's tags or its releases).

use std::cmp::Ordering;

use crate::domain::{affix, matcher};
use crate::error::{Result, VersionGateError};

/// Outcome of checking a target version against one history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCheck {
    /// No conflict: the history has no conforming names, or the target
    /// is strictly above the highest one.
    Accepted,
    /// The exact raw name is already present in the history.
    Duplicate { existing: String },
    /// The target does not exceed the highest conforming name.
    NotHigher { highest: String },
}

/// Evaluates a proposed version against historical names under one
/// affix convention.
pub struct HistoryEvaluator<'a> {
    prefix: &'a str,
    suffix: &'a str,
}

impl<'a> HistoryEvaluator<'a> {
    pub fn new(prefix: &'a str, suffix: &'a str) -> Self {
        HistoryEvaluator { prefix, suffix }
    }

    /// Check `target` against `names`; unnamed entries are dropped.
    ///
    /// A verbatim raw-name match is a duplicate regardless of ordering.
    /// A tie after affix stripping under a different raw name (say
    /// "v1.0.0" against "1.0.0") is an ordering failure, not a
    /// duplicate. Versions compare by semantic-version precedence:
    /// pre-releases sort below their release and build metadata does
    /// not participate.
    ///
    /// The target's own convention validity must have been confirmed
    /// upstream; an unparsable target is reported as a version error.
    pub fn evaluate<'n, I>(&self, target: &str, names: I) -> Result<HistoryCheck>
    where
        I: IntoIterator<Item = Option<&'n str>>,
    {
        let named: Vec<&str> = names.into_iter().flatten().collect();
        let conforming = matcher::filter(self.prefix, self.suffix, &named);

        if let Some(existing) = conforming.iter().find(|name| **name == target) {
            return Ok(HistoryCheck::Duplicate {
                existing: (*existing).to_string(),
            });
        }

        let target_core = affix::strip_affixes(target, self.prefix, self.suffix);
        let target_version = matcher::parse_loose(target_core).ok_or_else(|| {
            VersionGateError::version(format!(
                "cannot compare '{}': '{}' is not a semantic version",
                target, target_core
            ))
        })?;

        let highest = conforming
            .into_iter()
            .filter_map(|name| {
                let core = affix::strip_affixes(name, self.prefix, self.suffix);
                matcher::parse_loose(core).map(|version| (name, version))
            })
            .max_by(|(_, a), (_, b)| a.cmp_precedence(b));

        match highest {
            None => Ok(HistoryCheck::Accepted),
            Some((name, max)) => {
                if target_version.cmp_precedence(&max) == Ordering::Greater {
                    Ok(HistoryCheck::Accepted)
                } else {
                    Ok(HistoryCheck::NotHigher {
                        highest: name.to_string(),
                    })
                }
            }
        }
    }
}
