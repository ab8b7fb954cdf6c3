//! Three-gate acceptance decision for a proposed version.
//!
//! Gates run in a fixed order and stop at the first failure: the
//! version's own naming convention, then tag history, then release
//! history. Release history is never consulted once the tag gate has
//! failed; each history is fetched inside the gate that needs it, so a
//! failing path performs at most one fetch.

use log::debug;

use crate::config::{Inputs, RepoId};
use crate::domain::history::{HistoryCheck, HistoryEvaluator};
use crate::domain::matcher;
use crate::error::{Result, VersionGateError};
use crate::github::ReleaseHost;

/// Final decision for one evaluation. Terminal - never revised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    fn accepted() -> Self {
        Verdict {
            valid: true,
            message: "version is valid".to_string(),
        }
    }

    fn rejected(message: String) -> Self {
        Verdict {
            valid: false,
            message,
        }
    }
}

/// One sequential accept/reject stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    SelfValidity,
    Tags,
    Releases,
}

/// Gate order is part of the contract: a tag failure must keep the
/// release gate from ever running.
const GATE_SEQUENCE: [Gate; 3] = [Gate::SelfValidity, Gate::Tags, Gate::Releases];

/// Runs the gate sequence for one set of inputs against a host.
pub struct DecisionEngine<'a, H: ReleaseHost> {
    inputs: &'a Inputs,
    host: &'a H,
}

impl<'a, H: ReleaseHost> DecisionEngine<'a, H> {
    pub fn new(inputs: &'a Inputs, host: &'a H) -> Self {
        DecisionEngine { inputs, host }
    }

    /// Evaluate every requested gate in order, stopping at the first
    /// rejection. Only gate rejections produce an invalid verdict;
    /// fetch and configuration problems abort with an error and no
    /// verdict at all.
    pub fn evaluate(&self) -> Result<Verdict> {
        for gate in GATE_SEQUENCE {
            if !self.enabled(gate) {
                continue;
            }
            debug!("running {:?} gate", gate);
            if let Some(message) = self.run(gate)? {
                return Ok(Verdict::rejected(message));
            }
        }
        Ok(Verdict::accepted())
    }

    fn enabled(&self, gate: Gate) -> bool {
        match gate {
            Gate::SelfValidity => true,
            Gate::Tags => self.inputs.check_tags,
            Gate::Releases => self.inputs.check_releases,
        }
    }

    /// Run one gate; `Some(message)` is a rejection.
    fn run(&self, gate: Gate) -> Result<Option<String>> {
        match gate {
            Gate::SelfValidity => Ok(self.check_self_validity()),
            Gate::Tags => {
                let repo = self.repository()?;
                let tags = self.host.list_tag_names(&repo.owner, &repo.repo)?;
                self.check_history("tag", tags.iter().map(|name| Some(name.as_str())))
            }
            Gate::Releases => {
                let repo = self.repository()?;
                let releases = self.host.list_release_names(&repo.owner, &repo.repo)?;
                self.check_history("release", releases.iter().map(|name| name.as_deref()))
            }
        }
    }

    fn repository(&self) -> Result<&RepoId> {
        self.inputs.repository.as_ref().ok_or_else(|| {
            VersionGateError::config("repository is required when checking tags or releases")
        })
    }

    /// Gate 0: the proposed version must itself be in convention. The
    /// rejection message names the first missing piece, checked in
    /// order: prefix, then suffix, then the semantic version itself.
    fn check_self_validity(&self) -> Option<String> {
        let version = self.inputs.version.as_str();
        let prefix = self.inputs.prefix.as_str();
        let suffix = self.inputs.suffix.as_str();

        if matcher::is_valid(prefix, suffix, Some(version)) {
            return None;
        }
        if !prefix.is_empty() && !version.starts_with(prefix) {
            return Some(format!(
                "version '{}' is missing required prefix '{}'",
                version, prefix
            ));
        }
        if !suffix.is_empty() && !version.ends_with(suffix) {
            return Some(format!(
                "version '{}' is missing required suffix '{}'",
                version, suffix
            ));
        }
        Some(format!("'{}' is not a valid semantic version", version))
    }

    fn check_history<'n, I>(&self, noun: &str, names: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = Option<&'n str>>,
    {
        let evaluator = HistoryEvaluator::new(&self.inputs.prefix, &self.inputs.suffix);
        match evaluator.evaluate(&self.inputs.version, names)? {
            HistoryCheck::Accepted => Ok(None),
            HistoryCheck::Duplicate { existing } => {
                Ok(Some(format!("{} '{}' already exists", noun, existing)))
            }
            HistoryCheck::NotHigher { highest } => Ok(Some(format!(
                "version '{}' is not higher than existing {} '{}'",
                self.inputs.version, noun, highest
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::MockHost;

    fn inputs(version: &str, prefix: &str, suffix: &str) -> Inputs {
        Inputs {
            version: version.to_string(),
            token: Some("x-access-token".to_string()),
            repository: Some(RepoId {
                owner: "octo".to_string(),
                repo: "sandbox".to_string(),
            }),
            check_tags: false,
            check_releases: false,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn test_valid_version_no_checks() {
        let inputs = inputs("0.1.234", "", "");
        let host = MockHost::new();
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(verdict.valid);
        assert_eq!(verdict.message, "version is valid");
        assert_eq!(host.tag_calls(), 0);
        assert_eq!(host.release_calls(), 0);
    }

    #[test]
    fn test_invalid_semver_rejected_at_gate_zero() {
        let inputs = inputs("a.b.c", "", "");
        let host = MockHost::new();
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert!(verdict.message.contains("not a valid"));
    }

    #[test]
    fn test_missing_prefix_message() {
        let inputs = inputs("1.2.3", "cli-", "");
        let host = MockHost::new();
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert!(verdict.message.contains("missing required prefix 'cli-'"));
    }

    #[test]
    fn test_missing_suffix_message() {
        let inputs = inputs("cli-1.2.3", "cli-", "-rc");
        let host = MockHost::new();
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert!(verdict.message.contains("missing required suffix '-rc'"));
    }

    #[test]
    fn test_prefix_checked_before_suffix() {
        let inputs = inputs("1.2.3", "cli-", "-rc");
        let host = MockHost::new();
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(verdict.message.contains("missing required prefix"));
    }

    #[test]
    fn test_tag_gate_not_higher() {
        let mut inputs = inputs("0.10.0", "", "");
        inputs.check_tags = true;
        let host = MockHost::new().with_tags(&["0.10.1"]);
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert!(verdict.message.contains("not higher than existing tag"));
    }

    #[test]
    fn test_tag_gate_duplicate() {
        let mut inputs = inputs("cli-0.1.2", "cli-", "");
        inputs.check_tags = true;
        let host = MockHost::new().with_tags(&["cli-0.1.2"]);
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert_eq!(verdict.message, "tag 'cli-0.1.2' already exists");
    }

    #[test]
    fn test_tag_failure_skips_release_gate() {
        let mut inputs = inputs("0.10.0", "", "");
        inputs.check_tags = true;
        inputs.check_releases = true;
        let host = MockHost::new()
            .with_tags(&["0.10.1"])
            .with_releases(&[Some("0.10.1")]);
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert_eq!(host.tag_calls(), 1);
        assert_eq!(host.release_calls(), 0);
    }

    #[test]
    fn test_release_gate_runs_after_tags_pass() {
        let mut inputs = inputs("0.2.0", "", "");
        inputs.check_tags = true;
        inputs.check_releases = true;
        let host = MockHost::new()
            .with_tags(&["0.1.0"])
            .with_releases(&[Some("0.2.0")]);
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert_eq!(verdict.message, "release '0.2.0' already exists");
        assert_eq!(host.tag_calls(), 1);
        assert_eq!(host.release_calls(), 1);
    }

    #[test]
    fn test_release_gate_alone() {
        let mut inputs = inputs("1.0.0", "", "");
        inputs.check_releases = true;
        let host = MockHost::new().with_releases(&[Some("0.9.0"), None]);
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(verdict.valid);
        assert_eq!(host.tag_calls(), 0);
        assert_eq!(host.release_calls(), 1);
    }

    #[test]
    fn test_gate_zero_failure_fetches_nothing() {
        let mut inputs = inputs("bogus", "", "");
        inputs.check_tags = true;
        inputs.check_releases = true;
        let host = MockHost::new().with_tags(&["0.1.0"]);
        let verdict = DecisionEngine::new(&inputs, &host).evaluate().unwrap();
        assert!(!verdict.valid);
        assert_eq!(host.tag_calls(), 0);
        assert_eq!(host.release_calls(), 0);
    }

    #[test]
    fn test_fetch_error_aborts_without_verdict() {
        let mut inputs = inputs("1.0.0", "", "");
        inputs.check_tags = true;
        let host = MockHost::new().failing_tags();
        let result = DecisionEngine::new(&inputs, &host).evaluate();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_repository_is_a_config_error() {
        let mut inputs = inputs("1.0.0", "", "");
        inputs.check_tags = true;
        inputs.repository = None;
        let host = MockHost::new();
        let result = DecisionEngine::new(&inputs, &host).evaluate();
        assert!(result.is_err());
    }
}
