//! Mock host for testing without network access.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Result, VersionGateError};
use crate::github::ReleaseHost;

/// Mock [ReleaseHost] serving canned tag and release lists.
///
/// Records how often each listing was invoked, so tests can assert
/// that a gate never reached the network.
#[derive(Default)]
pub struct MockHost {
    tags: Vec<String>,
    releases: Vec<Option<String>>,
    fail_tags: bool,
    fail_releases: bool,
    tag_calls: AtomicUsize,
    release_calls: AtomicUsize,
}

impl MockHost {
    /// Create a mock host with empty histories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these tag names.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    /// Serve these release names; `None` entries are unnamed releases.
    pub fn with_releases(mut self, releases: &[Option<&str>]) -> Self {
        self.releases = releases.iter().map(|name| name.map(str::to_string)).collect();
        self
    }

    /// Make tag listing fail with an API error.
    pub fn failing_tags(mut self) -> Self {
        self.fail_tags = true;
        self
    }

    /// Make release listing fail with an API error.
    pub fn failing_releases(mut self) -> Self {
        self.fail_releases = true;
        self
    }

    /// Number of times tag listing was invoked.
    pub fn tag_calls(&self) -> usize {
        self.tag_calls.load(Ordering::SeqCst)
    }

    /// Number of times release listing was invoked.
    pub fn release_calls(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }
}

impl ReleaseHost for MockHost {
    fn list_tag_names(&self, _owner: &str, _repo: &str) -> Result<Vec<String>> {
        self.tag_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_tags {
            return Err(VersionGateError::api("mock tag listing failure"));
        }
        Ok(self.tags.clone())
    }

    fn list_release_names(&self, _owner: &str, _repo: &str) -> Result<Vec<Option<String>>> {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_releases {
            return Err(VersionGateError::api("mock release listing failure"));
        }
        Ok(self.releases.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_host_serves_tags() {
        let host = MockHost::new().with_tags(&["v1.0.0", "v2.0.0"]);
        let tags = host.list_tag_names("octo", "sandbox").unwrap();
        assert_eq!(tags, vec!["v1.0.0".to_string(), "v2.0.0".to_string()]);
        assert_eq!(host.tag_calls(), 1);
    }

    #[test]
    fn test_mock_host_serves_releases_with_unnamed() {
        let host = MockHost::new().with_releases(&[Some("v1.0.0"), None]);
        let releases = host.list_release_names("octo", "sandbox").unwrap();
        assert_eq!(releases, vec![Some("v1.0.0".to_string()), None]);
        assert_eq!(host.release_calls(), 1);
    }

    #[test]
    fn test_mock_host_counts_calls() {
        let host = MockHost::new();
        host.list_tag_names("octo", "sandbox").unwrap();
        host.list_tag_names("octo", "sandbox").unwrap();
        assert_eq!(host.tag_calls(), 2);
        assert_eq!(host.release_calls(), 0);
    }

    #[test]
    fn test_mock_host_failures() {
        let host = MockHost::new().failing_tags();
        assert!(host.list_tag_names("octo", "sandbox").is_err());

        let host = MockHost::new().failing_releases();
        assert!(host.list_release_names("octo", "sandbox").is_err());
    }

    #[test]
    fn test_mock_host_default_is_empty() {
        let host = MockHost::default();
        assert!(host.list_tag_names("octo", "sandbox").unwrap().is_empty());
        assert!(host
            .list_release_names("octo", "sandbox")
            .unwrap()
            .is_empty());
    }
}
