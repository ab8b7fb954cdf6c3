//! GitHub REST implementation of [ReleaseHost].

use log::debug;
use serde::Deserialize;

use crate::error::{Result, VersionGateError};
use crate::github::ReleaseHost;

const DEFAULT_API_URL: &str = "https://api.github.com";
const PER_PAGE: usize = 100;

#[derive(Debug, Deserialize)]
struct TagRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ReleaseRecord {
    name: Option<String>,
}

/// Blocking client for the GitHub REST API.
///
/// Honors `GITHUB_API_URL` so GitHub Enterprise hosts work unchanged.
/// Transport policy (timeouts, redirects) is whatever the `ureq` agent
/// defaults to; no retries are attempted here.
pub struct GitHubClient {
    agent: ureq::Agent,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client against `GITHUB_API_URL` or the public endpoint.
    pub fn new(token: Option<String>) -> Self {
        let api_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        GitHubClient::with_api_url(api_url, token)
    }

    /// Create a client against a specific API endpoint.
    pub fn with_api_url(api_url: impl Into<String>, token: Option<String>) -> Self {
        GitHubClient {
            agent: ureq::Agent::new_with_defaults(),
            api_url: api_url.into(),
            token,
        }
    }

    /// Fetch every page of a repository listing endpoint, 100 records
    /// at a time, until a short page marks the end.
    fn paginate<T: serde::de::DeserializeOwned>(
        &self,
        owner: &str,
        repo: &str,
        resource: &str,
    ) -> Result<Vec<T>> {
        let url = format!("{}/repos/{}/{}/{}", self.api_url, owner, repo, resource);
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let mut request = self
                .agent
                .get(&url)
                .query("per_page", &PER_PAGE.to_string())
                .query("page", &page.to_string())
                .header("Accept", "application/vnd.github+json")
                .header(
                    "User-Agent",
                    concat!("version-gate/", env!("CARGO_PKG_VERSION")),
                );
            if let Some(token) = &self.token {
                request = request.header("Authorization", &format!("Bearer {}", token));
            }

            let mut response = request.call()?;
            let batch: Vec<T> = response.body_mut().read_json().map_err(|e| {
                VersionGateError::api(format!("unexpected response from {}: {}", url, e))
            })?;

            let fetched = batch.len();
            records.extend(batch);
            if fetched < PER_PAGE {
                return Ok(records);
            }
            page += 1;
        }
    }
}

impl ReleaseHost for GitHubClient {
    fn list_tag_names(&self, owner: &str, repo: &str) -> Result<Vec<String>> {
        debug!("listing tags for {}/{}", owner, repo);
        let tags: Vec<TagRecord> = self.paginate(owner, repo, "tags")?;
        debug!("found {} tags", tags.len());
        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }

    fn list_release_names(&self, owner: &str, repo: &str) -> Result<Vec<Option<String>>> {
        debug!("listing releases for {}/{}", owner, repo);
        let releases: Vec<ReleaseRecord> = self.paginate(owner, repo, "releases")?;
        debug!("found {} releases", releases.len());
        Ok(releases.into_iter().map(|release| release.name).collect())
    }
}
