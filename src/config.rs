use std::env;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VersionGateError};

/// Repository coordinates in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    /// Parse an explicitly supplied `owner/repo` value.
    pub fn parse(value: &str) -> Result<Self> {
        let shape = regex::Regex::new(r"^\w+/\w+$")
            .map_err(|e| VersionGateError::config(format!("internal pattern error: {}", e)))?;
        if !shape.is_match(value) {
            return Err(VersionGateError::config(
                "repository must be in the form owner/repo",
            ));
        }
        match value.split_once('/') {
            Some((owner, repo)) => Ok(RepoId {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            None => Err(VersionGateError::config(
                "repository must be in the form owner/repo",
            )),
        }
    }

    /// Split the ambient `GITHUB_REPOSITORY` value. The runtime owns
    /// its shape, so this only checks for the two halves.
    fn from_ambient(value: &str) -> Result<Self> {
        match value.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok(RepoId {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(VersionGateError::config(format!(
                "GITHUB_REPOSITORY is malformed: '{}'",
                value
            ))),
        }
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Defaults loaded from an optional `versiongate.toml`.
///
/// Every field may be overridden by an `INPUT_*` variable or a CLI
/// flag; the file only supplies repository-local defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub suffix: Option<String>,

    #[serde(default)]
    pub check_tags: Option<bool>,

    #[serde(default)]
    pub check_releases: Option<bool>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versiongate.toml` in current directory
/// 3. `.versiongate.toml` in the user config directory
/// 4. Default (empty) configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./versiongate.toml").exists() {
        fs::read_to_string("./versiongate.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".versiongate.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| VersionGateError::config(format!("cannot parse configuration: {}", e)))
}

/// Values supplied on the command line. Everything is optional and
/// falls back to `INPUT_*` variables, then the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub version: Option<String>,
    pub repository: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub check_tags: bool,
    pub check_releases: bool,
}

/// Fully resolved, validated inputs for one evaluation. Immutable for
/// the duration of the run.
#[derive(Debug, Clone)]
pub struct Inputs {
    /// The version (or full tag name) to validate
    pub version: String,

    /// API token; present whenever tag or release checks are requested
    pub token: Option<String>,

    /// Repository to check; required only when checks are requested
    pub repository: Option<RepoId>,

    /// Whether to check the repository's tags
    pub check_tags: bool,

    /// Whether to check the repository's releases
    pub check_releases: bool,

    /// Literal prefix every conforming name must carry (may be empty)
    pub prefix: String,

    /// Literal suffix every conforming name must carry (may be empty)
    pub suffix: String,
}

/// Read a GitHub-Actions-style input variable (`INPUT_<NAME>`).
/// Empty values count as unset, as they do under the Actions runtime.
fn action_input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.to_uppercase());
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

/// Parse a boolean input variable: "true" or "false", case-insensitive.
fn boolean_input(name: &str) -> Result<Option<bool>> {
    let Some(raw) = action_input(name) else {
        return Ok(None);
    };
    if raw.eq_ignore_ascii_case("true") {
        Ok(Some(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(Some(false))
    } else {
        Err(VersionGateError::config(format!(
            "input '{}' must be 'true' or 'false', got '{}'",
            name, raw
        )))
    }
}

fn nonempty_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Resolve the effective inputs from CLI overrides, the environment,
/// and the config file, then validate them.
///
/// Precedence per field: CLI flag, then `INPUT_*` variable, then the
/// config file, then the default. The token is environment-only
/// (`INPUT_TOKEN`, then `GITHUB_TOKEN`) and is required as soon as tag
/// or release checks are requested, as is a resolvable repository.
pub fn resolve_inputs(overrides: &Overrides, file: &FileConfig) -> Result<Inputs> {
    let version = overrides
        .version
        .clone()
        .or_else(|| action_input("version"))
        .unwrap_or_default();
    if version.trim().is_empty() {
        return Err(VersionGateError::config("version is required"));
    }

    let check_tags =
        overrides.check_tags || boolean_input("check_tags")?.or(file.check_tags).unwrap_or(false);
    let check_releases = overrides.check_releases
        || boolean_input("check_releases")?
            .or(file.check_releases)
            .unwrap_or(false);

    let token = action_input("token").or_else(|| nonempty_env("GITHUB_TOKEN"));
    if (check_tags || check_releases) && token.is_none() {
        return Err(VersionGateError::config(
            "token is required when checking tags or releases",
        ));
    }
    if let Some(token) = &token {
        let tail = token.len().saturating_sub(4);
        if let Some(last) = token.get(tail..) {
            debug!("using token ending in ...{}", last);
        }
    }

    let repository = match overrides
        .repository
        .clone()
        .or_else(|| action_input("repository"))
        .or_else(|| file.repository.clone())
    {
        Some(value) => Some(RepoId::parse(&value)?),
        None => match nonempty_env("GITHUB_REPOSITORY") {
            Some(value) => Some(RepoId::from_ambient(&value)?),
            None => None,
        },
    };
    if (check_tags || check_releases) && repository.is_none() {
        return Err(VersionGateError::config(
            "repository is required when checking tags or releases",
        ));
    }

    let prefix = overrides
        .prefix
        .clone()
        .or_else(|| action_input("prefix"))
        .or_else(|| file.prefix.clone())
        .unwrap_or_default();
    let suffix = overrides
        .suffix
        .clone()
        .or_else(|| action_input("suffix"))
        .or_else(|| file.suffix.clone())
        .unwrap_or_default();

    Ok(Inputs {
        version,
        token,
        repository,
        check_tags,
        check_releases,
        prefix,
        suffix,
    })
}
