//! Repository hosting abstraction layer
//!
//! The decision engine only needs a read-only view of a repository's
//! published tag and release names. The [ReleaseHost] trait provides
//! that seam, with two implementations:
//!
//! - [client::GitHubClient]: the real GitHub REST API client
//! - [mock::MockHost]: a canned implementation for testing
//!
//! Most code should depend on the trait rather than a concrete
//! implementation.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockHost;

use crate::error::Result;

/// Read-only access to a repository's tag and release names.
///
/// Implementations must return fully materialized lists; callers never
/// see partial pages. All implementors are `Send + Sync` so a host can
/// be shared freely.
pub trait ReleaseHost: Send + Sync {
    /// All tag names, in the order the host reports them.
    fn list_tag_names(&self, owner: &str, repo: &str) -> Result<Vec<String>>;

    /// All release names, in the order the host reports them. A
    /// release may exist without a name.
    fn list_release_names(&self, owner: &str, repo: &str) -> Result<Vec<Option<String>>>;
}
