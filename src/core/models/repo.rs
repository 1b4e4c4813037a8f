//! Repository context for a single CI run

use serde::Serialize;

/// Commit, branch and repository the publish is running for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoContext {
    /// Full commit hash
    pub sha: String,
    /// Short branch name (no `refs/heads/` prefix)
    pub branch: String,
    /// Repository identifier, e.g. `owner/name`
    pub repo_identifier: String,
}

impl RepoContext {
    /// Create a new repository context
    #[must_use]
    pub fn new(
        sha: impl Into<String>,
        branch: impl Into<String>,
        repo_identifier: impl Into<String>,
    ) -> Self {
        Self {
            sha: sha.into(),
            branch: branch.into(),
            repo_identifier: repo_identifier.into(),
        }
    }
}
