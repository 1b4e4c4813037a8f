//! Git integration adapter
//!
//! Implements `RepoMetadata`. GitHub Actions variables win when present;
//! anything they leave out is read from the local repository with `git2`.

use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::Context;
use git2::Repository;
use regex::Regex;

use crate::core::models::RepoContext;
use crate::core::ports::RepoMetadata;

/// Environment variable holding the commit SHA
pub const ENV_SHA: &str = "GITHUB_SHA";
/// Environment variable holding the full ref
pub const ENV_REF: &str = "GITHUB_REF";
/// Environment variable holding `owner/name`
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";

static REMOTE_REPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[:/]([^/:]+/[^/:]+?)(?:\.git)?/?$").expect("remote url pattern is valid")
});

/// Repository metadata provided by the CI environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnv {
    /// Commit SHA
    pub sha: Option<String>,
    /// Full ref, e.g. `refs/heads/main`
    pub git_ref: Option<String>,
    /// Repository identifier
    pub repository: Option<String>,
}

impl CiEnv {
    /// Read the GitHub Actions variables, ignoring empty ones
    #[must_use]
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        Self {
            sha: var(ENV_SHA),
            git_ref: var(ENV_REF),
            repository: var(ENV_REPOSITORY),
        }
    }

    /// Branch name with any `refs/heads/` prefix removed
    #[must_use]
    pub fn branch(&self) -> Option<String> {
        self.git_ref
            .as_deref()
            .map(|r| r.strip_prefix("refs/heads/").unwrap_or(r).to_string())
            .filter(|b| !b.is_empty())
    }
}

/// Git-backed repository metadata provider
#[derive(Debug, Clone)]
pub struct GitRepoMetadata {
    /// Directory to discover the repository from
    workdir: PathBuf,
    /// CI overrides
    env: CiEnv,
}

impl GitRepoMetadata {
    /// Create a provider for `workdir` with explicit CI overrides
    #[must_use]
    pub const fn new(workdir: PathBuf, env: CiEnv) -> Self {
        Self { workdir, env }
    }

    /// Create a provider for the current directory using the process environment
    pub fn current_dir() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, CiEnv::from_env()))
    }

    fn open(&self) -> anyhow::Result<Repository> {
        Repository::discover(&self.workdir)
            .with_context(|| format!("not a git repository: {}", self.workdir.display()))
    }
}

impl RepoMetadata for GitRepoMetadata {
    fn repo_context(&self) -> anyhow::Result<RepoContext> {
        let env_branch = self.env.branch();
        if let (Some(sha), Some(branch), Some(repo)) =
            (&self.env.sha, &env_branch, &self.env.repository)
        {
            return Ok(RepoContext::new(sha, branch, repo));
        }

        // Only needed for whatever the environment leaves out
        let local = self.open();
        let repo = local.as_ref().ok();

        let sha = match &self.env.sha {
            Some(sha) => sha.clone(),
            None => head_sha(open_or_bail(&local)?)
                .context("unable to determine the current commit")?,
        };

        let branch = match env_branch {
            Some(branch) => branch,
            None => head_branch(open_or_bail(&local)?)
                .context("unable to determine the current branch (detached HEAD?)")?,
        };

        let repo_identifier = self
            .env
            .repository
            .clone()
            .or_else(|| repo.and_then(origin_identifier));
        let repo_identifier = repo_identifier.unwrap_or_else(|| {
            log::warn!("unable to determine the repository identifier; status links will be incomplete");
            String::new()
        });

        Ok(RepoContext::new(sha, branch, repo_identifier))
    }
}

fn open_or_bail(local: &anyhow::Result<Repository>) -> anyhow::Result<&Repository> {
    local.as_ref().map_err(|e| anyhow::anyhow!("{e:#}"))
}

fn head_sha(repo: &Repository) -> Option<String> {
    let head = repo.head().ok()?;
    head.peel_to_commit().ok().map(|c| c.id().to_string())
}

fn head_branch(repo: &Repository) -> Option<String> {
    let head = repo.head().ok()?;
    if !head.is_branch() {
        return None;
    }
    head.shorthand().map(String::from)
}

fn origin_identifier(repo: &Repository) -> Option<String> {
    let remote = repo.find_remote("origin").ok()?;
    remote.url().and_then(parse_repo_identifier)
}

/// Extract `owner/name` from a remote URL
///
/// Handles `https://host/owner/name(.git)` and `git@host:owner/name(.git)`.
#[must_use]
pub fn parse_repo_identifier(url: &str) -> Option<String> {
    REMOTE_REPO.captures(url.trim()).map(|caps| caps[1].to_string())
}
