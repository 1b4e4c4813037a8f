//! Release configuration
//!
//! The three knobs the resolver recognizes. The CLI fills them from flags,
//! then from the GitHub Actions `INPUT_*` variables, then from the defaults
//! below.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Branch treated as the stable release lane when none is configured
pub const DEFAULT_BRANCH: &str = "master";

/// Distribution tag for default-branch publishes when none is configured
pub const DEFAULT_RELEASE_TAG: &str = "latest";

/// Name of the package metadata file inside `dir`
pub const METADATA_FILE: &str = "package.json";

/// Environment variable for `dir`
pub const ENV_DIR: &str = "INPUT_DIR";
/// Environment variable for `default_branch`
pub const ENV_DEFAULT_BRANCH: &str = "INPUT_DEFAULT_BRANCH";
/// Environment variable for `release_tag`
pub const ENV_RELEASE_TAG: &str = "INPUT_RELEASE_TAG";
/// Environment variable for dry-run mode
pub const ENV_DRY_RUN: &str = "INPUT_DRY_RUN";

/// Options recognized by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseConfig {
    /// Branch treated as the stable release lane
    pub default_branch: String,
    /// Distribution tag used when publishing from the default branch
    pub release_tag: String,
    /// Directory containing `package.json`
    pub dir: PathBuf,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            default_branch: DEFAULT_BRANCH.to_string(),
            release_tag: DEFAULT_RELEASE_TAG.to_string(),
            dir: PathBuf::from("."),
        }
    }
}

impl ReleaseConfig {
    /// Use a different default branch
    #[must_use]
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Use a different release tag
    #[must_use]
    pub fn with_release_tag(mut self, tag: impl Into<String>) -> Self {
        self.release_tag = tag.into();
        self
    }

    /// Look for `package.json` in a different directory
    #[must_use]
    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }

    /// Path of the package metadata file
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(METADATA_FILE)
    }
}
