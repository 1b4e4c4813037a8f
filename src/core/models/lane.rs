//! Release lanes
//!
//! Every branch falls into exactly one lane, and the lane alone decides how
//! the version and distribution tag are derived.

/// Branch classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lane {
    /// The configured default branch - publishes the declared version
    Default,
    /// A `release-<version>` branch
    ReleaseCandidate {
        /// Version encoded in the branch name (may be empty)
        target_version: String,
    },
    /// Any other branch
    Canary,
}

impl Lane {
    /// Target version for release-candidate branches
    #[must_use]
    pub fn target_version(&self) -> Option<&str> {
        match self {
            Self::ReleaseCandidate { target_version } => Some(target_version),
            Self::Default | Self::Canary => None,
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::ReleaseCandidate { target_version } => {
                write!(f, "release-candidate ({target_version})")
            },
            Self::Canary => write!(f, "canary"),
        }
    }
}
