//! Commit status descriptors
//!
//! Release-candidate branches report whether `package.json` already carries
//! the version the branch is named after.

use serde::Serialize;

/// Context label for the version status
pub const STATUS_CONTEXT: &str = "npm version";

/// Commit status state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// Declared version matches the branch
    Success,
    /// Declared version still needs to be bumped
    Pending,
    /// Check failed (never produced by the resolver)
    Failure,
    /// Check errored (never produced by the resolver)
    Error,
}

impl std::fmt::Display for StatusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Pending => write!(f, "pending"),
            Self::Failure => write!(f, "failure"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A commit status ready to be posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    /// Status context label
    pub context: String,
    /// Status state
    pub state: StatusState,
    /// Short human-readable description
    pub description: String,
    /// Link shown next to the status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
