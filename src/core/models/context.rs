//! Resolved publish context

use serde::Serialize;
use serde_json::Value;

use super::{Lane, StatusDescriptor};

/// Everything the publish step needs to know
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedContext {
    /// Package name
    pub name: String,
    /// Marketplace publisher
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Version to publish
    pub version: String,
    /// Distribution tag to publish under
    pub tag: String,
    /// The package document, passed through unchanged
    #[serde(rename = "packageJson")]
    pub package_json: Value,
    /// Version status, only for release-candidate branches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDescriptor>,
    /// Lane the branch was classified into
    #[serde(skip)]
    pub lane: Lane,
}
