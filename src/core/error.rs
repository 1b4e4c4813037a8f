//! Resolution errors
//!
//! The resolver fails in exactly two ways, both caused by the package
//! metadata. Branch classification is total and never errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a publish context
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// `package.json` is absent or could not be parsed
    #[error("unable to read package.json at {}", .0.display())]
    MetadataMissing(PathBuf),

    /// `package.json` was read but must not be published
    #[error("invalid package.json: {0}")]
    MetadataInvalid(InvalidReason),
}

/// Why a readable `package.json` was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// `"private": true` is set
    #[error("\"private\" is true; bailing")]
    Private,
    /// `name` is absent, empty, or not a string
    #[error("missing a \"name\" field")]
    MissingName,
    /// `version` is absent, empty, or not a string on the default branch
    #[error("missing a \"version\" field, required when publishing from the default branch")]
    MissingVersion,
}

impl From<InvalidReason> for ResolveError {
    fn from(reason: InvalidReason) -> Self {
        Self::MetadataInvalid(reason)
    }
}
