//! Package metadata
//!
//! The subset of `package.json` the resolver cares about, plus the full
//! parsed document so it can be handed on untouched.

use serde_json::Value;

use crate::core::error::InvalidReason;

/// Validated metadata of the package being published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Package name (never empty)
    pub name: String,
    /// Marketplace publisher, if declared
    pub publisher: Option<String>,
    /// Declared version, if present and non-empty
    pub version: Option<String>,
    /// The whole parsed document
    pub document: Value,
}

impl PackageMetadata {
    /// Validate a parsed `package.json` document
    ///
    /// `"private": true` is rejected before anything else is looked at. A
    /// missing version is only an error on the default branch, which is
    /// checked at synthesis time.
    pub fn from_document(document: Value) -> Result<Self, InvalidReason> {
        if document.get("private") == Some(&Value::Bool(true)) {
            return Err(InvalidReason::Private);
        }

        let name = non_empty_str(&document, "name").ok_or(InvalidReason::MissingName)?;
        let version = non_empty_str(&document, "version");
        let publisher = non_empty_str(&document, "publisher");

        Ok(Self {
            name,
            publisher,
            version,
            document,
        })
    }
}

fn non_empty_str(document: &Value, key: &str) -> Option<String> {
    document
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
