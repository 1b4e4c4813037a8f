//! Filesystem JSON reader
//!
//! Implements `JsonReader` on top of `std::fs`.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::ports::JsonReader;

/// Reads JSON documents from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsJsonReader;

impl JsonReader for FsJsonReader {
    fn read_json(&self, path: &Path) -> Option<Value> {
        let content = fs::read_to_string(path)
            .inspect_err(|e| log::debug!("cannot read {}: {e}", path.display()))
            .ok()?;

        serde_json::from_str(&content)
            .inspect_err(|e| log::debug!("cannot parse {}: {e}", path.display()))
            .ok()
    }
}
