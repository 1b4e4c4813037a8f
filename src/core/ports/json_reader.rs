//! JSON file reader port

use std::path::Path;

use serde_json::Value;

/// Loads and parses JSON documents
pub trait JsonReader {
    /// Read and parse the file at `path`
    ///
    /// Returns `None` when the file is missing, unreadable, or not valid JSON.
    fn read_json(&self, path: &Path) -> Option<Value>;
}

impl<T: JsonReader + ?Sized> JsonReader for &T {
    fn read_json(&self, path: &Path) -> Option<Value> {
        (**self).read_json(path)
    }
}
