//! Package metadata loading

use std::path::Path;

use crate::core::error::ResolveError;
use crate::core::models::PackageMetadata;
use crate::core::ports::JsonReader;

/// Load and validate the `package.json` at `path`
pub fn load_metadata(reader: &dyn JsonReader, path: &Path) -> Result<PackageMetadata, ResolveError> {
    let document = reader
        .read_json(path)
        .ok_or_else(|| ResolveError::MetadataMissing(path.to_path_buf()))?;

    Ok(PackageMetadata::from_document(document)?)
}
