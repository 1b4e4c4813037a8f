//! Context resolution
//!
//! Glues the loader, classifier, synthesizer and reporter together. Apart
//! from the one `package.json` read this is a pure function of its inputs.

use crate::config::ReleaseConfig;
use crate::core::error::ResolveError;
use crate::core::models::{RepoContext, ResolvedContext};
use crate::core::ports::JsonReader;

use super::{classify, load_metadata, report, short_sha, synthesize};

/// Resolves publish contexts against a metadata source
#[derive(Debug, Clone, Copy)]
pub struct Resolver<R> {
    reader: R,
}

impl<R: JsonReader> Resolver<R> {
    /// Create a resolver reading metadata through `reader`
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Resolve the publish context for `repo` under `config`
    pub fn resolve(
        &self,
        config: &ReleaseConfig,
        repo: &RepoContext,
    ) -> Result<ResolvedContext, ResolveError> {
        let metadata = load_metadata(&self.reader, &config.metadata_path())?;
        let lane = classify(&repo.branch, &config.default_branch);
        let (version, tag) =
            synthesize(&lane, &metadata, short_sha(&repo.sha), &config.release_tag)?;
        let status = report(&lane, &metadata, repo);

        Ok(ResolvedContext {
            name: metadata.name,
            publisher: metadata.publisher,
            version,
            tag,
            package_json: metadata.document,
            status,
            lane,
        })
    }
}
