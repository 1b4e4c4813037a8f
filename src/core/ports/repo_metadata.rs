//! Repository metadata port

use crate::core::models::RepoContext;

/// Supplies the commit, branch and repository of the current run
pub trait RepoMetadata {
    /// Describe the current checkout
    fn repo_context(&self) -> anyhow::Result<RepoContext>;
}

impl<T: RepoMetadata + ?Sized> RepoMetadata for &T {
    fn repo_context(&self) -> anyhow::Result<RepoContext> {
        (**self).repo_context()
    }
}
