//! Commit status sink port

use crate::core::models::StatusDescriptor;

/// Receives commit statuses computed by the resolver
pub trait StatusSink {
    /// Attach `status` to commit `sha`
    fn post(&self, sha: &str, status: &StatusDescriptor) -> anyhow::Result<()>;
}

impl<T: StatusSink + ?Sized> StatusSink for &T {
    fn post(&self, sha: &str, status: &StatusDescriptor) -> anyhow::Result<()> {
        (**self).post(sha, status)
    }
}
