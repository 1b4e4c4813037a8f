//! Logging status sink
//!
//! Implements `StatusSink` by writing the status to the log. Posting it to
//! the forge is left to whatever consumes the CI output.

use crate::core::models::StatusDescriptor;
use crate::core::ports::StatusSink;

/// Reports commit statuses through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatusSink;

impl StatusSink for LogStatusSink {
    fn post(&self, sha: &str, status: &StatusDescriptor) -> anyhow::Result<()> {
        log::info!(
            "status for {sha}: [{}] {} - {}",
            status.context,
            status.state,
            status.description
        );
        if let Some(url) = &status.url {
            log::info!("  {url}");
        }
        Ok(())
    }
}
