//! Resolve the publish context and run `vsce publish`

use vsce_publish::adapters::{FsJsonReader, GitRepoMetadata, LogStatusSink, SystemProcessRunner};
use vsce_publish::output::OutputMode;
use vsce_publish::{PublishOptions, Publisher};

/// Publish the package in the current repository
pub fn publish(options: &PublishOptions, mode: OutputMode) -> anyhow::Result<()> {
    let repo = GitRepoMetadata::current_dir()?;
    let publisher = Publisher::new(FsJsonReader, repo, SystemProcessRunner, LogStatusSink);

    let report = publisher.run(options)?;
    report.render(mode);
    Ok(())
}
