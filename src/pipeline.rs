//! Publish pipeline
//!
//! A short linear sequence over the port traits:
//!
//! 1. install the publish tool
//! 2. resolve the publish context
//! 3. post the version status, if the branch produced one
//! 4. run the publish tool
//!
//! Nothing is retried. The tool is always installed; dry-run mode only skips
//! posting the status and running the publish tool.

use anyhow::Context;
use serde::Serialize;

use crate::config::ReleaseConfig;
use crate::core::ports::{
    Invocation, JsonReader, ProcessRunner, RepoMetadata, StatusSink, redact_args,
};
use crate::core::services::Resolver;
use crate::output::PublishReport;

/// The publish tool
pub const PUBLISH_TOOL: &str = "vsce";

/// Options for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishOptions {
    /// Resolver configuration
    #[serde(flatten)]
    pub config: ReleaseConfig,
    /// Skip the status post and `vsce publish`
    pub dry_run: bool,
    /// Extra arguments forwarded to `vsce publish`
    pub extra_args: Vec<String>,
}

impl PublishOptions {
    /// Copy with credentials in `extra_args` masked
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            extra_args: redact_args(&self.extra_args),
            ..self.clone()
        }
    }
}

/// Command that installs the publish tool
#[must_use]
pub fn install_invocation() -> Invocation {
    Invocation::new("npm", ["i", "-g", PUBLISH_TOOL])
}

/// Command that publishes the package in `options.config.dir`
#[must_use]
pub fn publish_invocation(options: &PublishOptions) -> Invocation {
    let args = std::iter::once("publish".to_string()).chain(options.extra_args.iter().cloned());
    Invocation::new(PUBLISH_TOOL, args).in_dir(&options.config.dir)
}

/// Runs the publish pipeline against a set of collaborators
#[derive(Debug)]
pub struct Publisher<J, M, P, S> {
    resolver: Resolver<J>,
    repo: M,
    runner: P,
    sink: S,
}

impl<J, M, P, S> Publisher<J, M, P, S>
where
    J: JsonReader,
    M: RepoMetadata,
    P: ProcessRunner,
    S: StatusSink,
{
    /// Create a publisher
    #[must_use]
    pub const fn new(reader: J, repo: M, runner: P, sink: S) -> Self {
        Self {
            resolver: Resolver::new(reader),
            repo,
            runner,
            sink,
        }
    }

    /// Run the pipeline
    pub fn run(&self, options: &PublishOptions) -> anyhow::Result<PublishReport> {
        log::info!(
            "options: {}",
            serde_json::to_string_pretty(&options.redacted()).unwrap_or_default()
        );

        let mut commands = Vec::new();

        let install = install_invocation();
        log::info!("running: {install}");
        self.runner
            .run(&install)
            .with_context(|| format!("failed to install {PUBLISH_TOOL}"))?;
        commands.push(install);

        let repo = self.repo.repo_context()?;
        log::debug!("repository: {} @ {} ({})", repo.branch, repo.sha, repo.repo_identifier);

        let context = self.resolver.resolve(&options.config, &repo)?;
        log::debug!("lane: {}", context.lane);
        log::info!("resolved {}@{} with tag {}", context.name, context.version, context.tag);

        if let Some(status) = &context.status {
            if options.dry_run {
                log::info!("[dry run] would post status {}: {}", status.state, status.description);
            } else {
                self.sink.post(&repo.sha, status).context("failed to post version status")?;
            }
        }

        let publish = publish_invocation(options);
        self.execute(&publish, options.dry_run)?;
        commands.push(publish.redacted());

        Ok(PublishReport {
            dry_run: options.dry_run,
            context,
            commands,
        })
    }

    fn execute(&self, invocation: &Invocation, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            log::info!("[dry run] would run: {invocation}");
            return Ok(());
        }
        log::info!("running: {invocation}");
        self.runner.run(invocation)
    }
}
