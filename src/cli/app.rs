//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use super::commands;
use vsce_publish::config::{
    DEFAULT_BRANCH, DEFAULT_RELEASE_TAG, ENV_DEFAULT_BRANCH, ENV_DIR, ENV_DRY_RUN,
    ENV_RELEASE_TAG, ReleaseConfig,
};
use vsce_publish::output::OutputMode;
use vsce_publish::PublishOptions;

/// vsce-publish - Publish editor extensions from CI
#[derive(Parser, Debug)]
#[command(
    name = "vsce-publish",
    version,
    about = "Publish editor extensions from CI",
    long_about = "Publish a VS Code extension with a version and tag derived from the branch.\n\n\
                  The default branch publishes the version in package.json.\n\
                  release-<version> branches publish <version>-rc.<sha> under \"next\".\n\
                  Any other branch publishes 0.0.0-<sha> under \"canary\"."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Resolve and log everything, but skip the status post and `vsce publish`
    #[arg(long, env = ENV_DRY_RUN)]
    pub dry_run: bool,

    /// Path to the directory that contains the package.json to publish
    #[arg(long, env = ENV_DIR, default_value = ".")]
    pub dir: PathBuf,

    /// Default branch to use for merge releases
    #[arg(
        long,
        env = ENV_DEFAULT_BRANCH,
        default_value = DEFAULT_BRANCH,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub default_branch: String,

    /// Tag to release the default branch with
    #[arg(
        long,
        env = ENV_RELEASE_TAG,
        default_value = DEFAULT_RELEASE_TAG,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub release_tag: String,

    /// Extra arguments passed to `vsce publish`
    #[arg(last = true)]
    pub extra_args: Vec<String>,
}

impl Cli {
    /// Build pipeline options from the parsed flags
    #[must_use]
    pub fn options(&self) -> PublishOptions {
        PublishOptions {
            config: ReleaseConfig::default()
                .with_default_branch(&self.default_branch)
                .with_release_tag(&self.release_tag)
                .with_dir(&self.dir),
            dry_run: self.dry_run,
            extra_args: self.extra_args.clone(),
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::publish(&cli.options(), output_mode)
}
