//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ResolvedContext, StatusState};
use crate::core::ports::Invocation;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a publish run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// The resolved context
    pub context: ResolvedContext,
    /// Commands that were run, or would have been in a dry run
    pub commands: Vec<Invocation>,
}

impl PublishReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable summary
    #[must_use]
    pub fn to_human(&self) -> String {
        let ctx = &self.context;
        let mut out = String::new();

        if self.dry_run {
            out.push_str(&format!("{}\n\n", "dry run complete".yellow().bold()));
        } else {
            out.push_str(&format!("{}\n\n", "published!".green().bold()));
        }

        out.push_str(&format!("  package: {}\n", ctx.name));
        if let Some(publisher) = &ctx.publisher {
            out.push_str(&format!("  publisher: {publisher}\n"));
        }
        out.push_str(&format!("  version: {}\n", ctx.version.bold()));
        out.push_str(&format!("  tag:     {}\n", ctx.tag.bold()));

        if let Some(status) = &ctx.status {
            let state = match status.state {
                StatusState::Success => status.state.to_string().green(),
                _ => status.state.to_string().yellow(),
            };
            out.push_str(&format!("  status:  [{state}] {}\n", status.description));
            if let Some(url) = &status.url {
                out.push_str(&format!("           {url}\n"));
            }
        }

        if !self.commands.is_empty() {
            let heading = if self.dry_run { "Would run:" } else { "Ran:" };
            out.push_str(&format!("\n{heading}\n"));
            for cmd in &self.commands {
                out.push_str(&format!("  {cmd}\n"));
            }
        }

        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
