//! System process runner
//!
//! Implements `ProcessRunner` with `std::process::Command`, inheriting
//! stdin, stdout and stderr from the parent.

use std::process::{Command, Stdio};

use anyhow::Context;

use crate::core::ports::{Invocation, ProcessRunner};

/// Runs commands as child processes of the current one
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<()> {
        log::debug!("spawning {invocation}");

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        let status = command
            .status()
            .with_context(|| format!("failed to spawn `{invocation}`"))?;

        if !status.success() {
            anyhow::bail!("`{invocation}` exited with {status}");
        }
        Ok(())
    }
}
