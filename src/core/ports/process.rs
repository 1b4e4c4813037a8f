//! Process runner port

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Flags whose value is a credential
pub const SECRET_FLAGS: &[&str] = &["--pat", "-p"];

/// Stand-in for a hidden credential
pub const REDACTED: &str = "***";

/// Copy of `args` with the value of every [`SECRET_FLAGS`] entry masked
///
/// Handles both `--pat <value>` and `--pat=<value>`.
#[must_use]
pub fn redact_args(args: &[String]) -> Vec<String> {
    let mut redacted = Vec::with_capacity(args.len());
    let mut hide_next = false;
    for arg in args {
        if hide_next {
            redacted.push(REDACTED.to_string());
            hide_next = false;
            continue;
        }
        match arg.split_once('=') {
            Some((flag, _)) if SECRET_FLAGS.contains(&flag) => {
                redacted.push(format!("{flag}={REDACTED}"));
            },
            _ => {
                hide_next = SECRET_FLAGS.contains(&arg.as_str());
                redacted.push(arg.clone());
            },
        }
    }
    redacted
}

/// An external command to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Program name or path
    pub program: String,
    /// Arguments
    pub args: Vec<String>,
    /// Working directory, `None` for the current one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation in the current directory
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run in `dir` instead
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Copy safe to show in logs and reports
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            args: redact_args(&self.args),
            ..self.clone()
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in redact_args(&self.args) {
            write!(f, " {arg}")?;
        }
        if let Some(cwd) = &self.cwd {
            write!(f, " (in {})", cwd.display())?;
        }
        Ok(())
    }
}

/// Runs external commands with inherited standard I/O
pub trait ProcessRunner {
    /// Run `invocation` to completion
    ///
    /// Fails if the process cannot be spawned or exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> anyhow::Result<()>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<()> {
        (**self).run(invocation)
    }
}
