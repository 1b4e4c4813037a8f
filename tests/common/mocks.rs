//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use vsce_publish::core::models::{RepoContext, StatusDescriptor};
use vsce_publish::core::ports::{Invocation, JsonReader, ProcessRunner, RepoMetadata, StatusSink};

/// In-memory JSON files keyed by path
#[derive(Debug, Default)]
pub struct MockJsonReader {
    files: HashMap<PathBuf, Value>,
}

impl MockJsonReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, doc: Value) -> Self {
        self.files.insert(path.as_ref().to_path_buf(), doc);
        self
    }
}

impl JsonReader for MockJsonReader {
    fn read_json(&self, path: &Path) -> Option<Value> {
        self.files.get(path).cloned()
    }
}

/// Fixed repository context
#[derive(Debug)]
pub struct MockRepoMetadata {
    context: Option<RepoContext>,
}

impl MockRepoMetadata {
    pub fn new(context: RepoContext) -> Self {
        Self {
            context: Some(context),
        }
    }

    pub fn unavailable() -> Self {
        Self { context: None }
    }
}

impl RepoMetadata for MockRepoMetadata {
    fn repo_context(&self) -> anyhow::Result<RepoContext> {
        self.context
            .clone()
            .ok_or_else(|| anyhow::anyhow!("unable to determine the current branch"))
    }
}

/// Records invocations; optionally fails for one program
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    fail_program: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(program: &str) -> Self {
        Self {
            calls: RefCell::default(),
            fail_program: Some(program.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.fail_program.as_deref() == Some(invocation.program.as_str()) {
            anyhow::bail!("`{invocation}` exited with exit status: 1");
        }
        Ok(())
    }
}

/// Records posted statuses
#[derive(Debug, Default)]
pub struct RecordingSink {
    posted: RefCell<Vec<(String, StatusDescriptor)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posted(&self) -> Vec<(String, StatusDescriptor)> {
        self.posted.borrow().clone()
    }
}

impl StatusSink for RecordingSink {
    fn post(&self, sha: &str, status: &StatusDescriptor) -> anyhow::Result<()> {
        self.posted.borrow_mut().push((sha.to_string(), status.clone()));
        Ok(())
    }
}
