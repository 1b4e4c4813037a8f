//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fs/` - `package.json` reading
//! - `git/` - Commit, branch and repository discovery
//! - `process/` - Child process execution
//! - `status/` - Commit status reporting

pub mod fs;
pub mod git;
pub mod process;
pub mod status;

pub use fs::FsJsonReader;
pub use git::{CiEnv, GitRepoMetadata};
pub use process::SystemProcessRunner;
pub use status::LogStatusSink;
