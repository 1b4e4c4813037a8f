//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the resolver and the outside
//! world (filesystem, git, child processes, commit statuses).
//!
//! Implementations live in the `adapters` module.

mod json_reader;
mod process;
mod repo_metadata;
mod status_sink;

pub use json_reader::JsonReader;
pub use process::{Invocation, ProcessRunner, REDACTED, SECRET_FLAGS, redact_args};
pub use repo_metadata::RepoMetadata;
pub use status_sink::StatusSink;
