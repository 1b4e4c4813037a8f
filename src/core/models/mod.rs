//! Domain models for vsce-publish
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`PackageMetadata`] - Validated `package.json` contents
//! - [`RepoContext`] - Commit, branch and repository of the CI run
//! - [`Lane`] - How a branch is released
//! - [`StatusDescriptor`] - Commit status for release-candidate branches
//! - [`ResolvedContext`] - The resolver's output

mod context;
mod lane;
mod package;
mod repo;
mod status;

pub use context::ResolvedContext;
pub use lane::Lane;
pub use package::PackageMetadata;
pub use repo::RepoContext;
pub use status::{STATUS_CONTEXT, StatusDescriptor, StatusState};
