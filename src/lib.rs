//! vsce-publish - Publish editor extensions from CI
//!
//! Derives the version and distribution tag to publish from the git branch
//! and the package's declared version, then hands off to `vsce`.
//!
//! - `main`/default branch: the declared version, tagged `latest`
//! - `release-<version>` branches: `<version>-rc.<sha7>`, tagged `next`
//! - anything else: `0.0.0-<sha7>`, tagged `canary`

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod pipeline;

pub use crate::config::ReleaseConfig;
pub use crate::core::models::{Lane, PackageMetadata, RepoContext, ResolvedContext, StatusDescriptor};
pub use crate::core::{InvalidReason, ResolveError};
pub use crate::pipeline::{PublishOptions, Publisher};
