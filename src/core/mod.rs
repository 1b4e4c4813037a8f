//! Core domain logic for vsce-publish
//!
//! This module contains the version and tag resolution engine. It has no
//! I/O of its own; the single file read goes through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`PackageMetadata`, `RepoContext`, `Lane`, ...)
//! - `services/` - Classification, synthesis, status reporting, resolution
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Resolution errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{InvalidReason, ResolveError};
