//! Business logic services
//!
//! Pure logic operating on domain models. The only I/O is the metadata
//! read, and that goes through the [`JsonReader`](crate::core::ports::JsonReader)
//! port.
//!
//! - [`classifier`] - Branch name to release lane
//! - [`synthesizer`] - Lane to version and distribution tag
//! - [`reporter`] - Version status for release-candidate branches
//! - [`loader`] - `package.json` loading and validation
//! - [`resolver`] - All of the above in one call

pub mod classifier;
pub mod loader;
pub mod reporter;
pub mod resolver;
pub mod synthesizer;

pub use classifier::classify;
pub use loader::load_metadata;
pub use reporter::report;
pub use resolver::Resolver;
pub use synthesizer::{short_sha, synthesize};
