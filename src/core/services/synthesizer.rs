//! Version and distribution tag synthesis
//!
//! Default-branch publishes trust the committed version. Every other branch
//! gets a disposable version pinned to the commit, so publishes never
//! collide and always trace back to a SHA.

use crate::core::error::InvalidReason;
use crate::core::models::{Lane, PackageMetadata};

/// Length of the abbreviated commit hash used in derived versions
pub const SHORT_SHA_LEN: usize = 7;

/// Pre-release identifier for release-candidate versions
pub const RELEASE_CANDIDATE_PREID: &str = "rc";

/// Distribution tag for release-candidate publishes
pub const RELEASE_CANDIDATE_TAG: &str = "next";

/// Base version for canary publishes
pub const CANARY_VERSION: &str = "0.0.0";

/// Distribution tag for canary publishes
pub const CANARY_TAG: &str = "canary";

/// First [`SHORT_SHA_LEN`] characters of `sha`, or all of it if shorter
#[must_use]
pub fn short_sha(sha: &str) -> &str {
    sha.char_indices().nth(SHORT_SHA_LEN).map_or(sha, |(idx, _)| &sha[..idx])
}

/// Derive `(version, tag)` for a lane
///
/// `release_tag` only applies to the default lane; the other lanes use fixed
/// tags. The default lane is the only one that reads the declared version,
/// so it is the only one that fails without it.
pub fn synthesize(
    lane: &Lane,
    metadata: &PackageMetadata,
    short_sha: &str,
    release_tag: &str,
) -> Result<(String, String), InvalidReason> {
    let pair = match lane {
        Lane::Default => {
            let version = metadata.version.clone().ok_or(InvalidReason::MissingVersion)?;
            (version, release_tag.to_string())
        },
        Lane::ReleaseCandidate { target_version } => (
            format!("{target_version}-{RELEASE_CANDIDATE_PREID}.{short_sha}"),
            RELEASE_CANDIDATE_TAG.to_string(),
        ),
        Lane::Canary => (format!("{CANARY_VERSION}-{short_sha}"), CANARY_TAG.to_string()),
    };
    Ok(pair)
}
