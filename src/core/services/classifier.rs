//! Branch classification
//!
//! Maps a branch name onto a [`Lane`]. The default branch always wins; then
//! `release-<version>` branches; everything else is a canary.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Lane;

static RELEASE_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^release-(.*)$").expect("release branch pattern is valid"));

/// Classify `branch` relative to the configured default branch
#[must_use]
pub fn classify(branch: &str, default_branch: &str) -> Lane {
    if branch == default_branch {
        return Lane::Default;
    }

    RELEASE_BRANCH.captures(branch).map_or(Lane::Canary, |caps| Lane::ReleaseCandidate {
        target_version: caps[1].to_string(),
    })
}
