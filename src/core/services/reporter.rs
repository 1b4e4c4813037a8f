//! Version status reporting for release-candidate branches

use crate::core::models::{
    Lane, PackageMetadata, RepoContext, STATUS_CONTEXT, StatusDescriptor, StatusState,
};

/// Compute the version status for `lane`
///
/// Only release-candidate branches get a status. It succeeds when the
/// declared version already equals the branch's target version, and is
/// pending with a link to edit `package.json` otherwise.
#[must_use]
pub fn report(
    lane: &Lane,
    metadata: &PackageMetadata,
    repo: &RepoContext,
) -> Option<StatusDescriptor> {
    let target_version = lane.target_version()?;

    let status = if metadata.version.as_deref() == Some(target_version) {
        StatusDescriptor {
            context: STATUS_CONTEXT.to_string(),
            state: StatusState::Success,
            description: target_version.to_string(),
            url: None,
        }
    } else {
        StatusDescriptor {
            context: STATUS_CONTEXT.to_string(),
            state: StatusState::Pending,
            description: format!(
                "Remember to set \"version\": \"{target_version}\" in package.json"
            ),
            url: Some(format!(
                "https://github.com/{}/edit/{}/package.json",
                repo.repo_identifier, repo.branch
            )),
        }
    };

    Some(status)
}
