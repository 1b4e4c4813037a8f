//! Tests for context resolution
//!
//! Drives `Resolver::resolve` end to end with an in-memory `package.json`.

use vsce_publish::core::models::{Lane, StatusState};
use vsce_publish::core::services::Resolver;
use vsce_publish::{InvalidReason, ReleaseConfig, ResolveError};

use crate::common::{MockJsonReader, PackageJsonBuilder, repo_on};

fn reader_with(doc: serde_json::Value) -> MockJsonReader {
    MockJsonReader::new().with_file("./package.json", doc)
}

// =============================================================================
// Lanes
// =============================================================================

#[test]
fn default_branch_publishes_declared_version() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo_on("master")).unwrap();

    assert_eq!(ctx.name, "pkg");
    assert_eq!(ctx.version, "1.0.0");
    assert_eq!(ctx.tag, "latest");
    assert!(ctx.status.is_none());
}

#[test]
fn default_branch_uses_configured_release_tag() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let config = ReleaseConfig::default().with_default_branch("main").with_release_tag("stable");
    let ctx = resolver.resolve(&config, &repo_on("main")).unwrap();

    assert_eq!(ctx.version, "1.0.0");
    assert_eq!(ctx.tag, "stable");
}

#[test]
fn feature_branch_is_canary() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let mut repo = repo_on("feature-x");
    repo.sha = "deadfadbeef123".to_string();
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo).unwrap();

    assert_eq!(ctx.version, "0.0.0-deadfad");
    assert_eq!(ctx.tag, "canary");
    assert!(ctx.status.is_none());
}

#[test]
fn old_default_branch_is_canary_when_default_changes() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let config = ReleaseConfig::default().with_default_branch("main");
    let ctx = resolver.resolve(&config, &repo_on("master")).unwrap();

    assert_eq!(ctx.tag, "canary");
}

#[test]
fn release_branch_with_matching_version() {
    let doc = PackageJsonBuilder::new().version("2.0.0").build();
    let resolver = Resolver::new(reader_with(doc));
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo_on("release-2.0.0")).unwrap();

    assert_eq!(ctx.version, "2.0.0-rc.deadfad");
    assert_eq!(ctx.tag, "next");
    let status = ctx.status.unwrap();
    assert_eq!(status.state, StatusState::Success);
    assert_eq!(status.description, "2.0.0");
}

#[test]
fn release_branch_with_stale_version() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo_on("release-2.0.0")).unwrap();

    assert_eq!(ctx.version, "2.0.0-rc.deadfad");
    let status = ctx.status.unwrap();
    assert_eq!(status.state, StatusState::Pending);
    assert!(status.url.unwrap().contains("/edit/release-2.0.0/package.json"));
}

#[test]
fn release_tag_does_not_apply_to_release_candidates() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let config = ReleaseConfig::default().with_release_tag("stable");
    let ctx = resolver.resolve(&config, &repo_on("release-2.0.0")).unwrap();

    assert_eq!(ctx.tag, "next");
}

#[test]
fn short_commit_hash_is_used_as_is() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let mut repo = repo_on("feature-x");
    repo.sha = "abc".to_string();
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo).unwrap();

    assert_eq!(ctx.version, "0.0.0-abc");
}

// =============================================================================
// Metadata
// =============================================================================

#[test]
fn passes_metadata_through() {
    let doc = PackageJsonBuilder::new().publisher("acme").build();
    let resolver = Resolver::new(reader_with(doc.clone()));
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo_on("master")).unwrap();

    assert_eq!(ctx.publisher.as_deref(), Some("acme"));
    assert_eq!(ctx.package_json, doc);
}

#[test]
fn reads_metadata_from_configured_dir() {
    let reader = MockJsonReader::new()
        .with_file("foo/bar/package.json", PackageJsonBuilder::new().version("1.1.0").build());
    let resolver = Resolver::new(reader);
    let config = ReleaseConfig::default().with_dir("foo/bar");
    let ctx = resolver.resolve(&config, &repo_on("master")).unwrap();

    assert_eq!(ctx.version, "1.1.0");
}

#[test]
fn missing_metadata() {
    let resolver = Resolver::new(MockJsonReader::new());
    let err = resolver.resolve(&ReleaseConfig::default(), &repo_on("master")).unwrap_err();

    assert!(matches!(err, ResolveError::MetadataMissing(_)));
}

#[test]
fn metadata_in_wrong_dir_is_missing() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let config = ReleaseConfig::default().with_dir("foo/bar");
    let err = resolver.resolve(&config, &repo_on("master")).unwrap_err();

    assert_eq!(
        err,
        ResolveError::MetadataMissing("foo/bar/package.json".into())
    );
}

#[test]
fn private_package_fails() {
    let doc = PackageJsonBuilder::new().private(true).build();
    let resolver = Resolver::new(reader_with(doc));
    let err = resolver.resolve(&ReleaseConfig::default(), &repo_on("master")).unwrap_err();

    assert_eq!(err, ResolveError::MetadataInvalid(InvalidReason::Private));
}

#[test]
fn nameless_package_fails() {
    let doc = PackageJsonBuilder::new().without("name").build();
    let resolver = Resolver::new(reader_with(doc));
    let err = resolver.resolve(&ReleaseConfig::default(), &repo_on("feature-x")).unwrap_err();

    assert_eq!(err, ResolveError::MetadataInvalid(InvalidReason::MissingName));
}

#[test]
fn versionless_package_fails_on_default_branch() {
    let doc = PackageJsonBuilder::new().without("version").build();
    let resolver = Resolver::new(reader_with(doc));
    let err = resolver.resolve(&ReleaseConfig::default(), &repo_on("master")).unwrap_err();

    assert_eq!(err, ResolveError::MetadataInvalid(InvalidReason::MissingVersion));
}

#[test]
fn versionless_package_publishes_canary() {
    let doc = PackageJsonBuilder::new().without("version").build();
    let resolver = Resolver::new(reader_with(doc));
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo_on("feature-x")).unwrap();

    assert_eq!(ctx.version, "0.0.0-deadfad");
    assert_eq!(ctx.lane, Lane::Canary);
}

#[test]
fn versionless_package_on_release_branch_is_pending() {
    let doc = PackageJsonBuilder::new().without("version").build();
    let resolver = Resolver::new(reader_with(doc));
    let ctx = resolver.resolve(&ReleaseConfig::default(), &repo_on("release-2.0.0")).unwrap();

    assert_eq!(ctx.version, "2.0.0-rc.deadfad");
    assert_eq!(ctx.status.unwrap().state, StatusState::Pending);
}

#[test]
fn resolution_is_repeatable() {
    let resolver = Resolver::new(reader_with(PackageJsonBuilder::new().build()));
    let config = ReleaseConfig::default();
    let repo = repo_on("release-3.1.4");

    assert_eq!(
        resolver.resolve(&config, &repo).unwrap(),
        resolver.resolve(&config, &repo).unwrap()
    );
}
