//! Contract: textual rendering.

use appdeploy::{
    BuildConfiguration, ComputeType, CreateApplicationVersionRequest, SourceBuildInformation,
    SourceRepository, SourceType, StorageLocation, Tag,
};

fn full_request() -> CreateApplicationVersionRequest {
    CreateApplicationVersionRequest::for_version("shop", "v7")
        .with_description("nightly")
        .with_source_build_information(
            SourceBuildInformation::new()
                .with_source_type(SourceType::Git)
                .with_source_repository(SourceRepository::CodeRepository)
                .with_source_location("shop-repo/3f2a"),
        )
        .with_source_bundle(StorageLocation::new().with_bucket("bundles").with_key("v7.zip"))
        .with_build_configuration(
            BuildConfiguration::new()
                .with_artifact_name("shop-v7")
                .with_build_service_role("build-role")
                .with_compute_type(ComputeType::BuildGeneral1Medium)
                .with_image("builder/standard:4.0")
                .with_timeout_in_minutes(30),
        )
        .with_auto_create_application(true)
        .with_process(false)
        .with_tag(Tag::pair("team", "web"))
}

/// CONTRACT: Every present top-level label appears exactly once.
#[test]
fn contract_labels_appear_once() {
    let rendered = full_request().to_string();
    for label in [
        "ApplicationName: ",
        "VersionLabel: ",
        "Description: ",
        "SourceBuildInformation: ",
        "SourceBundle: ",
        "BuildConfiguration: ",
        "AutoCreateApplication: ",
        "Process: ",
        "Tags: ",
    ] {
        assert_eq!(rendered.matches(label).count(), 1, "{label} in {rendered}");
    }
}

/// CONTRACT: Rendering never leaves a dangling separator.
#[test]
fn contract_no_trailing_separator() {
    let rendered = full_request().to_string();
    assert!(rendered.starts_with('{'));
    assert!(rendered.ends_with('}'));
    assert!(!rendered.contains(",}"));
    assert!(!rendered.contains("{,"));
    assert!(!rendered.contains(",,"));
}

/// CONTRACT: The full rendering is stable.
#[test]
fn contract_full_rendering_snapshot() {
    insta::assert_snapshot!(
        full_request().to_string(),
        @"{ApplicationName: shop,VersionLabel: v7,Description: nightly,SourceBuildInformation: {SourceType: Git,SourceRepository: CodeCommit,SourceLocation: shop-repo/3f2a},SourceBundle: {Bucket: bundles,Key: v7.zip},BuildConfiguration: {ArtifactName: shop-v7,BuildServiceRole: build-role,ComputeType: BUILD_GENERAL1_MEDIUM,Image: builder/standard:4.0,TimeoutInMinutes: 30},AutoCreateApplication: true,Process: false,Tags: [{Key: team,Value: web}]}"
    );
}
