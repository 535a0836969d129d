//! Scenario: Build a version from source and release it
//!
//! Journey: A team registers a new application version that the service
//! builds from a git commit, then deploys it to an existing environment.
//!
//! Steps:
//! 1. Build a CreateApplicationVersion request with a build configuration
//! 2. Send it and read back the version's status
//! 3. Launch an environment and deploy the version to it

use appdeploy::{
    ApplicationVersionStatus, BuildConfiguration, ComputeType, CreateApplicationVersionRequest,
    CreateEnvironmentRequest, DeploymentService, EnvironmentStatus, ServiceErrorCode,
    SourceBuildInformation, SourceRepository, SourceType, StorageLocation, Tag,
    UpdateEnvironmentRequest, ValueHash,
};

use crate::common::*;

fn build_request() -> CreateApplicationVersionRequest {
    CreateApplicationVersionRequest::new()
        .with_application_name("shop")
        .with_version_label("v42")
        .with_description("Built from main")
        .with_source_build_information(
            SourceBuildInformation::new()
                .with_source_type(SourceType::Git)
                .with_source_repository(SourceRepository::CodeRepository)
                .with_source_location("shop-repo/9c1f2e"),
        )
        .with_build_configuration(
            BuildConfiguration::new()
                .with_artifact_name("shop-v42")
                .with_build_service_role("build-role")
                .with_compute_type(ComputeType::BuildGeneral1Small)
                .with_image("builder/standard:4.0")
                .with_timeout_in_minutes(60),
        )
        .with_auto_create_application(true)
        .with_process(true)
        .with_tag(Tag::pair("team", "checkout"))
}

/// SCENARIO: A chained build request keeps every nested field
#[test]
fn scenario_build_request_round_trips_nested_fields() {
    let request = build_request();

    let build = request.build_configuration().unwrap();
    assert_eq!(build.artifact_name(), Some("shop-v42"));
    assert_eq!(build.build_service_role(), Some("build-role"));
    assert_eq!(build.compute_type(), Some("BUILD_GENERAL1_SMALL"));
    assert_eq!(
        build.parsed_compute_type().unwrap().unwrap(),
        ComputeType::BuildGeneral1Small
    );
    assert_eq!(build.image(), Some("builder/standard:4.0"));
    assert_eq!(build.timeout_in_minutes(), Some(60));

    let source = request.source_build_information().unwrap();
    assert_eq!(source.source_type(), Some("Git"));
    assert_eq!(source.source_repository(), Some("CodeCommit"));
    assert_eq!(source.source_location(), Some("shop-repo/9c1f2e"));

    // Same request built twice is equal and hashes equal
    assert_eq!(request, build_request());
    assert_eq!(request.value_hash(), build_request().value_hash());

    // Changing one scalar breaks equality
    assert_ne!(request, build_request().with_version_label("v43"));
}

/// SCENARIO: The service accepts the build request and starts building
#[test]
fn scenario_build_then_deploy() {
    let service = FakeDeploymentService::new();

    // Step 1: Register the version
    let created = service
        .create_application_version(&build_request())
        .unwrap();
    let version = created.application_version().unwrap();
    assert_eq!(version.version_label(), Some("v42"));
    assert_eq!(
        version.parsed_status().unwrap().unwrap(),
        ApplicationVersionStatus::Building
    );

    // Step 2: Launch an environment
    let env = service
        .create_environment(
            &CreateEnvironmentRequest::for_environment("shop", "shop-prod")
                .with_version_label("v41")
                .with_cname_prefix("shop-prod"),
        )
        .unwrap();
    assert_eq!(env.parsed_status().unwrap().unwrap(), EnvironmentStatus::Launching);

    // Step 3: Deploy the new version
    let updated = service
        .update_environment(
            &UpdateEnvironmentRequest::new()
                .with_environment_id(env.environment_id().unwrap())
                .with_version_label("v42"),
        )
        .unwrap();
    assert_eq!(updated.version_label(), Some("v42"));
    assert_eq!(updated.parsed_status().unwrap().unwrap(), EnvironmentStatus::Updating);
    assert_eq!(updated.abortable_operation_in_progress(), Some(true));

    // A second deploy while updating is rejected remotely
    let err = service
        .update_environment(&UpdateEnvironmentRequest::new().with_environment_name("shop-prod"))
        .unwrap_err();
    assert!(err.is(ServiceErrorCode::OperationInProgress));
}

/// SCENARIO: Giving both sources is a remote failure, not a local one
#[test]
fn scenario_conflicting_sources_rejected_by_service() {
    let request = build_request()
        .with_source_bundle(StorageLocation::new().with_bucket("bundles").with_key("v42.zip"));

    let err = FakeDeploymentService::new()
        .create_application_version(&request)
        .unwrap_err();

    assert!(err.is(ServiceErrorCode::InvalidRequest));
    assert_eq!(err.status_code(), Some(400));
}
