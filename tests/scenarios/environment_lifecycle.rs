//! Scenario: Environment lifecycle
//!
//! Journey: An operator checks a CNAME, launches an environment, follows
//! its events and finally terminates it.
//!
//! Success Criteria:
//! - Status snapshots progress Launching → Terminating
//! - Remote limits surface as structured ServiceErrors

use appdeploy::{
    CheckDnsAvailabilityRequest, ConfigurationOptionSetting, CreateEnvironmentRequest,
    DeploymentService, DescribeEnvironmentsRequest, DescribeEventsRequest, EnvironmentStatus,
    EnvironmentTier, EventSeverity, ServiceErrorCode, TerminateEnvironmentRequest,
};

use crate::common::*;

fn web_tier() -> EnvironmentTier {
    EnvironmentTier::new()
        .with_name("WebServer")
        .with_tier_type("Standard")
}

/// SCENARIO: Launch, inspect and terminate an environment
#[test]
fn scenario_launch_inspect_terminate() {
    let service = FakeDeploymentService::new();

    // The CNAME is free before launch
    let dns = service
        .check_dns_availability(&CheckDnsAvailabilityRequest::new().with_cname_prefix("shop"))
        .unwrap();
    assert_eq!(dns.available(), Some(true));
    assert_eq!(dns.fully_qualified_cname(), Some("shop.us-east-1.example.com"));

    let env = service
        .create_environment(
            &CreateEnvironmentRequest::for_environment("shop", "shop-prod")
                .with_cname_prefix("shop")
                .with_tier(web_tier())
                .with_option_setting(ConfigurationOptionSetting::of(
                    "app:env",
                    "MODE",
                    "prod",
                )),
        )
        .unwrap();
    assert_eq!(env.tier(), Some(&web_tier()));

    // The CNAME is now taken
    let dns = service
        .check_dns_availability(&CheckDnsAvailabilityRequest::new().with_cname_prefix("shop"))
        .unwrap();
    assert_eq!(dns.available(), Some(false));
    assert!(dns.fully_qualified_cname().is_none());

    // Describe by id
    let listed = service
        .describe_environments(
            &DescribeEnvironmentsRequest::new().with_environment_id(env.environment_id().unwrap()),
        )
        .unwrap();
    assert_eq!(listed.environments(), Some(std::slice::from_ref(&env)));
    assert!(listed.next_token().is_none());

    // Terminate
    let terminated = service
        .terminate_environment(
            &TerminateEnvironmentRequest::new()
                .with_environment_name("shop-prod")
                .with_terminate_resources(true),
        )
        .unwrap();
    assert_eq!(
        terminated.parsed_status().unwrap().unwrap(),
        EnvironmentStatus::Terminating
    );

    // Events are newest first
    let events = service
        .describe_events(
            &DescribeEventsRequest::new()
                .with_environment_name("shop-prod")
                .with_max_records(1),
        )
        .unwrap();
    let events = events.events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message(), Some("terminateEnvironment is starting."));
    assert_eq!(events[0].parsed_severity().unwrap().unwrap(), EventSeverity::Info);
}

/// SCENARIO: The environment limit is reported as TooManyEnvironments
#[test]
fn scenario_environment_limit() {
    let service = FakeDeploymentService::new().with_environment_limit(1);
    service
        .create_environment(&CreateEnvironmentRequest::for_environment("shop", "a"))
        .unwrap();

    let err = service
        .create_environment(&CreateEnvironmentRequest::for_environment("shop", "b"))
        .unwrap_err();

    assert_eq!(
        err.parsed_error_code().unwrap().unwrap(),
        ServiceErrorCode::TooManyEnvironments
    );
    assert_eq!(
        err.to_string(),
        "TooManyEnvironmentsException: environment limit reached (status 400)"
    );
}

/// SCENARIO: Terminating an unknown environment is ResourceNotFound
#[test]
fn scenario_terminate_unknown_environment() {
    let err = FakeDeploymentService::new()
        .terminate_environment(&TerminateEnvironmentRequest::new().with_environment_id("e-nope"))
        .unwrap_err();
    assert!(err.is(ServiceErrorCode::ResourceNotFound));
    assert_eq!(err.status_code(), Some(404));
}
