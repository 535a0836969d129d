//! Contract: absence is a value of its own.

use appdeploy::{
    ApplicationVersionDescription, BuildConfiguration, CreateApplicationVersionRequest,
    CreateEnvironmentRequest, EnvironmentDescription, LoadBalancerDescription,
    TerminateEnvironmentRequest, ValueHash,
};

/// CONTRACT: A freshly constructed object reports every field absent.
#[test]
fn contract_new_objects_have_no_fields() {
    let request = CreateEnvironmentRequest::new();
    assert!(request.application_name().is_none());
    assert!(request.tags().is_none());
    assert!(request.option_settings().is_none());
    assert!(request.tier().is_none());
    assert_eq!(request.to_string(), "{}");

    let env = EnvironmentDescription::new();
    assert!(env.status().is_none());
    assert!(env.parsed_status().is_none());
    assert!(env.abortable_operation_in_progress().is_none());
    assert!(env.environment_links().is_none());
    assert_eq!(env.to_string(), "{}");
}

/// CONTRACT: An empty string is not absent.
#[test]
fn contract_empty_string_is_present() {
    let empty = CreateApplicationVersionRequest::new().with_description("");
    assert_eq!(empty.description(), Some(""));
    assert_ne!(empty, CreateApplicationVersionRequest::new());
    assert_eq!(empty.to_string(), "{Description: }");
}

/// CONTRACT: Zero and false are not absent.
#[test]
fn contract_zero_and_false_are_present() {
    let zero = BuildConfiguration::new().with_timeout_in_minutes(0);
    assert_ne!(zero, BuildConfiguration::new());

    let keep = TerminateEnvironmentRequest::new().with_terminate_resources(false);
    assert_eq!(keep.terminate_resources(), Some(false));
    assert_ne!(keep.value_hash(), TerminateEnvironmentRequest::new().value_hash());
}

/// CONTRACT: An empty list is not absent.
#[test]
fn contract_empty_list_is_present() {
    let lb = LoadBalancerDescription::new().with_listeners(&[]);
    assert_eq!(lb.listeners().map(<[_]>::len), Some(0));
    assert_ne!(lb, LoadBalancerDescription::new());
    assert_eq!(lb.to_string(), "{Listeners: []}");
}

/// CONTRACT: Clearing a nested object with a setter makes it absent again.
#[test]
fn contract_setter_none_clears_nested() {
    let mut version = ApplicationVersionDescription::new().with_description("x");
    version.set_description(None);
    assert_eq!(version, ApplicationVersionDescription::new());
}
