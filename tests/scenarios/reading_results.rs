//! Scenario: Reading service responses
//!
//! Journey: A transport hands back JSON; the caller populates result
//! objects and reads them through getters, including values the model
//! does not recognise.

use chrono::{TimeZone, Utc};

use appdeploy::{
    DescribeEnvironmentsRequest, DescribeEnvironmentsResult, DescribeEventsResult,
    EnvironmentHealth, EnvironmentHealthStatus, EnvironmentStatus, EventSeverity,
};

use crate::common::*;

/// SCENARIO: A full environment page populates every nested field
#[test]
fn scenario_environment_page() {
    let page: DescribeEnvironmentsResult =
        serde_json::from_str(DESCRIBE_ENVIRONMENTS_PAGE).unwrap();

    let env = &page.environments().unwrap()[0];
    assert_eq!(env.environment_id(), Some("e-abc123"));
    assert_eq!(env.cname(), Some("shop-prod.us-east-1.example.com"));
    assert_eq!(env.endpoint_url(), Some("shop-lb-1.example.com"));
    assert_eq!(
        env.date_updated(),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    );
    assert_eq!(env.parsed_status().unwrap().unwrap(), EnvironmentStatus::Ready);
    assert_eq!(env.parsed_health().unwrap().unwrap(), EnvironmentHealth::Green);
    assert_eq!(
        env.parsed_health_status().unwrap().unwrap(),
        EnvironmentHealthStatus::Ok
    );
    assert_eq!(env.abortable_operation_in_progress(), Some(false));
    assert!(env.template_name().is_none());
    assert!(env.operations_role().is_none());

    let listeners = env
        .resources()
        .and_then(|r| r.load_balancer())
        .and_then(|lb| lb.listeners())
        .unwrap();
    let ports: Vec<_> = listeners.iter().filter_map(|l| l.port()).collect();
    assert_eq!(ports, [80, 443]);

    assert_eq!(env.tier().and_then(|t| t.tier_type()), Some("Standard"));
    assert_eq!(
        env.environment_links().unwrap()[0].environment_name(),
        Some("shop-worker")
    );

    // The continuation token feeds the next request
    let next = DescribeEnvironmentsRequest::new()
        .with_application_name("shop")
        .with_next_token(page.next_token().unwrap());
    assert_eq!(next.to_string(), "{ApplicationName: shop,NextToken: page-2}");
}

/// SCENARIO: Event pages keep unknown severities readable
#[test]
fn scenario_event_page_with_unknown_severity() {
    let page: DescribeEventsResult = serde_json::from_str(DESCRIBE_EVENTS_PAGE).unwrap();
    let events = page.events().unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].parsed_severity().unwrap().unwrap(), EventSeverity::Info);
    assert_eq!(events[1].severity(), Some("NOTICE"));
    let err = events[1].parsed_severity().unwrap().unwrap_err();
    assert!(err.is_unknown_enum_value());
    assert_eq!(
        err.to_string(),
        "unrecognized value 'NOTICE' for enumeration EventSeverity"
    );
    assert!(page.next_token().is_none());
}
