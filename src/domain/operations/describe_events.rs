//! DescribeEvents - read the event log, newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::EventDescription;
use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::EventSeverity;
use crate::error::SdkResult;

/// Input of DescribeEvents
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeEventsRequest {
    application_name: Option<String>,
    version_label: Option<String>,
    template_name: Option<String>,
    environment_id: Option<String>,
    environment_name: Option<String>,
    platform_arn: Option<String>,
    request_id: Option<String>,
    /// Minimum severity to include; see [`EventSeverity`]
    severity: Option<String>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    max_records: Option<i32>,
    next_token: Option<String>,
}

impl DescribeEventsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn with_application_name(mut self, application_name: impl Into<String>) -> Self {
        self.application_name = Some(application_name.into());
        self
    }

    pub fn with_version_label(mut self, version_label: impl Into<String>) -> Self {
        self.version_label = Some(version_label.into());
        self
    }

    pub fn with_template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    pub fn with_environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    pub fn with_platform_arn(mut self, platform_arn: impl Into<String>) -> Self {
        self.platform_arn = Some(platform_arn.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_max_records(mut self, max_records: i32) -> Self {
        self.max_records = Some(max_records);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    // --- Getters ---

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn version_label(&self) -> Option<&str> {
        self.version_label.as_deref()
    }

    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    pub fn environment_id(&self) -> Option<&str> {
        self.environment_id.as_deref()
    }

    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn platform_arn(&self) -> Option<&str> {
        self.platform_arn.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn parsed_severity(&self) -> Option<SdkResult<EventSeverity>> {
        self.severity.as_deref().map(str::parse::<EventSeverity>)
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn max_records(&self) -> Option<i32> {
        self.max_records
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    // --- Setters ---

    pub fn set_application_name(&mut self, application_name: Option<String>) {
        self.application_name = application_name;
    }

    pub fn set_version_label(&mut self, version_label: Option<String>) {
        self.version_label = version_label;
    }

    pub fn set_template_name(&mut self, template_name: Option<String>) {
        self.template_name = template_name;
    }

    pub fn set_environment_id(&mut self, environment_id: Option<String>) {
        self.environment_id = environment_id;
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    pub fn set_platform_arn(&mut self, platform_arn: Option<String>) {
        self.platform_arn = platform_arn;
    }

    pub fn set_request_id(&mut self, request_id: Option<String>) {
        self.request_id = request_id;
    }

    pub fn set_severity(&mut self, severity: Option<String>) {
        self.severity = severity;
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time;
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time;
    }

    pub fn set_max_records(&mut self, max_records: Option<i32>) {
        self.max_records = max_records;
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }
}

impl ValueHash for DescribeEventsRequest {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.application_name)
            .field(&self.version_label)
            .field(&self.template_name)
            .field(&self.environment_id)
            .field(&self.environment_name)
            .field(&self.platform_arn)
            .field(&self.request_id)
            .field(&self.severity)
            .field(&self.start_time)
            .field(&self.end_time)
            .field(&self.max_records)
            .field(&self.next_token)
            .finish()
    }
}

impl fmt::Display for DescribeEventsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ApplicationName", self.application_name())
            .field("VersionLabel", self.version_label())
            .field("TemplateName", self.template_name())
            .field("EnvironmentId", self.environment_id())
            .field("EnvironmentName", self.environment_name())
            .field("PlatformArn", self.platform_arn())
            .field("RequestId", self.request_id())
            .field("Severity", self.severity())
            .field("StartTime", self.start_time.as_ref())
            .field("EndTime", self.end_time.as_ref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("NextToken", self.next_token())
            .finish()
    }
}

/// Output of DescribeEvents
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeEventsResult {
    events: Option<Vec<EventDescription>>,
    next_token: Option<String>,
}

impl DescribeEventsResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, events: &[EventDescription]) -> Self {
        self.set_events(Some(events));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_events_appended(mut self, events: &[EventDescription]) -> Self {
        self.events.get_or_insert_with(Vec::new).extend_from_slice(events);
        self
    }

    pub fn with_event(mut self, event: EventDescription) -> Self {
        self.events.get_or_insert_with(Vec::new).push(event);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn events(&self) -> Option<&[EventDescription]> {
        self.events.as_deref()
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_events(&mut self, events: Option<&[EventDescription]>) {
        self.events = events.map(<[EventDescription]>::to_vec);
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }
}

impl ValueHash for DescribeEventsResult {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.events)
            .field(&self.next_token)
            .finish()
    }
}

impl fmt::Display for DescribeEventsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .list("Events", self.events())
            .field("NextToken", self.next_token())
            .finish()
    }
}
