//! Event entity - one entry of the service's event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::EventSeverity;
use crate::error::SdkResult;

/// An event reported for an application, version, template or environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EventDescription {
    event_date: Option<DateTime<Utc>>,
    message: Option<String>,
    application_name: Option<String>,
    version_label: Option<String>,
    template_name: Option<String>,
    environment_name: Option<String>,
    platform_arn: Option<String>,
    /// Identifier of the request that caused the event
    request_id: Option<String>,
    /// See [`EventSeverity`]
    severity: Option<String>,
}

impl EventDescription {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn with_event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = Some(event_date);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

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

    // --- Getters ---

    pub fn event_date(&self) -> Option<DateTime<Utc>> {
        self.event_date
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn version_label(&self) -> Option<&str> {
        self.version_label.as_deref()
    }

    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
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

    // --- Setters ---

    pub fn set_event_date(&mut self, event_date: Option<DateTime<Utc>>) {
        self.event_date = event_date;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn set_application_name(&mut self, application_name: Option<String>) {
        self.application_name = application_name;
    }

    pub fn set_version_label(&mut self, version_label: Option<String>) {
        self.version_label = version_label;
    }

    pub fn set_template_name(&mut self, template_name: Option<String>) {
        self.template_name = template_name;
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
}

impl ValueHash for EventDescription {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.event_date)
            .field(&self.message)
            .field(&self.application_name)
            .field(&self.version_label)
            .field(&self.template_name)
            .field(&self.environment_name)
            .field(&self.platform_arn)
            .field(&self.request_id)
            .field(&self.severity)
            .finish()
    }
}

impl fmt::Display for EventDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("EventDate", self.event_date.as_ref())
            .field("Message", self.message())
            .field("ApplicationName", self.application_name())
            .field("VersionLabel", self.version_label())
            .field("TemplateName", self.template_name())
            .field("EnvironmentName", self.environment_name())
            .field("PlatformArn", self.platform_arn())
            .field("RequestId", self.request_id())
            .field("Severity", self.severity())
            .finish()
    }
}
