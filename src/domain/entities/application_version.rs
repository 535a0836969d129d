//! Application version entity - a labelled, deployable revision of an
//! application's source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SourceBuildInformation, StorageLocation};
use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::ApplicationVersionStatus;
use crate::error::SdkResult;

/// Description of an application version as reported by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplicationVersionDescription {
    application_version_arn: Option<String>,
    application_name: Option<String>,
    description: Option<String>,
    version_label: Option<String>,
    source_build_information: Option<SourceBuildInformation>,
    /// Identifier of the build that produced the bundle, if built by the service
    build_arn: Option<String>,
    source_bundle: Option<StorageLocation>,
    date_created: Option<DateTime<Utc>>,
    date_updated: Option<DateTime<Utc>>,
    /// See [`ApplicationVersionStatus`]
    status: Option<String>,
}

impl ApplicationVersionDescription {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn with_application_version_arn(mut self, arn: impl Into<String>) -> Self {
        self.application_version_arn = Some(arn.into());
        self
    }

    pub fn with_application_name(mut self, application_name: impl Into<String>) -> Self {
        self.application_name = Some(application_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_version_label(mut self, version_label: impl Into<String>) -> Self {
        self.version_label = Some(version_label.into());
        self
    }

    pub fn with_source_build_information(mut self, info: SourceBuildInformation) -> Self {
        self.source_build_information = Some(info);
        self
    }

    pub fn with_build_arn(mut self, build_arn: impl Into<String>) -> Self {
        self.build_arn = Some(build_arn.into());
        self
    }

    pub fn with_source_bundle(mut self, source_bundle: StorageLocation) -> Self {
        self.source_bundle = Some(source_bundle);
        self
    }

    pub fn with_date_created(mut self, date_created: DateTime<Utc>) -> Self {
        self.date_created = Some(date_created);
        self
    }

    pub fn with_date_updated(mut self, date_updated: DateTime<Utc>) -> Self {
        self.date_updated = Some(date_updated);
        self
    }

    /// Builder: set the processing status (an [`ApplicationVersionStatus`] or raw string)
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    // --- Getters ---

    pub fn application_version_arn(&self) -> Option<&str> {
        self.application_version_arn.as_deref()
    }

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn version_label(&self) -> Option<&str> {
        self.version_label.as_deref()
    }

    pub fn source_build_information(&self) -> Option<&SourceBuildInformation> {
        self.source_build_information.as_ref()
    }

    pub fn build_arn(&self) -> Option<&str> {
        self.build_arn.as_deref()
    }

    pub fn source_bundle(&self) -> Option<&StorageLocation> {
        self.source_bundle.as_ref()
    }

    pub fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }

    pub fn date_updated(&self) -> Option<DateTime<Utc>> {
        self.date_updated
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Resolve the stored status against the known vocabulary
    pub fn parsed_status(&self) -> Option<SdkResult<ApplicationVersionStatus>> {
        self.status
            .as_deref()
            .map(str::parse::<ApplicationVersionStatus>)
    }

    // --- Setters ---

    pub fn set_application_version_arn(&mut self, arn: Option<String>) {
        self.application_version_arn = arn;
    }

    pub fn set_application_name(&mut self, application_name: Option<String>) {
        self.application_name = application_name;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_version_label(&mut self, version_label: Option<String>) {
        self.version_label = version_label;
    }

    pub fn set_source_build_information(&mut self, info: Option<SourceBuildInformation>) {
        self.source_build_information = info;
    }

    pub fn set_build_arn(&mut self, build_arn: Option<String>) {
        self.build_arn = build_arn;
    }

    pub fn set_source_bundle(&mut self, source_bundle: Option<StorageLocation>) {
        self.source_bundle = source_bundle;
    }

    pub fn set_date_created(&mut self, date_created: Option<DateTime<Utc>>) {
        self.date_created = date_created;
    }

    pub fn set_date_updated(&mut self, date_updated: Option<DateTime<Utc>>) {
        self.date_updated = date_updated;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }
}

impl ValueHash for ApplicationVersionDescription {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.application_version_arn)
            .field(&self.application_name)
            .field(&self.description)
            .field(&self.version_label)
            .field(&self.source_build_information)
            .field(&self.build_arn)
            .field(&self.source_bundle)
            .field(&self.date_created)
            .field(&self.date_updated)
            .field(&self.status)
            .finish()
    }
}

impl fmt::Display for ApplicationVersionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ApplicationVersionArn", self.application_version_arn())
            .field("ApplicationName", self.application_name())
            .field("Description", self.description())
            .field("VersionLabel", self.version_label())
            .field("SourceBuildInformation", self.source_build_information())
            .field("BuildArn", self.build_arn())
            .field("SourceBundle", self.source_bundle())
            .field("DateCreated", self.date_created.as_ref())
            .field("DateUpdated", self.date_updated.as_ref())
            .field("Status", self.status())
            .finish()
    }
}
