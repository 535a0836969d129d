//! DescribeEnvironments - list environments, optionally filtered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::EnvironmentDescription;
use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// Input of DescribeEnvironments
///
/// Every filter is optional; an empty request describes every environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeEnvironmentsRequest {
    application_name: Option<String>,
    version_label: Option<String>,
    environment_ids: Option<Vec<String>>,
    environment_names: Option<Vec<String>>,
    include_deleted: Option<bool>,
    /// Only include environments deleted after this instant
    included_deleted_back_to: Option<DateTime<Utc>>,
    max_records: Option<i32>,
    next_token: Option<String>,
}

impl DescribeEnvironmentsRequest {
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

    pub fn with_environment_ids(mut self, ids: &[String]) -> Self {
        self.set_environment_ids(Some(ids));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_environment_ids_appended(mut self, ids: &[String]) -> Self {
        self.environment_ids.get_or_insert_with(Vec::new).extend_from_slice(ids);
        self
    }

    pub fn with_environment_id(mut self, id: impl Into<String>) -> Self {
        self.environment_ids
            .get_or_insert_with(Vec::new)
            .push(id.into());
        self
    }

    pub fn with_environment_names(mut self, names: &[String]) -> Self {
        self.set_environment_names(Some(names));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_environment_names_appended(mut self, names: &[String]) -> Self {
        self.environment_names.get_or_insert_with(Vec::new).extend_from_slice(names);
        self
    }

    pub fn with_environment_name(mut self, name: impl Into<String>) -> Self {
        self.environment_names
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    pub fn with_include_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = Some(include_deleted);
        self
    }

    pub fn with_included_deleted_back_to(mut self, back_to: DateTime<Utc>) -> Self {
        self.included_deleted_back_to = Some(back_to);
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

    pub fn environment_ids(&self) -> Option<&[String]> {
        self.environment_ids.as_deref()
    }

    pub fn environment_names(&self) -> Option<&[String]> {
        self.environment_names.as_deref()
    }

    pub fn include_deleted(&self) -> Option<bool> {
        self.include_deleted
    }

    pub fn included_deleted_back_to(&self) -> Option<DateTime<Utc>> {
        self.included_deleted_back_to
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

    pub fn set_environment_ids(&mut self, ids: Option<&[String]>) {
        self.environment_ids = ids.map(<[String]>::to_vec);
    }

    pub fn set_environment_names(&mut self, names: Option<&[String]>) {
        self.environment_names = names.map(<[String]>::to_vec);
    }

    pub fn set_include_deleted(&mut self, include_deleted: Option<bool>) {
        self.include_deleted = include_deleted;
    }

    pub fn set_included_deleted_back_to(&mut self, back_to: Option<DateTime<Utc>>) {
        self.included_deleted_back_to = back_to;
    }

    pub fn set_max_records(&mut self, max_records: Option<i32>) {
        self.max_records = max_records;
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }
}

impl ValueHash for DescribeEnvironmentsRequest {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.application_name)
            .field(&self.version_label)
            .field(&self.environment_ids)
            .field(&self.environment_names)
            .field(&self.include_deleted)
            .field(&self.included_deleted_back_to)
            .field(&self.max_records)
            .field(&self.next_token)
            .finish()
    }
}

impl fmt::Display for DescribeEnvironmentsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ApplicationName", self.application_name())
            .field("VersionLabel", self.version_label())
            .list("EnvironmentIds", self.environment_ids())
            .list("EnvironmentNames", self.environment_names())
            .field("IncludeDeleted", self.include_deleted.as_ref())
            .field("IncludedDeletedBackTo", self.included_deleted_back_to.as_ref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("NextToken", self.next_token())
            .finish()
    }
}

/// Output of DescribeEnvironments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeEnvironmentsResult {
    environments: Option<Vec<EnvironmentDescription>>,
    /// Present when more results are available
    next_token: Option<String>,
}

impl DescribeEnvironmentsResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environments(mut self, environments: &[EnvironmentDescription]) -> Self {
        self.set_environments(Some(environments));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_environments_appended(mut self, environments: &[EnvironmentDescription]) -> Self {
        self.environments.get_or_insert_with(Vec::new).extend_from_slice(environments);
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentDescription) -> Self {
        self.environments
            .get_or_insert_with(Vec::new)
            .push(environment);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn environments(&self) -> Option<&[EnvironmentDescription]> {
        self.environments.as_deref()
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_environments(&mut self, environments: Option<&[EnvironmentDescription]>) {
        self.environments = environments.map(<[EnvironmentDescription]>::to_vec);
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }
}

impl ValueHash for DescribeEnvironmentsResult {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.environments)
            .field(&self.next_token)
            .finish()
    }
}

impl fmt::Display for DescribeEnvironmentsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .list("Environments", self.environments())
            .field("NextToken", self.next_token())
            .finish()
    }
}
