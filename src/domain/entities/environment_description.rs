//! Environment entity - the snapshot of an environment returned by every
//! environment-level operation.
//!
//! Status and health are passive snapshots; nothing here drives the
//! Launching → Updating → Ready → Terminating → Terminated progression.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EnvironmentLink, EnvironmentResourcesDescription, EnvironmentTier};
use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::{EnvironmentHealth, EnvironmentHealthStatus, EnvironmentStatus};
use crate::error::SdkResult;

/// Description of an environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvironmentDescription {
    environment_name: Option<String>,
    environment_id: Option<String>,
    application_name: Option<String>,
    version_label: Option<String>,
    solution_stack_name: Option<String>,
    platform_arn: Option<String>,
    template_name: Option<String>,
    description: Option<String>,
    /// Load balancer URL (web server tier) or instance IP (single instance)
    #[serde(rename = "EndpointURL")]
    endpoint_url: Option<String>,
    #[serde(rename = "CNAME")]
    cname: Option<String>,
    date_created: Option<DateTime<Utc>>,
    date_updated: Option<DateTime<Utc>>,
    status: Option<String>,
    /// Whether an in-progress operation on the environment can be aborted
    abortable_operation_in_progress: Option<bool>,
    health: Option<String>,
    health_status: Option<String>,
    resources: Option<EnvironmentResourcesDescription>,
    tier: Option<EnvironmentTier>,
    environment_links: Option<Vec<EnvironmentLink>>,
    environment_arn: Option<String>,
    operations_role: Option<String>,
}

impl EnvironmentDescription {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    pub fn with_environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
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

    pub fn with_solution_stack_name(mut self, solution_stack_name: impl Into<String>) -> Self {
        self.solution_stack_name = Some(solution_stack_name.into());
        self
    }

    pub fn with_platform_arn(mut self, platform_arn: impl Into<String>) -> Self {
        self.platform_arn = Some(platform_arn.into());
        self
    }

    pub fn with_template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_cname(mut self, cname: impl Into<String>) -> Self {
        self.cname = Some(cname.into());
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

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_abortable_operation_in_progress(mut self, abortable: bool) -> Self {
        self.abortable_operation_in_progress = Some(abortable);
        self
    }

    pub fn with_health(mut self, health: impl Into<String>) -> Self {
        self.health = Some(health.into());
        self
    }

    pub fn with_health_status(mut self, health_status: impl Into<String>) -> Self {
        self.health_status = Some(health_status.into());
        self
    }

    pub fn with_resources(mut self, resources: EnvironmentResourcesDescription) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_tier(mut self, tier: EnvironmentTier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Builder: replace the links with a copy of `links`
    pub fn with_environment_links(mut self, links: &[EnvironmentLink]) -> Self {
        self.set_environment_links(Some(links));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_environment_links_appended(mut self, links: &[EnvironmentLink]) -> Self {
        self.environment_links.get_or_insert_with(Vec::new).extend_from_slice(links);
        self
    }

    /// Builder: append one link, creating the list if it is absent
    pub fn with_environment_link(mut self, link: EnvironmentLink) -> Self {
        self.environment_links.get_or_insert_with(Vec::new).push(link);
        self
    }

    pub fn with_environment_arn(mut self, environment_arn: impl Into<String>) -> Self {
        self.environment_arn = Some(environment_arn.into());
        self
    }

    pub fn with_operations_role(mut self, operations_role: impl Into<String>) -> Self {
        self.operations_role = Some(operations_role.into());
        self
    }

    // --- Getters ---

    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn environment_id(&self) -> Option<&str> {
        self.environment_id.as_deref()
    }

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn version_label(&self) -> Option<&str> {
        self.version_label.as_deref()
    }

    pub fn solution_stack_name(&self) -> Option<&str> {
        self.solution_stack_name.as_deref()
    }

    pub fn platform_arn(&self) -> Option<&str> {
        self.platform_arn.as_deref()
    }

    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    pub fn cname(&self) -> Option<&str> {
        self.cname.as_deref()
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

    pub fn parsed_status(&self) -> Option<SdkResult<EnvironmentStatus>> {
        self.status.as_deref().map(str::parse::<EnvironmentStatus>)
    }

    pub fn abortable_operation_in_progress(&self) -> Option<bool> {
        self.abortable_operation_in_progress
    }

    pub fn health(&self) -> Option<&str> {
        self.health.as_deref()
    }

    pub fn parsed_health(&self) -> Option<SdkResult<EnvironmentHealth>> {
        self.health.as_deref().map(str::parse::<EnvironmentHealth>)
    }

    pub fn health_status(&self) -> Option<&str> {
        self.health_status.as_deref()
    }

    pub fn parsed_health_status(&self) -> Option<SdkResult<EnvironmentHealthStatus>> {
        self.health_status
            .as_deref()
            .map(str::parse::<EnvironmentHealthStatus>)
    }

    pub fn resources(&self) -> Option<&EnvironmentResourcesDescription> {
        self.resources.as_ref()
    }

    pub fn tier(&self) -> Option<&EnvironmentTier> {
        self.tier.as_ref()
    }

    pub fn environment_links(&self) -> Option<&[EnvironmentLink]> {
        self.environment_links.as_deref()
    }

    pub fn environment_arn(&self) -> Option<&str> {
        self.environment_arn.as_deref()
    }

    pub fn operations_role(&self) -> Option<&str> {
        self.operations_role.as_deref()
    }

    // --- Setters ---

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    pub fn set_environment_id(&mut self, environment_id: Option<String>) {
        self.environment_id = environment_id;
    }

    pub fn set_application_name(&mut self, application_name: Option<String>) {
        self.application_name = application_name;
    }

    pub fn set_version_label(&mut self, version_label: Option<String>) {
        self.version_label = version_label;
    }

    pub fn set_solution_stack_name(&mut self, solution_stack_name: Option<String>) {
        self.solution_stack_name = solution_stack_name;
    }

    pub fn set_platform_arn(&mut self, platform_arn: Option<String>) {
        self.platform_arn = platform_arn;
    }

    pub fn set_template_name(&mut self, template_name: Option<String>) {
        self.template_name = template_name;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_endpoint_url(&mut self, endpoint_url: Option<String>) {
        self.endpoint_url = endpoint_url;
    }

    pub fn set_cname(&mut self, cname: Option<String>) {
        self.cname = cname;
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

    pub fn set_abortable_operation_in_progress(&mut self, abortable: Option<bool>) {
        self.abortable_operation_in_progress = abortable;
    }

    pub fn set_health(&mut self, health: Option<String>) {
        self.health = health;
    }

    pub fn set_health_status(&mut self, health_status: Option<String>) {
        self.health_status = health_status;
    }

    pub fn set_resources(&mut self, resources: Option<EnvironmentResourcesDescription>) {
        self.resources = resources;
    }

    pub fn set_tier(&mut self, tier: Option<EnvironmentTier>) {
        self.tier = tier;
    }

    /// Replace the links with a copy of `links` (`None` clears them)
    pub fn set_environment_links(&mut self, links: Option<&[EnvironmentLink]>) {
        self.environment_links = links.map(<[EnvironmentLink]>::to_vec);
    }

    pub fn set_environment_arn(&mut self, environment_arn: Option<String>) {
        self.environment_arn = environment_arn;
    }

    pub fn set_operations_role(&mut self, operations_role: Option<String>) {
        self.operations_role = operations_role;
    }
}

impl ValueHash for EnvironmentDescription {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.environment_name)
            .field(&self.environment_id)
            .field(&self.application_name)
            .field(&self.version_label)
            .field(&self.solution_stack_name)
            .field(&self.platform_arn)
            .field(&self.template_name)
            .field(&self.description)
            .field(&self.endpoint_url)
            .field(&self.cname)
            .field(&self.date_created)
            .field(&self.date_updated)
            .field(&self.status)
            .field(&self.abortable_operation_in_progress)
            .field(&self.health)
            .field(&self.health_status)
            .field(&self.resources)
            .field(&self.tier)
            .field(&self.environment_links)
            .field(&self.environment_arn)
            .field(&self.operations_role)
            .finish()
    }
}

impl fmt::Display for EnvironmentDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("EnvironmentName", self.environment_name())
            .field("EnvironmentId", self.environment_id())
            .field("ApplicationName", self.application_name())
            .field("VersionLabel", self.version_label())
            .field("SolutionStackName", self.solution_stack_name())
            .field("PlatformArn", self.platform_arn())
            .field("TemplateName", self.template_name())
            .field("Description", self.description())
            .field("EndpointURL", self.endpoint_url())
            .field("CNAME", self.cname())
            .field("DateCreated", self.date_created.as_ref())
            .field("DateUpdated", self.date_updated.as_ref())
            .field("Status", self.status())
            .field(
                "AbortableOperationInProgress",
                self.abortable_operation_in_progress.as_ref(),
            )
            .field("Health", self.health())
            .field("HealthStatus", self.health_status())
            .field("Resources", self.resources())
            .field("Tier", self.tier())
            .list("EnvironmentLinks", self.environment_links())
            .field("EnvironmentArn", self.environment_arn())
            .field("OperationsRole", self.operations_role())
            .finish()
    }
}
