//! CreateEnvironment - launch a new environment for an application.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::{
    ConfigurationOptionSetting, EnvironmentDescription, EnvironmentTier, OptionSpecification,
};
use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::Tag;

/// Input of CreateEnvironment
///
/// Exactly one of `template_name`, `solution_stack_name` and `platform_arn` is
/// expected by the service; none is required locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateEnvironmentRequest {
    application_name: Option<String>,
    environment_name: Option<String>,
    group_name: Option<String>,
    description: Option<String>,
    #[serde(rename = "CNAMEPrefix")]
    cname_prefix: Option<String>,
    tier: Option<EnvironmentTier>,
    tags: Option<Vec<Tag>>,
    version_label: Option<String>,
    template_name: Option<String>,
    solution_stack_name: Option<String>,
    platform_arn: Option<String>,
    option_settings: Option<Vec<ConfigurationOptionSetting>>,
    options_to_remove: Option<Vec<OptionSpecification>>,
    operations_role: Option<String>,
}

impl CreateEnvironmentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request for `environment_name` within `application_name`
    pub fn for_environment(
        application_name: impl Into<String>,
        environment_name: impl Into<String>,
    ) -> Self {
        Self::new()
            .with_application_name(application_name)
            .with_environment_name(environment_name)
    }

    // --- Builders ---

    pub fn with_application_name(mut self, application_name: impl Into<String>) -> Self {
        self.application_name = Some(application_name.into());
        self
    }

    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_cname_prefix(mut self, cname_prefix: impl Into<String>) -> Self {
        self.cname_prefix = Some(cname_prefix.into());
        self
    }

    pub fn with_tier(mut self, tier: EnvironmentTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.set_tags(Some(tags));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_tags_appended(mut self, tags: &[Tag]) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend_from_slice(tags);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
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

    pub fn with_solution_stack_name(mut self, solution_stack_name: impl Into<String>) -> Self {
        self.solution_stack_name = Some(solution_stack_name.into());
        self
    }

    pub fn with_platform_arn(mut self, platform_arn: impl Into<String>) -> Self {
        self.platform_arn = Some(platform_arn.into());
        self
    }

    pub fn with_option_settings(mut self, settings: &[ConfigurationOptionSetting]) -> Self {
        self.set_option_settings(Some(settings));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_option_settings_appended(mut self, settings: &[ConfigurationOptionSetting]) -> Self {
        self.option_settings.get_or_insert_with(Vec::new).extend_from_slice(settings);
        self
    }

    pub fn with_option_setting(mut self, setting: ConfigurationOptionSetting) -> Self {
        self.option_settings
            .get_or_insert_with(Vec::new)
            .push(setting);
        self
    }

    pub fn with_options_to_remove(mut self, options: &[OptionSpecification]) -> Self {
        self.set_options_to_remove(Some(options));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_options_to_remove_appended(mut self, options: &[OptionSpecification]) -> Self {
        self.options_to_remove.get_or_insert_with(Vec::new).extend_from_slice(options);
        self
    }

    pub fn with_option_to_remove(mut self, option: OptionSpecification) -> Self {
        self.options_to_remove
            .get_or_insert_with(Vec::new)
            .push(option);
        self
    }

    pub fn with_operations_role(mut self, operations_role: impl Into<String>) -> Self {
        self.operations_role = Some(operations_role.into());
        self
    }

    // --- Getters ---

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn cname_prefix(&self) -> Option<&str> {
        self.cname_prefix.as_deref()
    }

    pub fn tier(&self) -> Option<&EnvironmentTier> {
        self.tier.as_ref()
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    pub fn version_label(&self) -> Option<&str> {
        self.version_label.as_deref()
    }

    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    pub fn solution_stack_name(&self) -> Option<&str> {
        self.solution_stack_name.as_deref()
    }

    pub fn platform_arn(&self) -> Option<&str> {
        self.platform_arn.as_deref()
    }

    pub fn option_settings(&self) -> Option<&[ConfigurationOptionSetting]> {
        self.option_settings.as_deref()
    }

    pub fn options_to_remove(&self) -> Option<&[OptionSpecification]> {
        self.options_to_remove.as_deref()
    }

    pub fn operations_role(&self) -> Option<&str> {
        self.operations_role.as_deref()
    }

    // --- Setters ---

    pub fn set_application_name(&mut self, application_name: Option<String>) {
        self.application_name = application_name;
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_cname_prefix(&mut self, cname_prefix: Option<String>) {
        self.cname_prefix = cname_prefix;
    }

    pub fn set_tier(&mut self, tier: Option<EnvironmentTier>) {
        self.tier = tier;
    }

    pub fn set_tags(&mut self, tags: Option<&[Tag]>) {
        self.tags = tags.map(<[Tag]>::to_vec);
    }

    pub fn set_version_label(&mut self, version_label: Option<String>) {
        self.version_label = version_label;
    }

    pub fn set_template_name(&mut self, template_name: Option<String>) {
        self.template_name = template_name;
    }

    pub fn set_solution_stack_name(&mut self, solution_stack_name: Option<String>) {
        self.solution_stack_name = solution_stack_name;
    }

    pub fn set_platform_arn(&mut self, platform_arn: Option<String>) {
        self.platform_arn = platform_arn;
    }

    pub fn set_option_settings(&mut self, settings: Option<&[ConfigurationOptionSetting]>) {
        self.option_settings = settings.map(<[ConfigurationOptionSetting]>::to_vec);
    }

    pub fn set_options_to_remove(&mut self, options: Option<&[OptionSpecification]>) {
        self.options_to_remove = options.map(<[OptionSpecification]>::to_vec);
    }

    pub fn set_operations_role(&mut self, operations_role: Option<String>) {
        self.operations_role = operations_role;
    }
}

impl ValueHash for CreateEnvironmentRequest {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.application_name)
            .field(&self.environment_name)
            .field(&self.group_name)
            .field(&self.description)
            .field(&self.cname_prefix)
            .field(&self.tier)
            .field(&self.tags)
            .field(&self.version_label)
            .field(&self.template_name)
            .field(&self.solution_stack_name)
            .field(&self.platform_arn)
            .field(&self.option_settings)
            .field(&self.options_to_remove)
            .field(&self.operations_role)
            .finish()
    }
}

impl fmt::Display for CreateEnvironmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ApplicationName", self.application_name())
            .field("EnvironmentName", self.environment_name())
            .field("GroupName", self.group_name())
            .field("Description", self.description())
            .field("CNAMEPrefix", self.cname_prefix())
            .field("Tier", self.tier())
            .list("Tags", self.tags())
            .field("VersionLabel", self.version_label())
            .field("TemplateName", self.template_name())
            .field("SolutionStackName", self.solution_stack_name())
            .field("PlatformArn", self.platform_arn())
            .list("OptionSettings", self.option_settings())
            .list("OptionsToRemove", self.options_to_remove())
            .field("OperationsRole", self.operations_role())
            .finish()
    }
}

/// Output of CreateEnvironment: the new environment's description
pub type CreateEnvironmentResult = EnvironmentDescription;
