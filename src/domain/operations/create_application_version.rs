//! CreateApplicationVersion - register a labelled revision of an application.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::{
    ApplicationVersionDescription, BuildConfiguration, SourceBuildInformation, StorageLocation,
};
use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::Tag;

/// Input of CreateApplicationVersion
///
/// Give either `source_bundle` or `source_build_information`, not both; give
/// neither to deploy the sample application. The service enforces this, the
/// request does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateApplicationVersionRequest {
    application_name: Option<String>,
    version_label: Option<String>,
    description: Option<String>,
    source_build_information: Option<SourceBuildInformation>,
    source_bundle: Option<StorageLocation>,
    build_configuration: Option<BuildConfiguration>,
    /// Create the application too if it does not exist yet
    auto_create_application: Option<bool>,
    /// Pre-process and validate the bundle before it is deployable
    process: Option<bool>,
    tags: Option<Vec<Tag>>,
}

impl CreateApplicationVersionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request for `application_name` at `version_label`
    pub fn for_version(
        application_name: impl Into<String>,
        version_label: impl Into<String>,
    ) -> Self {
        Self::new()
            .with_application_name(application_name)
            .with_version_label(version_label)
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

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source_build_information(mut self, info: SourceBuildInformation) -> Self {
        self.source_build_information = Some(info);
        self
    }

    pub fn with_source_bundle(mut self, source_bundle: StorageLocation) -> Self {
        self.source_bundle = Some(source_bundle);
        self
    }

    pub fn with_build_configuration(mut self, build_configuration: BuildConfiguration) -> Self {
        self.build_configuration = Some(build_configuration);
        self
    }

    pub fn with_auto_create_application(mut self, auto_create: bool) -> Self {
        self.auto_create_application = Some(auto_create);
        self
    }

    pub fn with_process(mut self, process: bool) -> Self {
        self.process = Some(process);
        self
    }

    /// Builder: replace the tags with a copy of `tags`
    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.set_tags(Some(tags));
        self
    }

    /// Builder: append every item, keeping whatever is already present
    pub fn with_tags_appended(mut self, tags: &[Tag]) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend_from_slice(tags);
        self
    }

    /// Builder: append one tag, creating the list if it is absent
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }

    // --- Getters ---

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn version_label(&self) -> Option<&str> {
        self.version_label.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn source_build_information(&self) -> Option<&SourceBuildInformation> {
        self.source_build_information.as_ref()
    }

    pub fn source_bundle(&self) -> Option<&StorageLocation> {
        self.source_bundle.as_ref()
    }

    pub fn build_configuration(&self) -> Option<&BuildConfiguration> {
        self.build_configuration.as_ref()
    }

    pub fn auto_create_application(&self) -> Option<bool> {
        self.auto_create_application
    }

    pub fn process(&self) -> Option<bool> {
        self.process
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    // --- Setters ---

    pub fn set_application_name(&mut self, application_name: Option<String>) {
        self.application_name = application_name;
    }

    pub fn set_version_label(&mut self, version_label: Option<String>) {
        self.version_label = version_label;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_source_build_information(&mut self, info: Option<SourceBuildInformation>) {
        self.source_build_information = info;
    }

    pub fn set_source_bundle(&mut self, source_bundle: Option<StorageLocation>) {
        self.source_bundle = source_bundle;
    }

    pub fn set_build_configuration(&mut self, build_configuration: Option<BuildConfiguration>) {
        self.build_configuration = build_configuration;
    }

    pub fn set_auto_create_application(&mut self, auto_create: Option<bool>) {
        self.auto_create_application = auto_create;
    }

    pub fn set_process(&mut self, process: Option<bool>) {
        self.process = process;
    }

    /// Replace the tags with a copy of `tags` (`None` clears them)
    pub fn set_tags(&mut self, tags: Option<&[Tag]>) {
        self.tags = tags.map(<[Tag]>::to_vec);
    }
}

impl ValueHash for CreateApplicationVersionRequest {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.application_name)
            .field(&self.version_label)
            .field(&self.description)
            .field(&self.source_build_information)
            .field(&self.source_bundle)
            .field(&self.build_configuration)
            .field(&self.auto_create_application)
            .field(&self.process)
            .field(&self.tags)
            .finish()
    }
}

impl fmt::Display for CreateApplicationVersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ApplicationName", self.application_name())
            .field("VersionLabel", self.version_label())
            .field("Description", self.description())
            .field("SourceBuildInformation", self.source_build_information())
            .field("SourceBundle", self.source_bundle())
            .field("BuildConfiguration", self.build_configuration())
            .field("AutoCreateApplication", self.auto_create_application.as_ref())
            .field("Process", self.process.as_ref())
            .list("Tags", self.tags())
            .finish()
    }
}

/// Output of CreateApplicationVersion
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateApplicationVersionResult {
    application_version: Option<ApplicationVersionDescription>,
}

impl CreateApplicationVersionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_application_version(mut self, version: ApplicationVersionDescription) -> Self {
        self.application_version = Some(version);
        self
    }

    pub fn application_version(&self) -> Option<&ApplicationVersionDescription> {
        self.application_version.as_ref()
    }

    pub fn set_application_version(&mut self, version: Option<ApplicationVersionDescription>) {
        self.application_version = version;
    }
}

impl ValueHash for CreateApplicationVersionResult {
    fn value_hash(&self) -> i32 {
        HashBuilder::new().field(&self.application_version).finish()
    }
}

impl fmt::Display for CreateApplicationVersionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ApplicationVersion", self.application_version())
            .finish()
    }
}
