//! Build configuration - settings for the managed build that turns source
//! into a deployable bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::ComputeType;
use crate::error::SdkResult;

/// Settings for building an application version from source
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BuildConfiguration {
    /// Name of the artifact the build produces
    artifact_name: Option<String>,
    /// Role the build service assumes
    build_service_role: Option<String>,
    /// Container size, see [`ComputeType`]
    compute_type: Option<String>,
    /// Container image used for the build
    image: Option<String>,
    /// Minutes before an unfinished build is timed out (service default: 60)
    timeout_in_minutes: Option<i32>,
}

impl BuildConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn with_artifact_name(mut self, artifact_name: impl Into<String>) -> Self {
        self.artifact_name = Some(artifact_name.into());
        self
    }

    pub fn with_build_service_role(mut self, build_service_role: impl Into<String>) -> Self {
        self.build_service_role = Some(build_service_role.into());
        self
    }

    /// Builder: set the compute type (a [`ComputeType`] or raw string)
    pub fn with_compute_type(mut self, compute_type: impl Into<String>) -> Self {
        self.compute_type = Some(compute_type.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_timeout_in_minutes(mut self, timeout_in_minutes: i32) -> Self {
        self.timeout_in_minutes = Some(timeout_in_minutes);
        self
    }

    // --- Getters ---

    pub fn artifact_name(&self) -> Option<&str> {
        self.artifact_name.as_deref()
    }

    pub fn build_service_role(&self) -> Option<&str> {
        self.build_service_role.as_deref()
    }

    pub fn compute_type(&self) -> Option<&str> {
        self.compute_type.as_deref()
    }

    /// Resolve the stored compute type against the known sizes
    pub fn parsed_compute_type(&self) -> Option<SdkResult<ComputeType>> {
        self.compute_type.as_deref().map(str::parse::<ComputeType>)
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn timeout_in_minutes(&self) -> Option<i32> {
        self.timeout_in_minutes
    }

    // --- Setters ---

    pub fn set_artifact_name(&mut self, artifact_name: Option<String>) {
        self.artifact_name = artifact_name;
    }

    pub fn set_build_service_role(&mut self, build_service_role: Option<String>) {
        self.build_service_role = build_service_role;
    }

    pub fn set_compute_type(&mut self, compute_type: Option<String>) {
        self.compute_type = compute_type;
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    pub fn set_timeout_in_minutes(&mut self, timeout_in_minutes: Option<i32>) {
        self.timeout_in_minutes = timeout_in_minutes;
    }
}

impl ValueHash for BuildConfiguration {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.artifact_name)
            .field(&self.build_service_role)
            .field(&self.compute_type)
            .field(&self.image)
            .field(&self.timeout_in_minutes)
            .finish()
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ArtifactName", self.artifact_name())
            .field("BuildServiceRole", self.build_service_role())
            .field("ComputeType", self.compute_type())
            .field("Image", self.image())
            .field("TimeoutInMinutes", self.timeout_in_minutes.as_ref())
            .finish()
    }
}
