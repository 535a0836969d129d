//! TerminateEnvironment - shut an environment down.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::EnvironmentDescription;
use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// Input of TerminateEnvironment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminateEnvironmentRequest {
    environment_id: Option<String>,
    environment_name: Option<String>,
    /// Also delete the environment's resources (the service defaults to true)
    terminate_resources: Option<bool>,
    /// Terminate even if other environments link to this one
    force_terminate: Option<bool>,
}

impl TerminateEnvironmentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    pub fn with_terminate_resources(mut self, terminate_resources: bool) -> Self {
        self.terminate_resources = Some(terminate_resources);
        self
    }

    pub fn with_force_terminate(mut self, force_terminate: bool) -> Self {
        self.force_terminate = Some(force_terminate);
        self
    }

    pub fn environment_id(&self) -> Option<&str> {
        self.environment_id.as_deref()
    }

    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn terminate_resources(&self) -> Option<bool> {
        self.terminate_resources
    }

    pub fn force_terminate(&self) -> Option<bool> {
        self.force_terminate
    }

    pub fn set_environment_id(&mut self, environment_id: Option<String>) {
        self.environment_id = environment_id;
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    pub fn set_terminate_resources(&mut self, terminate_resources: Option<bool>) {
        self.terminate_resources = terminate_resources;
    }

    pub fn set_force_terminate(&mut self, force_terminate: Option<bool>) {
        self.force_terminate = force_terminate;
    }
}

impl ValueHash for TerminateEnvironmentRequest {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.environment_id)
            .field(&self.environment_name)
            .field(&self.terminate_resources)
            .field(&self.force_terminate)
            .finish()
    }
}

impl fmt::Display for TerminateEnvironmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("EnvironmentId", self.environment_id())
            .field("EnvironmentName", self.environment_name())
            .field("TerminateResources", self.terminate_resources.as_ref())
            .field("ForceTerminate", self.force_terminate.as_ref())
            .finish()
    }
}

/// Output of TerminateEnvironment: the environment's final description
pub type TerminateEnvironmentResult = EnvironmentDescription;
