//! Environment link - a named dependency on another environment in the same
//! group.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvironmentLink {
    link_name: Option<String>,
    environment_name: Option<String>,
}

impl EnvironmentLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_name(mut self, link_name: impl Into<String>) -> Self {
        self.link_name = Some(link_name.into());
        self
    }

    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    pub fn link_name(&self) -> Option<&str> {
        self.link_name.as_deref()
    }

    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn set_link_name(&mut self, link_name: Option<String>) {
        self.link_name = link_name;
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }
}

impl ValueHash for EnvironmentLink {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.link_name)
            .field(&self.environment_name)
            .finish()
    }
}

impl fmt::Display for EnvironmentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("LinkName", self.link_name())
            .field("EnvironmentName", self.environment_name())
            .finish()
    }
}
