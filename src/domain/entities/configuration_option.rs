//! Configuration option entities - individual settings applied to (or removed
//! from) an environment's configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// A configuration option and the value to give it
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigurationOptionSetting {
    /// Resource the option applies to, for options scoped to one resource
    resource_name: Option<String>,
    namespace: Option<String>,
    option_name: Option<String>,
    value: Option<String>,
}

impl ConfigurationOptionSetting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a setting for `namespace`/`option_name` with a value
    pub fn of(
        namespace: impl Into<String>,
        option_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new()
            .with_namespace(namespace)
            .with_option_name(option_name)
            .with_value(value)
    }

    pub fn with_resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_option_name(mut self, option_name: impl Into<String>) -> Self {
        self.option_name = Some(option_name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn option_name(&self) -> Option<&str> {
        self.option_name.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_resource_name(&mut self, resource_name: Option<String>) {
        self.resource_name = resource_name;
    }

    pub fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    pub fn set_option_name(&mut self, option_name: Option<String>) {
        self.option_name = option_name;
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl ValueHash for ConfigurationOptionSetting {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.resource_name)
            .field(&self.namespace)
            .field(&self.option_name)
            .field(&self.value)
            .finish()
    }
}

impl fmt::Display for ConfigurationOptionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ResourceName", self.resource_name())
            .field("Namespace", self.namespace())
            .field("OptionName", self.option_name())
            .field("Value", self.value())
            .finish()
    }
}

/// Identifies a configuration option without a value (used for removal)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OptionSpecification {
    resource_name: Option<String>,
    namespace: Option<String>,
    option_name: Option<String>,
}

impl OptionSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a specification for `namespace`/`option_name`
    pub fn of(namespace: impl Into<String>, option_name: impl Into<String>) -> Self {
        Self::new()
            .with_namespace(namespace)
            .with_option_name(option_name)
    }

    pub fn with_resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_option_name(mut self, option_name: impl Into<String>) -> Self {
        self.option_name = Some(option_name.into());
        self
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn option_name(&self) -> Option<&str> {
        self.option_name.as_deref()
    }

    pub fn set_resource_name(&mut self, resource_name: Option<String>) {
        self.resource_name = resource_name;
    }

    pub fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    pub fn set_option_name(&mut self, option_name: Option<String>) {
        self.option_name = option_name;
    }
}

impl ValueHash for OptionSpecification {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.resource_name)
            .field(&self.namespace)
            .field(&self.option_name)
            .finish()
    }
}

impl fmt::Display for OptionSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("ResourceName", self.resource_name())
            .field("Namespace", self.namespace())
            .field("OptionName", self.option_name())
            .finish()
    }
}
