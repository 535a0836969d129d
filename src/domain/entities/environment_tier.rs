//! Environment tier - whether an environment serves web traffic or processes
//! background work.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// Tier descriptor of an environment
///
/// Known combinations are `WebServer`/`Standard` and `Worker`/`SQS/HTTP`; the
/// object itself accepts any strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvironmentTier {
    name: Option<String>,
    #[serde(rename = "Type")]
    tier_type: Option<String>,
    version: Option<String>,
}

impl EnvironmentTier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the tier name (e.g. `WebServer`)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the tier type (e.g. `Standard`)
    pub fn with_tier_type(mut self, tier_type: impl Into<String>) -> Self {
        self.tier_type = Some(tier_type.into());
        self
    }

    /// Builder: set the tier version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tier_type(&self) -> Option<&str> {
        self.tier_type.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_tier_type(&mut self, tier_type: Option<String>) {
        self.tier_type = tier_type;
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }
}

impl ValueHash for EnvironmentTier {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.name)
            .field(&self.tier_type)
            .field(&self.version)
            .finish()
    }
}

impl fmt::Display for EnvironmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("Name", self.name())
            .field("Type", self.tier_type())
            .field("Version", self.version())
            .finish()
    }
}
