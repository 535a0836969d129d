//! Source build information - where to fetch application source that the
//! service builds itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};
use crate::domain::value_objects::{SourceRepository, SourceType};
use crate::error::SdkResult;

/// Location of application source in a repository or object store
///
/// `source_type` and `source_repository` are enumeration-backed: they accept
/// either a [`SourceType`] / [`SourceRepository`] or any raw string, and keep
/// whatever string was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SourceBuildInformation {
    source_type: Option<String>,
    source_repository: Option<String>,
    /// `repository/commit-id` for git sources, `bucket/key` for object storage
    source_location: Option<String>,
}

impl SourceBuildInformation {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    /// Builder: set the source type (a [`SourceType`] or raw string)
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    /// Builder: set the hosting repository (a [`SourceRepository`] or raw string)
    pub fn with_source_repository(mut self, source_repository: impl Into<String>) -> Self {
        self.source_repository = Some(source_repository.into());
        self
    }

    /// Builder: set the source location
    pub fn with_source_location(mut self, source_location: impl Into<String>) -> Self {
        self.source_location = Some(source_location.into());
        self
    }

    // --- Getters ---

    pub fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }

    /// Resolve the stored source type against the known vocabulary
    pub fn parsed_source_type(&self) -> Option<SdkResult<SourceType>> {
        self.source_type.as_deref().map(str::parse::<SourceType>)
    }

    pub fn source_repository(&self) -> Option<&str> {
        self.source_repository.as_deref()
    }

    /// Resolve the stored repository against the known vocabulary
    pub fn parsed_source_repository(&self) -> Option<SdkResult<SourceRepository>> {
        self.source_repository
            .as_deref()
            .map(str::parse::<SourceRepository>)
    }

    pub fn source_location(&self) -> Option<&str> {
        self.source_location.as_deref()
    }

    // --- Setters ---

    pub fn set_source_type(&mut self, source_type: Option<String>) {
        self.source_type = source_type;
    }

    pub fn set_source_repository(&mut self, source_repository: Option<String>) {
        self.source_repository = source_repository;
    }

    pub fn set_source_location(&mut self, source_location: Option<String>) {
        self.source_location = source_location;
    }
}

impl ValueHash for SourceBuildInformation {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.source_type)
            .field(&self.source_repository)
            .field(&self.source_location)
            .finish()
    }
}

impl fmt::Display for SourceBuildInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("SourceType", self.source_type())
            .field("SourceRepository", self.source_repository())
            .field("SourceLocation", self.source_location())
            .finish()
    }
}
