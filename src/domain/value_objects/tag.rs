//! Tag value object - a key/value label attached to a resource.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// A key/value label
///
/// Both halves are optional; the service requires a key but that is checked
/// remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    key: Option<String>,
    value: Option<String>,
}

impl Tag {
    /// Create an empty tag
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tag with both key and value set
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }

    /// The tag key
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: Option<String>) {
        self.key = key;
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The tag value
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl ValueHash for Tag {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.key)
            .field(&self.value)
            .finish()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("Key", self.key())
            .field("Value", self.value())
            .finish()
    }
}
