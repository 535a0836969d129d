//! Storage location - a bucket/key pair in object storage.
//!
//! Used for uploaded source bundles. Once an application version has been
//! created from a location the service will not accept a different one for
//! the same version; that rule lives on the service side.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// Bucket and key of an object in storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageLocation {
    bucket: Option<String>,
    key: Option<String>,
}

impl StorageLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the bucket
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Builder: set the object key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_bucket(&mut self, bucket: Option<String>) {
        self.bucket = bucket;
    }

    pub fn set_key(&mut self, key: Option<String>) {
        self.key = key;
    }
}

impl ValueHash for StorageLocation {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.bucket)
            .field(&self.key)
            .finish()
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("Bucket", self.bucket())
            .field("Key", self.key())
            .finish()
    }
}
