//! CheckDNSAvailability - ask whether a CNAME prefix is free.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{FieldList, HashBuilder, ValueHash};

/// Input of CheckDNSAvailability
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDnsAvailabilityRequest {
    #[serde(rename = "CNAMEPrefix")]
    cname_prefix: Option<String>,
}

impl CheckDnsAvailabilityRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cname_prefix(mut self, cname_prefix: impl Into<String>) -> Self {
        self.cname_prefix = Some(cname_prefix.into());
        self
    }

    pub fn cname_prefix(&self) -> Option<&str> {
        self.cname_prefix.as_deref()
    }

    pub fn set_cname_prefix(&mut self, cname_prefix: Option<String>) {
        self.cname_prefix = cname_prefix;
    }
}

impl ValueHash for CheckDnsAvailabilityRequest {
    fn value_hash(&self) -> i32 {
        HashBuilder::new().field(&self.cname_prefix).finish()
    }
}

impl fmt::Display for CheckDnsAvailabilityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("CNAMEPrefix", self.cname_prefix())
            .finish()
    }
}

/// Output of CheckDNSAvailability
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckDnsAvailabilityResult {
    available: Option<bool>,
    /// The full domain name the prefix would resolve to, when available
    #[serde(rename = "FullyQualifiedCNAME")]
    fully_qualified_cname: Option<String>,
}

impl CheckDnsAvailabilityResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn with_fully_qualified_cname(mut self, cname: impl Into<String>) -> Self {
        self.fully_qualified_cname = Some(cname.into());
        self
    }

    pub fn available(&self) -> Option<bool> {
        self.available
    }

    pub fn fully_qualified_cname(&self) -> Option<&str> {
        self.fully_qualified_cname.as_deref()
    }

    pub fn set_available(&mut self, available: Option<bool>) {
        self.available = available;
    }

    pub fn set_fully_qualified_cname(&mut self, cname: Option<String>) {
        self.fully_qualified_cname = cname;
    }
}

impl ValueHash for CheckDnsAvailabilityResult {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.available)
            .field(&self.fully_qualified_cname)
            .finish()
    }
}

impl fmt::Display for CheckDnsAvailabilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .field("Available", self.available.as_ref())
            .field("FullyQualifiedCNAME", self.fully_qualified_cname())
            .finish()
    }
}
