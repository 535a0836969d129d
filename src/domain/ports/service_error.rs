//! ServiceError - the structured failure a transport reports when the
//! service rejects a call.
//!
//! Constraint violations (too many environments, an operation already in
//! progress) are only ever detected remotely; this type carries what came
//! back so callers can branch on the code.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::support::{HashBuilder, ValueHash};
use crate::error::SdkResult;

string_enum! {
    /// Failure codes the service reports
    pub enum ServiceErrorCode {
        /// The caller's credentials lack a required permission
        InsufficientPrivileges => "InsufficientPrivilegesException",
        /// A parameter failed service-side validation
        InvalidRequest => "InvalidRequestException",
        /// Another operation is already running on the resource
        OperationInProgress => "OperationInProgressException",
        /// The named resource does not exist
        ResourceNotFound => "ResourceNotFoundException",
        TooManyApplications => "TooManyApplicationsException",
        TooManyApplicationVersions => "TooManyApplicationVersionsException",
        TooManyEnvironments => "TooManyEnvironmentsException",
        TooManyTags => "TooManyTagsException",
        /// The source bundle could not be removed from storage
        SourceBundleDeletion => "SourceBundleDeletionException",
        /// Unclassified failure inside the service
        Service => "ServiceException",
    }
}

/// A failure returned by the service for one call
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceError {
    /// See [`ServiceErrorCode`]
    error_code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    status_code: Option<i32>,
}

impl ServiceError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error with a code and message
    pub fn of(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new().with_error_code(code).with_message(message)
    }

    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_status_code(mut self, status_code: i32) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn parsed_error_code(&self) -> Option<SdkResult<ServiceErrorCode>> {
        self.error_code.as_deref().map(str::parse::<ServiceErrorCode>)
    }

    /// Returns true if the error carries exactly `code`
    pub fn is(&self, code: ServiceErrorCode) -> bool {
        self.error_code.as_deref() == Some(code.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn status_code(&self) -> Option<i32> {
        self.status_code
    }

    pub fn set_error_code(&mut self, error_code: Option<String>) {
        self.error_code = error_code;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn set_request_id(&mut self, request_id: Option<String>) {
        self.request_id = request_id;
    }

    pub fn set_status_code(&mut self, status_code: Option<i32>) {
        self.status_code = status_code;
    }
}

impl ValueHash for ServiceError {
    fn value_hash(&self) -> i32 {
        HashBuilder::new()
            .field(&self.error_code)
            .field(&self.message)
            .field(&self.request_id)
            .field(&self.status_code)
            .finish()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_code().unwrap_or("unknown service error"))?;
        if let Some(message) = self.message() {
            write!(f, ": {}", message)?;
        }
        match (self.status_code, self.request_id()) {
            (Some(status), Some(id)) => write!(f, " (status {}, request {})", status, id),
            (Some(status), None) => write!(f, " (status {})", status),
            (None, Some(id)) => write!(f, " (request {})", id),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for ServiceError {}
