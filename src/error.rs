//! Error types for appdeploy
//!
//! Uses `thiserror` for library errors. The model layer itself has a single
//! failure mode (resolving an enumeration from an unrecognized string); the
//! remaining variants belong to client configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appdeploy operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Main error type for appdeploy operations
#[derive(Error, Debug)]
pub enum SdkError {
    /// A string did not match any canonical value of an enumeration
    #[error("unrecognized value '{value}' for enumeration {type_name}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    pub(crate) fn unknown_enum_value(type_name: &'static str, value: &str) -> Self {
        tracing::debug!(type_name, value, "unrecognized enumeration value");
        SdkError::UnknownEnumValue {
            type_name,
            value: value.to_string(),
        }
    }

    /// Returns true if this is the unrecognized enumeration value failure
    pub fn is_unknown_enum_value(&self) -> bool {
        matches!(self, SdkError::UnknownEnumValue { .. })
    }
}
