//! appdeploy - value-object model for an application-deployment service
//!
//! Every request, result and nested structure exchanged with the service is
//! a plain record: optional fields, fluent `with_*` builders, defensive list
//! copies, value equality and a stable hash. Transport, signing and retries
//! live behind the [`DeploymentService`] port and are not part of this crate.

#[macro_use]
mod macros;

pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use config::{ClientConfig, ConfigWarning, Protocol};
pub use domain::entities::*;
pub use domain::operations::*;
pub use domain::ports::{DeploymentService, ServiceError, ServiceErrorCode, ServiceResult};
pub use domain::support::ValueHash;
pub use domain::value_objects::{
    ApplicationVersionStatus, ComputeType, EnvironmentHealth, EnvironmentHealthStatus,
    EnvironmentStatus, EventSeverity, SourceRepository, SourceType, Tag,
};
pub use error::{SdkError, SdkResult};
