//! Domain Value Objects
//!
//! Leaf types with no nested model objects: the string-backed enumerations
//! that make up the service's fixed vocabularies, and the key/value `Tag`.

mod application_version_status;
mod compute_type;
mod config_warning;
mod environment_status;
mod event_severity;
mod source;
mod tag;

pub use application_version_status::ApplicationVersionStatus;
pub use compute_type::ComputeType;
pub use config_warning::ConfigWarning;
pub use environment_status::{EnvironmentHealth, EnvironmentHealthStatus, EnvironmentStatus};
pub use event_severity::EventSeverity;
pub use source::{SourceRepository, SourceType};
pub use tag::Tag;
