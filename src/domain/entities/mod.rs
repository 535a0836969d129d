//! Domain Entities
//!
//! Nested composites and the descriptions the service reports back.
//! - `StorageLocation` - Where a source bundle lives
//! - `SourceBuildInformation` / `BuildConfiguration` - How a version is built
//! - `EnvironmentTier`, `ConfigurationOptionSetting`, `OptionSpecification` - Environment inputs
//! - `ApplicationVersionDescription`, `EnvironmentDescription`, `EventDescription` - Service snapshots

mod application_version;
mod build_configuration;
mod configuration_option;
mod environment_description;
mod environment_link;
mod environment_resources;
mod environment_tier;
mod event_description;
mod source_build_information;
mod storage_location;

pub use application_version::ApplicationVersionDescription;
pub use build_configuration::BuildConfiguration;
pub use configuration_option::{ConfigurationOptionSetting, OptionSpecification};
pub use environment_description::EnvironmentDescription;
pub use environment_link::EnvironmentLink;
pub use environment_resources::{EnvironmentResourcesDescription, Listener, LoadBalancerDescription};
pub use environment_tier::EnvironmentTier;
pub use event_description::EventDescription;
pub use source_build_information::SourceBuildInformation;
pub use storage_location::StorageLocation;
