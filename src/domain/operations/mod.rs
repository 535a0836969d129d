//! Operation messages
//!
//! One module per remote operation, each holding the request and the result
//! exchanged through [`DeploymentService`](crate::domain::ports::DeploymentService).

mod check_dns_availability;
mod create_application_version;
mod create_environment;
mod describe_environments;
mod describe_events;
mod terminate_environment;
mod update_environment;

pub use check_dns_availability::{CheckDnsAvailabilityRequest, CheckDnsAvailabilityResult};
pub use create_application_version::{
    CreateApplicationVersionRequest, CreateApplicationVersionResult,
};
pub use create_environment::{CreateEnvironmentRequest, CreateEnvironmentResult};
pub use describe_environments::{DescribeEnvironmentsRequest, DescribeEnvironmentsResult};
pub use describe_events::{DescribeEventsRequest, DescribeEventsResult};
pub use terminate_environment::{TerminateEnvironmentRequest, TerminateEnvironmentResult};
pub use update_environment::{UpdateEnvironmentRequest, UpdateEnvironmentResult};
