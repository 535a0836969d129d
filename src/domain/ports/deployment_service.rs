//! DeploymentService port - the remote operations a transport must provide
//!
//! This trait lets callers (and tests) depend on the operation set without
//! knowing how requests are signed, serialized or sent.

use super::ServiceError;
use crate::domain::operations::{
    CheckDnsAvailabilityRequest, CheckDnsAvailabilityResult, CreateApplicationVersionRequest,
    CreateApplicationVersionResult, CreateEnvironmentRequest, CreateEnvironmentResult,
    DescribeEnvironmentsRequest, DescribeEnvironmentsResult, DescribeEventsRequest,
    DescribeEventsResult, TerminateEnvironmentRequest, TerminateEnvironmentResult,
    UpdateEnvironmentRequest, UpdateEnvironmentResult,
};

/// Result type for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Abstract client for the deployment service
///
/// Implemented outside this crate by an HTTP transport.
pub trait DeploymentService {
    /// Register a new application version
    fn create_application_version(
        &self,
        request: &CreateApplicationVersionRequest,
    ) -> ServiceResult<CreateApplicationVersionResult>;

    /// Launch an environment
    fn create_environment(
        &self,
        request: &CreateEnvironmentRequest,
    ) -> ServiceResult<CreateEnvironmentResult>;

    /// Deploy a version or change configuration on an existing environment
    fn update_environment(
        &self,
        request: &UpdateEnvironmentRequest,
    ) -> ServiceResult<UpdateEnvironmentResult>;

    /// Shut an environment down
    fn terminate_environment(
        &self,
        request: &TerminateEnvironmentRequest,
    ) -> ServiceResult<TerminateEnvironmentResult>;

    /// List environments matching the request's filters
    fn describe_environments(
        &self,
        request: &DescribeEnvironmentsRequest,
    ) -> ServiceResult<DescribeEnvironmentsResult>;

    /// Read one page of the event log
    fn describe_events(&self, request: &DescribeEventsRequest)
        -> ServiceResult<DescribeEventsResult>;

    /// Check whether a CNAME prefix is available
    fn check_dns_availability(
        &self,
        request: &CheckDnsAvailabilityRequest,
    ) -> ServiceResult<CheckDnsAvailabilityResult>;
}
