//! Domain Ports (Interfaces)
//!
//! These traits define the boundary between the model and the transport
//! that carries it. No implementation ships with this crate.

pub mod deployment_service;
pub mod service_error;

pub use deployment_service::{DeploymentService, ServiceResult};
pub use service_error::{ServiceError, ServiceErrorCode};
