//! Common test utilities for appdeploy contract and scenario tests.
//!
//! This module provides:
//! - `FakeDeploymentService`: In-memory stand-in for the remote service
//! - Fixtures: Reusable JSON payloads shaped like service responses

pub mod fake_service;

pub use fake_service::*;
pub use fixtures::*;
