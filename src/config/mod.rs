//! Client configuration
//!
//! Settings the external transport reads. Resolution order:
//! 1. Environment variables (APPDEPLOY_*)
//! 2. Explicit config file
//! 3. Project config (.appdeploy/config.toml)
//! 4. User config ($XDG_CONFIG_HOME/appdeploy/config.toml)
//! 5. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{ClientConfig, ClientSection, EndpointConfig, HttpConfig, Protocol, DEFAULT_REGION};
