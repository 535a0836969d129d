//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SdkResult;

use super::loader::{self, ConfigWarning};

/// Region used when neither the file nor the environment names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EndpointConfig {
    /// Full endpoint URL; takes precedence over the region-derived default
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
}

/// Wire protocol used by the transport
///
/// Written lowercase; read case-insensitively, like `APPDEPLOY_PROTOCOL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Https,
    Http,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        }
    }

    /// Parse a protocol name case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "https" => Some(Protocol::Https),
            "http" => Some(Protocol::Http),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Protocol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Protocol::parse(&value)
            .ok_or_else(|| serde::de::Error::unknown_variant(&value, &["https", "http"]))
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP transport tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub protocol: Protocol,

    #[serde(default = "default_timeout_ms")]
    pub connect_timeout_ms: u64,

    #[serde(default = "default_timeout_ms")]
    pub socket_timeout_ms: u64,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::default(),
            connect_timeout_ms: default_timeout_ms(),
            socket_timeout_ms: default_timeout_ms(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    15_000
}

fn default_max_connections() -> u32 {
    10
}

/// Client identification and signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientSection {
    /// Appended to the transport's user agent
    #[serde(default)]
    pub user_agent_suffix: Option<String>,

    /// Region to sign requests for, when it differs from the endpoint region
    #[serde(default)]
    pub signing_region: Option<String>,
}

/// Client configuration handed to the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub client: ClientSection,
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SdkResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> SdkResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the configuration for `project_root`
    ///
    /// Uses the first of `explicit`, the project config and the user config
    /// that exists, falling back to defaults, then applies `APPDEPLOY_*`
    /// environment overrides.
    pub fn load_or_default(explicit: Option<&Path>, project_root: Option<&Path>) -> SdkResult<Self> {
        loader::load_or_default(explicit, project_root)
    }

    /// Apply `APPDEPLOY_*` environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Effective signing region
    pub fn region(&self) -> &str {
        self.endpoint.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Effective endpoint URL
    ///
    /// An explicit `endpoint.url` wins; otherwise the URL is derived from the
    /// protocol and region.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint.url {
            Some(url) => url.clone(),
            None => format!(
                "{}://appdeploy.{}.example.com",
                self.http.protocol,
                self.region()
            ),
        }
    }

    /// Region requests are signed for
    pub fn signing_region(&self) -> &str {
        self.client
            .signing_region
            .as_deref()
            .unwrap_or_else(|| self.region())
    }

    /// Project config location under `root`
    pub fn project_config_path(root: &Path) -> PathBuf {
        root.join(".appdeploy").join("config.toml")
    }
}
