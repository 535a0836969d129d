//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SdkError, SdkResult};

use super::types::{ClientConfig, Protocol};

pub use crate::domain::value_objects::ConfigWarning;

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SdkResult<(ClientConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: ClientConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SdkError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|key_path| {
            let (_, key) = split_key_path(&key_path);
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key_path),
                suggestion: suggest_key(&key_path),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!(%warning, "ignoring unknown configuration key");
    }
    tracing::debug!(file = %path.display(), "loaded client configuration");

    Ok((config, warnings))
}

/// Load from an explicit file, the project config, the user config, or defaults
///
/// An explicit path must exist and parse. Project and user files are only
/// consulted when present; a malformed one is still an error.
pub fn load_or_default(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> SdkResult<ClientConfig> {
    if let Some(path) = explicit {
        return Ok(with_env_overrides(ClientConfig::load(path)?));
    }

    let candidates = project_root
        .map(ClientConfig::project_config_path)
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.exists() {
            return Ok(with_env_overrides(ClientConfig::load(&candidate)?));
        }
    }

    Ok(with_env_overrides(ClientConfig::default()))
}

/// Apply environment variable overrides (APPDEPLOY_* prefix)
pub fn with_env_overrides(config: ClientConfig) -> ClientConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from `lookup`, which maps a variable name to its value
pub(crate) fn apply_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("APPDEPLOY_ENDPOINT") {
        tracing::debug!(%url, "endpoint overridden from environment");
        config.endpoint.url = Some(url);
    }

    if let Some(region) = lookup("APPDEPLOY_REGION") {
        tracing::debug!(%region, "region overridden from environment");
        config.endpoint.region = Some(region);
    }

    if let Some(value) = lookup("APPDEPLOY_PROTOCOL") {
        match Protocol::parse(&value) {
            Some(protocol) => config.http.protocol = protocol,
            None => tracing::warn!(%value, "ignoring unrecognized APPDEPLOY_PROTOCOL"),
        }
    }

    if let Some(ms) = parse_millis(&lookup, "APPDEPLOY_CONNECT_TIMEOUT_MS") {
        config.http.connect_timeout_ms = ms;
    }

    if let Some(ms) = parse_millis(&lookup, "APPDEPLOY_SOCKET_TIMEOUT_MS") {
        config.http.socket_timeout_ms = ms;
    }

    config
}

fn parse_millis<F>(lookup: &F, name: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name)?;
    match value.trim().parse() {
        Ok(ms) => Some(ms),
        Err(_) => {
            tracing::warn!(variable = name, %value, "ignoring non-numeric timeout");
            None
        }
    }
}

/// User config location: `$XDG_CONFIG_HOME/appdeploy/config.toml`, falling
/// back to the platform config directory.
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("appdeploy").join("config.toml"))
}

/// Split a dotted key path into its table and the final key
fn split_key_path(key_path: &str) -> (&str, &str) {
    key_path.rsplit_once('.').unwrap_or(("", key_path))
}

/// Locate `key_path` in the TOML source, tracking `[table]` headers so a key
/// is only matched inside the table it was reported for.
fn find_line_number(content: &str, key_path: &str) -> Option<usize> {
    let (table, key) = split_key_path(key_path);
    let mut current = "";

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            current = header.trim();
            if current == key_path {
                return Some(index + 1);
            }
            continue;
        }

        let assigned = trimmed.split('=').next().map(str::trim);
        if current == table && trimmed.contains('=') && assigned == Some(key) {
            return Some(index + 1);
        }
    }

    // Dotted or inline keys: settle for the first mention.
    content
        .lines()
        .position(|line| line.contains(key))
        .map(|i| i + 1)
}

/// Suggest a known key from the same table as `key_path`
pub(crate) fn suggest_key(key_path: &str) -> Option<String> {
    let (table, unknown) = split_key_path(key_path);
    let candidates: &[&str] = match table {
        "" => &["endpoint", "http", "client"],
        "endpoint" => &["url", "region"],
        "http" => &[
            "protocol",
            "connect_timeout_ms",
            "socket_timeout_ms",
            "max_connections",
        ],
        "client" => &["user_agent_suffix", "signing_region"],
        _ => return None,
    };

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates.iter().copied().filter(|c| *c != unknown) {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
