// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::consts::{
    DEFAULT_BIND_ADDRESS, DEFAULT_LOG_FILTER, DEFAULT_MAX_EDGES, DEFAULT_MAX_VERTICES, DEFAULT_PORT,
};
use crate::errors::ConfigError;
use crate::protocol::RequestLimits;

/// Server configuration, typically loaded from a YAML file.
///
/// Every field is optional in the file and falls back to a built-in default,
/// so an empty document is a valid configuration.
///
/// # Fields
/// * `bind_address` - Interface the listener binds to (default `0.0.0.0`)
/// * `port` - TCP port (default `5555`)
/// * `job_timeout_seconds` - How long a connection waits for its pipeline job;
///   absent means wait without bound
/// * `max_vertices` - Largest `V` a request header may declare
/// * `max_edges` - Largest `E` a request header may declare
/// * `log_filter` - `tracing` filter directive used when `RUST_LOG` is unset
/// * `console` - Whether to read admin commands (`status`, `exit`, ...) from stdin
///
/// # Example
/// ```yaml
/// bind_address: 127.0.0.1
/// port: 6000
/// job_timeout_seconds: 30
/// max_vertices: 5000
/// max_edges: 200000
/// log_filter: "the_graphmill=debug"
/// console: false
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub job_timeout_seconds: Option<u64>,
    pub max_vertices: usize,
    pub max_edges: usize,
    pub log_filter: String,
    pub console: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            job_timeout_seconds: None,
            max_vertices: DEFAULT_MAX_VERTICES,
            max_edges: DEFAULT_MAX_EDGES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            console: true,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for the listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn job_timeout(&self) -> Option<Duration> {
        self.job_timeout_seconds.map(Duration::from_secs)
    }

    pub fn request_limits(&self) -> RequestLimits {
        RequestLimits {
            max_vertices: self.max_vertices,
            max_edges: self.max_edges,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".to_string()));
        }
        if self.job_timeout_seconds == Some(0) {
            return Err(ConfigError::Invalid(
                "job_timeout_seconds must be positive when set".to_string(),
            ));
        }
        if self.max_vertices == 0 {
            return Err(ConfigError::Invalid("max_vertices must be positive".to_string()));
        }
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    // An empty document deserializes to unit, not to a map.
    if content.trim().is_empty() {
        return Ok(ServerConfig::default());
    }
    let cfg: ServerConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
bind_address: 127.0.0.1
port: 6000
job_timeout_seconds: 30
max_vertices: 5000
max_edges: 200000
log_filter: "the_graphmill=debug"
console: false
"#;

        let cfg: ServerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.listen_address(), "127.0.0.1:6000");
        assert_eq!(cfg.job_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(
            cfg.request_limits(),
            RequestLimits { max_vertices: 5000, max_edges: 200000 }
        );
        assert_eq!(cfg.log_filter, "the_graphmill=debug");
        assert!(!cfg.console);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: ServerConfig = serde_yaml::from_str("port: 7000\n").unwrap();

        assert_eq!(cfg.port, 7000);
        assert_eq!(cfg.bind_address, "0.0.0.0");
        assert_eq!(cfg.job_timeout(), None);
        assert_eq!(cfg.request_limits(), RequestLimits::default());
        assert_eq!(cfg.log_filter, "info");
        assert!(cfg.console);
    }

    #[test]
    fn test_load_empty_file() {
        let file = write_config("");
        assert_eq!(load_and_validate_config(file.path()).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_load_and_validate_rejects_invalid_values() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            expected_message: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "zero port",
                yaml: "port: 0\n",
                expected_message: "port must be non-zero",
            },
            TestCase {
                name: "zero vertex limit",
                yaml: "max_vertices: 0\n",
                expected_message: "max_vertices must be positive",
            },
            TestCase {
                name: "zero timeout",
                yaml: "job_timeout_seconds: 0\n",
                expected_message: "job_timeout_seconds must be positive",
            },
            TestCase {
                name: "blank bind address",
                yaml: "bind_address: \"  \"\n",
                expected_message: "bind_address must not be empty",
            },
        ];

        for test_case in test_cases {
            let file = write_config(test_case.yaml);
            let err = load_and_validate_config(file.path()).unwrap_err();
            assert!(
                err.to_string().contains(test_case.expected_message),
                "Test case '{}': unexpected error '{}'",
                test_case.name,
                err
            );
        }
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let file = write_config("port: [not, a, number]\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_shipped_sample_config_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/server.yaml");
        let cfg = load_and_validate_config(path).unwrap();
        assert_eq!(cfg.port, 5555);
        assert_eq!(cfg.job_timeout(), Some(Duration::from_secs(60)));
        assert_eq!(
            cfg.request_limits(),
            RequestLimits { max_vertices: 10_000, max_edges: 500_000 }
        );
    }
}
