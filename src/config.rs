//! Top-level application configuration.
//!
//! Configuration is stored in `.wardbook/config.yaml` and includes:
//! - Remote user-service base URL and page size
//! - Optional API key for the remote service
//! - Remote operation timeout

use std::env;
use std::fmt;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WardbookError};
use crate::paths::config_file;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote user-service settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Remote operation timeout in seconds (default: 30)
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout: u64,
}

fn default_remote_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            remote_timeout: default_remote_timeout(),
        }
    }
}

/// Remote user-service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote user service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size for the paginated listing endpoint
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// API key, sent as `x-api-key` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

fn default_base_url() -> String {
    "https://reqres.in/api".to_string()
}

fn default_per_page() -> u32 {
    6
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            key: None,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("per_page", &self.per_page)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            WardbookError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = config_file();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                WardbookError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            WardbookError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Restrictive permissions on Unix (owner read/write only); the file
        // may hold an API key.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions).map_err(|e| {
                WardbookError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Get the service base URL, preferring the environment variable
    pub fn api_base_url(&self) -> String {
        if let Ok(url) = env::var("WARDBOOK_API_URL")
            && !url.is_empty()
        {
            return url;
        }

        self.api.base_url.clone()
    }

    /// Get the API key from config or environment variable
    pub fn api_key(&self) -> Option<String> {
        if let Ok(key) = env::var("WARDBOOK_API_KEY")
            && !key.is_empty()
        {
            return Some(key);
        }

        self.api.key.clone()
    }

    /// Get the listing page size
    pub fn per_page(&self) -> u32 {
        self.api.per_page
    }

    /// Get the remote operation timeout duration
    pub fn remote_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.remote_timeout)
    }

    /// Get a configuration value by dotted key
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "api.url" => Ok(self.api.base_url.clone()),
            "api.per_page" => Ok(self.api.per_page.to_string()),
            "api.key" => Ok(self
                .api
                .key
                .as_ref()
                .map(|_| "[REDACTED]".to_string())
                .unwrap_or_else(|| "(unset)".to_string())),
            "remote_timeout" => Ok(self.remote_timeout.to_string()),
            _ => Err(WardbookError::Config(format!("unknown key '{key}'"))),
        }
    }

    /// Set a configuration value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.url" => {
                crate::validate::validate_service_url(value)
                    .map_err(|e| WardbookError::Config(e.to_string()))?;
                self.api.base_url = value.to_string();
                Ok(())
            }
            "api.per_page" => {
                let n: u32 = value.parse().map_err(|_| {
                    WardbookError::Config(format!("api.per_page must be a number, got '{value}'"))
                })?;
                if n == 0 {
                    return Err(WardbookError::Config(
                        "api.per_page must be at least 1".to_string(),
                    ));
                }
                self.api.per_page = n;
                Ok(())
            }
            "api.key" => {
                self.api.key = Some(value.to_string());
                Ok(())
            }
            "remote_timeout" => {
                self.remote_timeout = value.parse().map_err(|_| {
                    WardbookError::Config(format!(
                        "remote_timeout must be a number of seconds, got '{value}'"
                    ))
                })?;
                Ok(())
            }
            _ => Err(WardbookError::Config(format!("unknown key '{key}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://reqres.in/api");
        assert_eq!(config.api.per_page, 6);
        assert!(config.api.key.is_none());
        assert_eq!(config.remote_timeout, 30);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = Config::default();
        config.set_value("api.url", "http://localhost:4010").unwrap();
        config.set_value("api.per_page", "12").unwrap();
        config.set_value("api.key", "reqres-free-v1").unwrap();

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed.api.base_url, "http://localhost:4010");
        assert_eq!(parsed.api.per_page, 12);
        assert_eq!(parsed.api.key.as_deref(), Some("reqres-free-v1"));
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let yaml = r#"
api:
  base_url: http://localhost:4010
"#;
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.api.per_page, 6);
        assert_eq!(config.remote_timeout, 30);
    }

    #[test]
    fn test_config_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(config.set_value("api.password", "x").is_err());
        assert!(config.get_value("api.password").is_err());
    }

    #[test]
    fn test_config_per_page_must_be_positive() {
        let mut config = Config::default();
        assert!(config.set_value("api.per_page", "0").is_err());
        assert!(config.set_value("api.per_page", "abc").is_err());
    }

    #[test]
    fn test_config_key_is_redacted_in_debug_and_get() {
        let mut config = Config::default();
        config.set_value("api.key", "super-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert_eq!(config.get_value("api.key").unwrap(), "[REDACTED]");
    }
}
