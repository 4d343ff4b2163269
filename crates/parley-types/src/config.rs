//! Service configuration types for Parley.
//!
//! `ServiceConfig` represents the top-level `parley.toml`. Every section and
//! field has a default, so an empty file (or no file) yields a working setup
//! against a local Ollama instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Model used when a chat request does not name one.
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Top-level configuration for the Parley service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub memory: MemoryConfig,
}

impl ServiceConfig {
    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chat.context_window == 0 {
            return Err(ConfigError::EmptyContextWindow);
        }
        if self.chat.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroRequestTimeout);
        }
        if let RetentionPolicy::SlidingWindow { max_turns } = self.memory.retention {
            if max_turns < 2 || max_turns % 2 != 0 {
                return Err(ConfigError::UnpairedRetentionWindow);
            }
        }
        let url = self.backend.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(url.to_string()));
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static assets served for unknown paths, if it exists.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_web_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
        }
    }
}

/// Inference backend (Ollama) connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub default_model: String,

    /// Limit on establishing the TCP connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Limit on a single backend call once connected.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_read_timeout_secs() -> u64 {
    300
}

impl BackendConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

/// Conversation exchange settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Number of most recent turns sent to the backend as context.
    #[serde(default = "default_context_window")]
    pub context_window: usize,

    /// Deadline for one whole exchange, backend call included.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_context_window() -> usize {
    10
}

fn default_request_timeout_secs() -> u64 {
    300
}

impl ChatConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context_window: default_context_window(),
            request_timeout_secs: default_request_timeout_secs(),
            system_prompt: None,
        }
    }
}

/// Conversation memory settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default)]
    pub retention: RetentionPolicy,
}

/// How many turns the conversation log keeps.
///
/// `Unbounded` keeps everything until the log is cleared; the context
/// window only limits what is read back. `SlidingWindow` evicts the
/// oldest exchanges once `max_turns` is exceeded; `max_turns` must be even
/// so a user turn never outlives or loses its reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    #[default]
    Unbounded,
    SlidingWindow { max_turns: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.base_url, "http://localhost:11434");
        assert_eq!(config.backend.default_model, "llama3.1:8b");
        assert_eq!(config.chat.context_window, 10);
        assert_eq!(config.chat.request_timeout(), Duration::from_secs(300));
        assert!(config.chat.system_prompt.is_none());
        assert_eq!(config.memory.retention, RetentionPolicy::Unbounded);
    }

    #[test]
    fn test_service_config_deserialize_empty_uses_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.chat.context_window, 10);
        assert_eq!(config.backend.read_timeout(), Duration::from_secs(300));
    }

    #[test]
    fn test_service_config_deserialize_with_values() {
        let toml_str = r#"
[server]
port = 9000

[backend]
base_url = "http://gpu-box:11434"
default_model = "mistral:7b"

[chat]
context_window = 4
system_prompt = "Answer briefly."

[memory]
retention = { sliding_window = { max_turns = 50 } }
"#;
        let config: ServiceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.backend.base_url, "http://gpu-box:11434");
        assert_eq!(config.backend.default_model, "mistral:7b");
        assert_eq!(config.chat.context_window, 4);
        assert_eq!(config.chat.system_prompt.as_deref(), Some("Answer briefly."));
        assert_eq!(
            config.memory.retention,
            RetentionPolicy::SlidingWindow { max_turns: 50 }
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServiceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = ServiceConfig::default();
        config.chat.context_window = 0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyContextWindow)));

        let mut config = ServiceConfig::default();
        config.chat.request_timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRequestTimeout)));

        let mut config = ServiceConfig::default();
        config.memory.retention = RetentionPolicy::SlidingWindow { max_turns: 1 };
        assert!(matches!(config.validate(), Err(ConfigError::UnpairedRetentionWindow)));

        let mut config = ServiceConfig::default();
        config.memory.retention = RetentionPolicy::SlidingWindow { max_turns: 3 };
        assert!(matches!(config.validate(), Err(ConfigError::UnpairedRetentionWindow)));

        let mut config = ServiceConfig::default();
        config.backend.base_url = "localhost:11434".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_validate_accepts_even_sliding_window() {
        let mut config = ServiceConfig::default();
        config.memory.retention = RetentionPolicy::SlidingWindow { max_turns: 2 };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_retention_unbounded_as_plain_string() {
        let config: ServiceConfig = toml::from_str("[memory]\nretention = \"unbounded\"\n").unwrap();
        assert_eq!(config.memory.retention, RetentionPolicy::Unbounded);
    }
}
