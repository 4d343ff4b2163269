//! Service configuration loader for Parley.
//!
//! Reads a TOML file (`parley.toml` by default) and deserializes it into
//! [`ServiceConfig`]. Falls back to sensible defaults when the file is
//! missing or malformed.

use std::path::Path;

use parley_types::config::ServiceConfig;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "parley.toml";

/// Load service configuration from `path`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
///
/// Validation is left to the caller so that CLI overrides can be applied first.
pub async fn load_service_config(path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => {
            tracing::debug!("Loaded configuration from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServiceConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::config::RetentionPolicy;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_service_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_service_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.base_url, "http://localhost:11434");
        assert_eq!(config.chat.context_window, 10);
        assert_eq!(config.memory.retention, RetentionPolicy::Unbounded);
    }

    #[tokio::test]
    async fn load_service_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &config_path,
            r#"
[server]
port = 9090

[backend]
base_url = "http://gpu-box:11434"
default_model = "mistral:7b"

[chat]
context_window = 4
system_prompt = "Answer briefly."

[memory]
retention = { sliding_window = { max_turns = 20 } }
"#,
        )
        .await
        .unwrap();

        let config = load_service_config(&config_path).await;
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.backend.base_url, "http://gpu-box:11434");
        assert_eq!(config.backend.default_model, "mistral:7b");
        assert_eq!(config.chat.context_window, 4);
        assert_eq!(config.chat.system_prompt.as_deref(), Some("Answer briefly."));
        assert_eq!(
            config.memory.retention,
            RetentionPolicy::SlidingWindow { max_turns: 20 }
        );
    }

    #[tokio::test]
    async fn load_service_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_service_config(&config_path).await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.chat.request_timeout_secs, 300);
    }

    #[tokio::test]
    async fn load_service_config_directory_path_returns_default() {
        let tmp = TempDir::new().unwrap();
        // Reading a directory as a file is an I/O error other than NotFound.
        let config = load_service_config(tmp.path()).await;
        assert_eq!(config.backend.default_model, "llama3.1:8b");
    }
}
