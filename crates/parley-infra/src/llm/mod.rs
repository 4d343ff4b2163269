//! Inference gateway implementations.
//!
//! Contains concrete implementations of the [`InferenceGateway`] trait
//! defined in `parley-core`, plus a factory ([`create_gateway`]) that
//! builds the configured backend behind a [`BoxInferenceGateway`].
//!
//! [`InferenceGateway`]: parley_core::llm::provider::InferenceGateway

pub mod ollama;

use parley_core::llm::box_provider::BoxInferenceGateway;
use parley_types::config::BackendConfig;
use parley_types::llm::LlmError;

use self::ollama::OllamaGateway;

/// Create a [`BoxInferenceGateway`] from backend settings.
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be constructed.
pub fn create_gateway(config: &BackendConfig) -> Result<BoxInferenceGateway, LlmError> {
    let gateway = OllamaGateway::new(config)?;
    tracing::debug!(base_url = %gateway.base_url(), "Ollama gateway configured");
    Ok(BoxInferenceGateway::new(gateway))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_gateway_ollama() {
        let gateway = create_gateway(&BackendConfig::default()).unwrap();
        assert_eq!(gateway.name(), "ollama");
    }
}
