//! OllamaGateway -- concrete [`InferenceGateway`] implementation for Ollama.
//!
//! Sends the conversation to `/api/chat` and buffers the whole response
//! before decoding it, so callers receive one complete reply. Model
//! discovery goes through `/api/tags`.

use std::time::Duration;

use tracing::{Instrument, debug, info_span, warn};

use parley_core::llm::provider::InferenceGateway;
use parley_types::config::BackendConfig;
use parley_types::llm::{LlmError, Message};

use super::decoder;
use super::types::{OllamaChatRequest, OllamaMessage, OllamaTagsResponse};

/// Ollama inference gateway.
///
/// Holds a pooled `reqwest::Client` whose connect and read timeouts come
/// from [`BackendConfig`]. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
    read_timeout: Duration,
}

impl OllamaGateway {
    /// Create a gateway from backend settings.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Connectivity`] if the HTTP client cannot be built
    /// (e.g., the TLS backend fails to initialize).
    pub fn new(config: &BackendConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.read_timeout())
            .build()
            .map_err(|e| LlmError::Connectivity(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            read_timeout: config.read_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert generic [`Message`]s into an [`OllamaChatRequest`].
    fn to_ollama_request(
        &self,
        model: &str,
        messages: &[Message],
        system_prompt: Option<&str>,
    ) -> OllamaChatRequest {
        let messages = messages
            .iter()
            .map(|m| OllamaMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        OllamaChatRequest {
            model: model.to_string(),
            messages,
            stream: true,
            system: system_prompt.map(str::to_string),
        }
    }

    /// Map a transport failure to the gateway error taxonomy.
    ///
    /// A connect-phase failure (refused, DNS, connect timeout) means the
    /// backend is unreachable; a timeout after connecting means it was too
    /// slow to answer.
    fn map_transport_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_connect() {
            LlmError::Connectivity(err.to_string())
        } else if err.is_timeout() {
            LlmError::Timeout(format!(
                "no complete response within {}s: {err}",
                self.read_timeout.as_secs()
            ))
        } else {
            LlmError::Connectivity(err.to_string())
        }
    }

    async fn fetch_body(&self, request: reqwest::RequestBuilder) -> Result<String, LlmError> {
        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(|e| self.map_transport_error(e))
    }
}

impl InferenceGateway for OllamaGateway {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn chat(
        &self,
        model: &str,
        messages: &[Message],
        system_prompt: Option<&str>,
    ) -> Result<String, LlmError> {
        let body = self.to_ollama_request(model, messages, system_prompt);
        let span = info_span!(
            "chat",
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = "ollama",
            gen_ai.request.model = %model,
        );

        async move {
            debug!(messages = body.messages.len(), "Sending chat request");
            let raw = self
                .fetch_body(self.client.post(self.url("/api/chat")).json(&body))
                .await?;

            let reply = decoder::decode(&raw);
            if !reply.completed {
                warn!(
                    body_bytes = raw.len(),
                    reply_chars = reply.text.len(),
                    "Backend stream ended without a done marker; returning partial reply"
                );
            }
            Ok(reply.text)
        }
        .instrument(span)
        .await
    }

    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let raw = self.fetch_body(self.client.get(self.url("/api/tags"))).await?;
        let tags: OllamaTagsResponse = serde_json::from_str(&raw)
            .map_err(|e| LlmError::Deserialization(format!("failed to parse model list: {e}")))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}
