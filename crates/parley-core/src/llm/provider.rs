//! InferenceGateway trait definition.
//!
//! This is the capability set every inference backend exposes: a full
//! (non-streaming to the caller) chat exchange and model discovery.

use parley_types::llm::{LlmError, Message};

/// Trait for inference backends (Ollama over HTTP, scripted fakes, etc.).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations must be stateless with respect to the conversation:
/// context arrives in `messages` on every call.
pub trait InferenceGateway: Send + Sync {
    /// Human-readable backend name (e.g., "ollama").
    fn name(&self) -> &str;

    /// Send the conversation to `model` and return the assembled reply text.
    ///
    /// `messages` is ordered oldest first and ends with the new user message.
    fn chat(
        &self,
        model: &str,
        messages: &[Message],
        system_prompt: Option<&str>,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;

    /// Names of the models the backend can serve.
    fn list_models(&self) -> impl std::future::Future<Output = Result<Vec<String>, LlmError>> + Send;
}
