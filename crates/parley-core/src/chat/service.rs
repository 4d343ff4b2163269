//! Chat service orchestrating one conversational exchange.
//!
//! ChatService coordinates between the [`ConversationLog`] and an
//! [`InferenceGateway`]: it reads recent context, asks the backend for a
//! reply under a deadline, and records the exchange only once it succeeded.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parley_types::chat::Turn;
use parley_types::config::ChatConfig;
use parley_types::error::ChatError;
use parley_types::llm::{LlmError, Message};
use tracing::{info, warn};

use crate::chat::log::ConversationLog;
use crate::llm::provider::InferenceGateway;

/// Orchestrates chat exchanges against a shared conversation log.
///
/// Generic over `InferenceGateway` to maintain clean architecture
/// (parley-core never depends on parley-infra). Holds no per-exchange
/// state of its own; everything lives in the log.
pub struct ChatService<G: InferenceGateway> {
    gateway: G,
    log: Arc<ConversationLog>,
    context_window: usize,
    deadline: Duration,
    system_prompt: Option<String>,
}

impl<G: InferenceGateway> ChatService<G> {
    /// Create a new chat service over the given gateway and log.
    pub fn new(gateway: G, log: Arc<ConversationLog>, config: &ChatConfig) -> Self {
        Self {
            gateway,
            log,
            context_window: config.context_window,
            deadline: config.request_timeout(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Access the inference gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Access the conversation log.
    pub fn log(&self) -> &Arc<ConversationLog> {
        &self.log
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Run one exchange and return the assistant's reply.
    ///
    /// The user message and the reply are appended to the log together, and
    /// only after the backend answered. Any failure, the deadline included,
    /// leaves the log exactly as it was.
    pub async fn send_message(&self, user_text: &str, model: &str) -> Result<String, ChatError> {
        if user_text.trim().is_empty() {
            return Err(ChatError::Validation("message must not be empty".to_string()));
        }
        if model.trim().is_empty() {
            return Err(ChatError::Validation("model must not be empty".to_string()));
        }

        let start = Instant::now();
        let context = self.log.recent(self.context_window).await;
        let messages = build_messages(&context, user_text);

        let call = self
            .gateway
            .chat(model, &messages, self.system_prompt.as_deref());
        // Dropping `call` on expiry tears down the in-flight backend request.
        let reply = match tokio::time::timeout(self.deadline, call).await {
            Ok(result) => result.inspect_err(|e| log_gateway_failure(model, e))?,
            Err(_) => {
                warn!(
                    model = %model,
                    deadline_secs = self.deadline.as_secs(),
                    "Exchange deadline elapsed, nothing recorded"
                );
                return Err(ChatError::Timeout(self.deadline));
            }
        };

        self.log
            .append_exchange(
                Turn::user(user_text, model),
                Turn::assistant(reply.clone(), model),
            )
            .await;

        info!(
            model = %model,
            context_turns = context.len(),
            reply_chars = reply.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Exchange completed"
        );
        Ok(reply)
    }

    /// Drop every stored turn. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let dropped = self.log.clear().await;
        info!(dropped, "Conversation history cleared");
        dropped
    }

    /// Number of turns currently stored.
    pub async fn history_size(&self) -> usize {
        self.log.len().await
    }

    /// Full history, oldest first.
    pub async fn history(&self) -> Vec<Turn> {
        self.log.all().await
    }

    /// Models the backend can serve.
    pub async fn list_models(&self) -> Result<Vec<String>, ChatError> {
        Ok(self.gateway.list_models().await?)
    }
}

/// Context turns (oldest first) followed by the new user message.
fn build_messages(context: &[Turn], user_text: &str) -> Vec<Message> {
    let mut messages: Vec<Message> = context.iter().map(Turn::to_message).collect();
    messages.push(Message::user(user_text));
    messages
}

fn log_gateway_failure(model: &str, error: &LlmError) {
    warn!(model = %model, error = %error, "Exchange failed, nothing recorded");
}
