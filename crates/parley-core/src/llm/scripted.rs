//! In-memory [`InferenceGateway`] that plays back canned outcomes.
//!
//! Used wherever a real inference backend is unavailable or unwanted:
//! unit tests of the exchange logic, router tests, and offline demos.
//! Outcomes are consumed in FIFO order; once the script runs out, the
//! gateway echoes the last message it was sent.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use parley_types::llm::{LlmError, Message};

use super::provider::InferenceGateway;

/// One scripted response to a `chat` call.
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    Reply(String),
    Backend { status: u16, body: String },
    Connectivity(String),
    ReadTimeout,
}

impl ScriptedOutcome {
    fn into_result(self) -> Result<String, LlmError> {
        match self {
            ScriptedOutcome::Reply(text) => Ok(text),
            ScriptedOutcome::Backend { status, body } => Err(LlmError::Backend { status, body }),
            ScriptedOutcome::Connectivity(msg) => Err(LlmError::Connectivity(msg)),
            ScriptedOutcome::ReadTimeout => {
                Err(LlmError::Timeout("scripted read timeout".to_string()))
            }
        }
    }
}

/// A `chat` call as the gateway received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<Message>,
    pub system_prompt: Option<String>,
}

/// Scripted gateway; see the module docs.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    outcomes: Mutex<VecDeque<ScriptedOutcome>>,
    calls: Mutex<Vec<RecordedCall>>,
    models: Vec<String>,
    delay: Option<Duration>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.with_outcome(ScriptedOutcome::Reply(text.into()))
    }

    /// Queue an arbitrary outcome.
    pub fn with_outcome(self, outcome: ScriptedOutcome) -> Self {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
        self
    }

    /// Models reported by `list_models`.
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Sleep this long before answering every `chat` call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every `chat` call received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn next_outcome(&self, messages: &[Message]) -> ScriptedOutcome {
        let queued = self
            .outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        queued.unwrap_or_else(|| {
            let last = messages.last().map(|m| m.content.as_str()).unwrap_or_default();
            ScriptedOutcome::Reply(format!("echo: {last}"))
        })
    }
}

impl InferenceGateway for ScriptedGateway {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn chat(
        &self,
        model: &str,
        messages: &[Message],
        system_prompt: Option<&str>,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                model: model.to_string(),
                messages: messages.to_vec(),
                system_prompt: system_prompt.map(str::to_string),
            });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.next_outcome(messages).into_result()
    }

    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        Ok(self.models.clone())
    }
}
