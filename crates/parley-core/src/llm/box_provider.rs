//! BoxInferenceGateway -- object-safe dynamic dispatch wrapper for InferenceGateway.
//!
//! 1. Define an object-safe `InferenceGatewayDyn` trait with boxed futures
//! 2. Blanket-impl `InferenceGatewayDyn` for all `T: InferenceGateway`
//! 3. `BoxInferenceGateway` wraps `Box<dyn InferenceGatewayDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use parley_types::llm::{LlmError, Message};

use super::provider::InferenceGateway;

/// Object-safe version of [`InferenceGateway`] with boxed futures.
///
/// A blanket implementation is provided for all types implementing `InferenceGateway`.
pub trait InferenceGatewayDyn: Send + Sync {
    fn name(&self) -> &str;

    fn chat_boxed<'a>(
        &'a self,
        model: &'a str,
        messages: &'a [Message],
        system_prompt: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;

    fn list_models_boxed<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, LlmError>> + Send + 'a>>;
}

impl<T: InferenceGateway> InferenceGatewayDyn for T {
    fn name(&self) -> &str {
        InferenceGateway::name(self)
    }

    fn chat_boxed<'a>(
        &'a self,
        model: &'a str,
        messages: &'a [Message],
        system_prompt: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(self.chat(model, messages, system_prompt))
    }

    fn list_models_boxed<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, LlmError>> + Send + 'a>> {
        Box::pin(self.list_models())
    }
}

/// Type-erased inference gateway for runtime backend selection.
///
/// Since `InferenceGateway` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxInferenceGateway` implements the trait itself by delegating
/// to the inner `InferenceGatewayDyn` object, so services generic over a
/// gateway can be pinned to it.
pub struct BoxInferenceGateway {
    inner: Box<dyn InferenceGatewayDyn + Send + Sync>,
}

impl BoxInferenceGateway {
    /// Wrap a concrete `InferenceGateway` in a type-erased box.
    pub fn new<T: InferenceGateway + 'static>(gateway: T) -> Self {
        Self {
            inner: Box::new(gateway),
        }
    }

    /// Human-readable backend name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }
}

impl InferenceGateway for BoxInferenceGateway {
    fn name(&self) -> &str {
        BoxInferenceGateway::name(self)
    }

    async fn chat(
        &self,
        model: &str,
        messages: &[Message],
        system_prompt: Option<&str>,
    ) -> Result<String, LlmError> {
        self.inner.chat_boxed(model, messages, system_prompt).await
    }

    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        self.inner.list_models_boxed().await
    }
}
