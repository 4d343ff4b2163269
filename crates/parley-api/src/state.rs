//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! `ChatService` is generic over the inference gateway, but AppState pins it
//! to the type-erased [`BoxInferenceGateway`] so tests can swap in a scripted
//! backend without changing handler signatures.

use std::sync::Arc;

use parley_core::chat::log::ConversationLog;
use parley_core::chat::service::ChatService;
use parley_core::llm::box_provider::BoxInferenceGateway;
use parley_infra::llm::create_gateway;
use parley_types::config::ServiceConfig;

/// Concrete type alias for the chat service pinned to the boxed gateway.
pub type ConcreteChatService = ChatService<BoxInferenceGateway>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Initialize the application state: build the Ollama gateway and a fresh log.
    pub fn init(config: ServiceConfig) -> anyhow::Result<Self> {
        let gateway = create_gateway(&config.backend)?;
        Ok(Self::with_gateway(gateway, config))
    }

    /// Wire the services around an already-built gateway.
    pub fn with_gateway(gateway: BoxInferenceGateway, config: ServiceConfig) -> Self {
        let log = Arc::new(ConversationLog::with_retention(config.memory.retention));
        let chat_service = ChatService::new(gateway, log, &config.chat);

        tracing::debug!(
            gateway = chat_service.gateway().name(),
            context_window = config.chat.context_window,
            deadline_secs = chat_service.deadline().as_secs(),
            "Application state initialized"
        );

        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
        }
    }

    /// Model used when a request does not name one.
    pub fn default_model(&self) -> &str {
        &self.config.backend.default_model
    }
}
