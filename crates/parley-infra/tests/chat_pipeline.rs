//! End-to-end exchange tests: ChatService over the Ollama gateway, against
//! a wiremock backend.

use std::sync::Arc;

use parley_core::chat::log::ConversationLog;
use parley_core::chat::service::ChatService;
use parley_infra::llm::ollama::OllamaGateway;
use parley_types::chat::TurnRole;
use parley_types::config::{BackendConfig, ChatConfig};
use parley_types::error::ChatError;
use parley_types::llm::LlmError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(mock_server: &MockServer) -> ChatService<OllamaGateway> {
    let backend = BackendConfig {
        base_url: mock_server.uri(),
        connect_timeout_secs: 2,
        read_timeout_secs: 5,
        ..BackendConfig::default()
    };
    let gateway = OllamaGateway::new(&backend).expect("client should build");
    ChatService::new(gateway, Arc::new(ConversationLog::new()), &ChatConfig::default())
}

#[tokio::test]
async fn single_line_reply_is_recorded_as_exchange() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"model":"llama3.1:8b","message":{"role":"assistant","content":"Hello! How can I help you?"},"done":true}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let reply = service
        .send_message("Hi", "llama3.1:8b")
        .await
        .expect("should succeed");

    assert_eq!(reply, "Hello! How can I help you?");
    assert_eq!(service.history_size().await, 2);

    let history = service.history().await;
    assert_eq!(history[0].role, TurnRole::User);
    assert_eq!(history[0].content, "Hi");
    assert_eq!(history[1].role, TurnRole::Assistant);
    assert_eq!(history[1].content, "Hello! How can I help you?");
    assert_eq!(history[1].model.as_deref(), Some("llama3.1:8b"));
}

#[tokio::test]
async fn backend_error_leaves_history_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"error":"out of memory"}"#))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let err = service
        .send_message("Hi", "llama3.1:8b")
        .await
        .expect_err("should fail");

    assert!(
        matches!(err, ChatError::Llm(LlmError::Backend { status: 500, .. })),
        "expected Backend 500, got: {err:?}"
    );
    assert_eq!(service.history_size().await, 0);
}

#[tokio::test]
async fn second_exchange_sends_first_as_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"message":{"role":"assistant","content":"ok"},"done":true}"#,
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    service.send_message("first", "llama3.1:8b").await.expect("first");
    service.send_message("second", "llama3.1:8b").await.expect("second");

    let requests = mock_server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = serde_json::from_slice(&requests[1].body).expect("json body");
    let contents: Vec<_> = body["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .map(|m| m["content"].as_str().unwrap_or_default().to_string())
        .collect();

    assert_eq!(contents, vec!["first", "ok", "second"]);
    assert_eq!(service.history_size().await, 4);
}
