//! One-shot exchange from the terminal.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Send `message` through the chat service and print the reply.
///
/// Uses the same orchestrator as the HTTP boundary, so the deadline and
/// backend error handling are identical.
pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let model = state.default_model().to_string();
    let reply = state.chat_service.send_message(message, &model).await?;

    if json {
        let out = serde_json::json!({
            "response": reply,
            "model": model,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("▸").cyan().bold(), style(&model).dim());
    println!();
    for line in reply.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use parley_core::llm::box_provider::BoxInferenceGateway;
    use parley_core::llm::scripted::{ScriptedGateway, ScriptedOutcome};
    use parley_types::config::ServiceConfig;

    use super::*;

    #[tokio::test]
    async fn ask_records_exchange() {
        let gateway = ScriptedGateway::new().with_reply("Rayleigh scattering.");
        let state = AppState::with_gateway(BoxInferenceGateway::new(gateway), ServiceConfig::default());

        ask(&state, "Why is the sky blue?", true).await.unwrap();

        assert_eq!(state.chat_service.history_size().await, 2);
    }

    #[tokio::test]
    async fn ask_propagates_backend_error() {
        let gateway = ScriptedGateway::new().with_outcome(ScriptedOutcome::Backend {
            status: 404,
            body: "model not found".to_string(),
        });
        let state = AppState::with_gateway(BoxInferenceGateway::new(gateway), ServiceConfig::default());

        let err = ask(&state, "Hello", false).await.unwrap_err();

        assert!(err.to_string().contains("404"));
        assert_eq!(state.chat_service.history_size().await, 0);
    }
}
