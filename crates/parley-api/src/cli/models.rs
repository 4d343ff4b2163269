//! Backend model listing command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Print the models the backend reports, marking the configured default.
pub async fn list_models(state: &AppState, json: bool) -> Result<()> {
    let models = state.chat_service.list_models().await?;
    let default_model = state.default_model();

    if json {
        let out = serde_json::json!({ "models": models });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if models.is_empty() {
        println!();
        println!(
            "  {} No models installed. Pull one with {}",
            style("i").blue().bold(),
            style(format!("ollama pull {default_model}")).yellow()
        );
        println!();
        return Ok(());
    }

    println!();
    println!(
        "  {} model(s) on {}",
        style(models.len()).bold(),
        style(&state.config.backend.base_url).cyan()
    );
    println!();
    for name in &models {
        if name == default_model {
            println!("  {} {} {}", style("✓").green(), name, style("(default)").dim());
        } else {
            println!("    {name}");
        }
    }
    println!();

    Ok(())
}
