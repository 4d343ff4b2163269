//! CLI command definitions for the `parley` binary.
//!
//! Uses clap derive macros for argument parsing. Global flags select the
//! configuration file and override individual settings from it.

pub mod ask;
pub mod models;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use parley_infra::config::DEFAULT_CONFIG_FILE;
use parley_types::config::ServiceConfig;

/// Chat with a local Ollama model over HTTP or from the terminal.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "PARLEY_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Ollama base URL (overrides `backend.base_url`).
    #[arg(long, global = true, env = "PARLEY_OLLAMA_URL")]
    pub ollama_url: Option<String>,

    /// Default model (overrides `backend.default_model`).
    #[arg(long, global = true, env = "PARLEY_MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,
    },

    /// Send one message and print the reply.
    Ask {
        /// The message to send.
        message: String,
    },

    /// List models available on the backend.
    Models,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default tracing directive derived from `-v` / `--quiet`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,parley=debug",
            _ => "trace",
        }
    }

    /// Layer flag and environment overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut ServiceConfig) {
        if let Some(url) = &self.ollama_url {
            config.backend.base_url = url.clone();
        }
        if let Some(model) = &self.model {
            config.backend.default_model = model.clone();
        }
        if let Commands::Serve { port, host } = &self.command {
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(host) = host {
                config.server.host = host.clone();
            }
        }
    }
}
