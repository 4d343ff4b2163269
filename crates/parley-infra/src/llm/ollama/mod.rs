//! Ollama inference backend implementation.
//!
//! This module provides the [`OllamaGateway`] which implements the
//! [`InferenceGateway`](parley_core::llm::provider::InferenceGateway) trait
//! for a locally hosted Ollama server, plus the tolerant decoder for its
//! newline-delimited JSON response body.

pub mod client;
pub mod decoder;
pub mod types;

pub use client::OllamaGateway;
