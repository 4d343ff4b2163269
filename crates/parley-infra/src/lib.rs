//! Infrastructure layer for Parley.
//!
//! Contains implementations of the traits defined in `parley-core`: the
//! Ollama HTTP gateway with its response decoder, plus the TOML
//! configuration loader.

pub mod config;
pub mod llm;
