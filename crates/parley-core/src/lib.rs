//! Business logic and gateway trait definitions for Parley.
//!
//! This crate defines the "ports" (the [`llm::provider::InferenceGateway`]
//! trait) that the infrastructure layer implements, plus the in-process
//! conversation log and the exchange orchestration built on top of them.
//! It depends only on `parley-types` -- never on `parley-infra` or any
//! HTTP crate.

pub mod chat;
pub mod llm;
