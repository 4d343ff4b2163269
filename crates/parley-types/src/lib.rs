//! Shared domain types for Parley.
//!
//! This crate contains the types used across the Parley service:
//! conversation turns, backend messages, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
