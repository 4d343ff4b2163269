//! Inference gateway abstractions for Parley.
//!
//! - `InferenceGateway`: RPITIT trait for concrete backend implementations
//! - `BoxInferenceGateway`: object-safe wrapper for dynamic dispatch
//! - `ScriptedGateway`: in-memory implementation with canned outcomes

pub mod box_provider;
pub mod provider;
pub mod scripted;
