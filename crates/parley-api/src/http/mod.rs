//! HTTP/REST API layer for Parley.
//!
//! Axum-based JSON API under `/api/` with flat `{error}` failure bodies
//! and CORS support.

pub mod error;
pub mod handlers;
pub mod router;
