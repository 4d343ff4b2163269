//! Conversation memory and exchange orchestration for Parley.
//!
//! `ConversationLog` holds the turns; `ChatService` runs one exchange at a
//! time against it.

pub mod log;
pub mod service;
