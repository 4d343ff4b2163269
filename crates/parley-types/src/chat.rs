//! Conversation turn types for Parley.
//!
//! A [`Turn`] is one entry in the conversation log: either the user's
//! message or the assistant's reply, stamped with its creation time and
//! the model that served the exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::llm::{Message, MessageRole};

/// Unique identifier of a turn within a conversation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(pub Uuid);

impl TurnId {
    /// Create a new time-sortable identifier (UUID v7).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a turn. System prompts are never stored as turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

impl From<TurnRole> for MessageRole {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => MessageRole::User,
            TurnRole::Assistant => MessageRole::Assistant,
        }
    }
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub role: TurnRole,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Turn {
    /// Create a turn stamped with a fresh id and the current time.
    pub fn new(role: TurnRole, content: impl Into<String>, model: Option<String>) -> Self {
        Self {
            id: TurnId::new(),
            role,
            content: content.into(),
            created_at: Utc::now(),
            model,
        }
    }

    pub fn user(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content, Some(model.into()))
    }

    pub fn assistant(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content, Some(model.into()))
    }

    /// The backend-facing message for this turn.
    pub fn to_message(&self) -> Message {
        Message {
            role: self.role.into(),
            content: self.content.clone(),
        }
    }
}
