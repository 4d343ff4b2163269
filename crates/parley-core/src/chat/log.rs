//! In-process conversation log.
//!
//! The log is an ordered sequence of [`Turn`]s shared by every in-flight
//! request. All access goes through a `tokio::sync::RwLock`, whose FIFO
//! fairness keeps a steady stream of readers from starving appenders.
//! Reads always hand back owned snapshots, so callers never hold the lock
//! and never see a half-applied append.

use std::collections::VecDeque;

use parley_types::chat::Turn;
use parley_types::config::RetentionPolicy;
use tokio::sync::RwLock;
use tracing::debug;

/// Concurrent, append-only conversation log.
#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: RwLock<VecDeque<Turn>>,
    retention: RetentionPolicy,
}

impl ConversationLog {
    /// Create an empty log that keeps every turn until cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with the given retention policy.
    pub fn with_retention(retention: RetentionPolicy) -> Self {
        Self {
            turns: RwLock::new(VecDeque::new()),
            retention,
        }
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    /// Append one turn at the end of the log.
    pub async fn append(&self, turn: Turn) {
        let mut turns = self.turns.write().await;
        turns.push_back(turn);
        self.enforce_retention(&mut turns, 1);
    }

    /// Append a user turn and its reply under a single write lock, so no
    /// other request's turns can land between them.
    pub async fn append_exchange(&self, user: Turn, assistant: Turn) {
        let mut turns = self.turns.write().await;
        turns.push_back(user);
        turns.push_back(assistant);
        self.enforce_retention(&mut turns, 2);
    }

    /// The last `limit` turns, oldest first.
    ///
    /// A `limit` of zero yields nothing; a `limit` past the end yields the
    /// whole log.
    pub async fn recent(&self, limit: usize) -> Vec<Turn> {
        if limit == 0 {
            return Vec::new();
        }
        let turns = self.turns.read().await;
        let skip = turns.len().saturating_sub(limit);
        turns.iter().skip(skip).cloned().collect()
    }

    /// Every stored turn, oldest first.
    pub async fn all(&self) -> Vec<Turn> {
        self.turns.read().await.iter().cloned().collect()
    }

    /// Remove every turn. Returns how many were dropped.
    pub async fn clear(&self) -> usize {
        let mut turns = self.turns.write().await;
        let dropped = turns.len();
        turns.clear();
        dropped
    }

    pub async fn len(&self) -> usize {
        self.turns.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.turns.read().await.is_empty()
    }

    /// Evict from the front in multiples of `unit` turns, so exchanges
    /// appended as pairs leave as pairs.
    fn enforce_retention(&self, turns: &mut VecDeque<Turn>, unit: usize) {
        if let RetentionPolicy::SlidingWindow { max_turns } = self.retention {
            let excess = turns
                .len()
                .saturating_sub(max_turns)
                .next_multiple_of(unit)
                .min(turns.len());
            if excess > 0 {
                turns.drain(..excess);
                debug!(evicted = excess, kept = turns.len(), "Evicted oldest turns");
            }
        }
    }
}
