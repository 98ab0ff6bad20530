//! Click events - the only input the city reacts to.

use serde::{Deserialize, Serialize};
use crate::id::{EventId, TopicId};
use crate::Time;

/// What a click did to the progression state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// The topic is locked or does not exist; nothing changed
    Ignored,
    /// The topic became active
    Activated {
        /// Clicked topic
        topic: TopicId,
    },
    /// The frontier topic became active and the next topic was unlocked
    Unlocked {
        /// Clicked topic
        topic: TopicId,
        /// Newly unlocked topic
        next: TopicId,
    },
}

impl ClickOutcome {
    /// Whether the click changed anything.
    pub fn is_ignored(&self) -> bool {
        matches!(self, ClickOutcome::Ignored)
    }

    /// Topic unlocked by this click, if any.
    pub fn unlocked(&self) -> Option<TopicId> {
        match self {
            ClickOutcome::Unlocked { next, .. } => Some(*next),
            _ => None,
        }
    }
}

/// A recorded click.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Unique identifier
    pub id: EventId,

    /// When it happened
    pub timestamp: Time,

    /// Raw id the user clicked, before validation
    pub requested: i64,

    /// Result of the click
    pub outcome: ClickOutcome,
}

impl ClickEvent {
    /// Record a click that happened now.
    pub fn new(requested: i64, outcome: ClickOutcome) -> Self {
        Self {
            id: EventId::new(),
            timestamp: chrono::Utc::now(),
            requested,
            outcome,
        }
    }
}
