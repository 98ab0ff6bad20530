//! Progression tracking service.

use biocity_core::{ClickOutcome, TopicId};

/// Progression tracking service.
///
/// Owns which topics are unlocked and which one is active. Renderers only
/// read through the query methods; clicks are the sole mutation.
pub trait ProgressTracker {
    /// Apply a click on a topic.
    ///
    /// Clicking a locked or unknown topic is a no-op that returns
    /// [`ClickOutcome::Ignored`].
    fn handle_click(&mut self, topic: TopicId) -> ClickOutcome;

    /// Whether a topic is unlocked.
    fn is_unlocked(&self, topic: TopicId) -> bool;

    /// Whether a topic is the active one.
    fn is_active(&self, topic: TopicId) -> bool;

    /// The highest unlocked topic.
    fn frontier(&self) -> TopicId;

    /// The active topic.
    fn active(&self) -> TopicId;

    /// Number of topics in the sequence (N).
    fn total(&self) -> u32;

    /// Number of unlocked topics.
    fn unlocked_count(&self) -> u32 {
        self.frontier().get()
    }

    /// Whether every topic is unlocked.
    fn is_complete(&self) -> bool {
        self.unlocked_count() == self.total()
    }

    /// Unlocked topics in ascending order.
    fn unlocked(&self) -> Vec<TopicId> {
        (1..=self.frontier().get()).filter_map(TopicId::new).collect()
    }
}

/// Tracker that stores the unlocked prefix as a single frontier id.
///
/// `unlocked` is always `{1, ..., frontier}`, so the set never needs to be
/// materialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierTracker {
    frontier: TopicId,
    active: TopicId,
    last: TopicId,
}

impl FrontierTracker {
    /// Create a tracker for topics `1..=last`, with only topic 1 unlocked
    /// and active.
    pub fn new(last: TopicId) -> Self {
        Self {
            frontier: TopicId::FIRST,
            active: TopicId::FIRST,
            last,
        }
    }
}

impl ProgressTracker for FrontierTracker {
    fn handle_click(&mut self, topic: TopicId) -> ClickOutcome {
        if !self.is_unlocked(topic) {
            return ClickOutcome::Ignored;
        }

        self.active = topic;

        if topic == self.frontier && topic < self.last {
            if let Some(next) = topic.next() {
                self.frontier = next;
                return ClickOutcome::Unlocked { topic, next };
            }
        }

        ClickOutcome::Activated { topic }
    }

    fn is_unlocked(&self, topic: TopicId) -> bool {
        topic <= self.frontier
    }

    fn is_active(&self, topic: TopicId) -> bool {
        topic == self.active
    }

    fn frontier(&self) -> TopicId {
        self.frontier
    }

    fn active(&self) -> TopicId {
        self.active
    }

    fn total(&self) -> u32 {
        self.last.get()
    }
}
