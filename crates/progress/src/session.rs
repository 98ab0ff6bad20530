//! A single visit to the city: one catalog, one tracker, one click history.

use biocity_core::{ClickEvent, ClickOutcome, SessionId, Time, TopicCatalog, TopicId};
use tracing::{debug, info};

use crate::tracker::{FrontierTracker, ProgressTracker};
use crate::view::MapView;

/// In-memory session state. Dropped when the visit ends.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    started_at: Time,
    catalog: TopicCatalog,
    tracker: FrontierTracker,
    history: Vec<ClickEvent>,
}

impl Session {
    /// Start a session with only the first topic unlocked.
    pub fn new(catalog: TopicCatalog) -> Self {
        let id = SessionId::new();
        let tracker = FrontierTracker::new(catalog.last_id());
        debug!(session = %id, topics = catalog.len(), "session started");
        Self {
            id,
            started_at: chrono::Utc::now(),
            catalog,
            tracker,
            history: Vec::new(),
        }
    }

    /// Session id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// When the session started.
    pub fn started_at(&self) -> Time {
        self.started_at
    }

    /// Topic catalog.
    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    /// Read-only access to the tracker.
    pub fn tracker(&self) -> &FrontierTracker {
        &self.tracker
    }

    /// Every click so far, oldest first.
    pub fn history(&self) -> &[ClickEvent] {
        &self.history
    }

    /// Handle a click on a raw integer id.
    ///
    /// Ids that cannot name a topic are ignored exactly like locked ones.
    pub fn click(&mut self, raw: i64) -> ClickOutcome {
        let outcome = match TopicId::try_from(raw) {
            Ok(topic) => self.tracker.handle_click(topic),
            Err(_) => ClickOutcome::Ignored,
        };

        match outcome {
            ClickOutcome::Ignored => {
                debug!(session = %self.id, topic = raw, "click on locked topic ignored");
            }
            ClickOutcome::Activated { topic } => {
                debug!(session = %self.id, %topic, "topic activated");
            }
            ClickOutcome::Unlocked { topic, next } => {
                let name = self.catalog.get(next).map(|t| t.name.as_str()).unwrap_or_default();
                info!(session = %self.id, %topic, %next, name, "topic unlocked");
            }
        }

        self.history.push(ClickEvent::new(raw, outcome));
        outcome
    }

    /// Name of the active topic.
    pub fn current_topic_name(&self) -> &str {
        self.catalog
            .get(self.tracker.active())
            .map(|t| t.name.as_str())
            .unwrap_or_default()
    }

    /// Build the renderer view for the current state.
    pub fn view(&self) -> MapView {
        MapView::build(&self.catalog, &self.tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biocity_core::MapVariant;

    #[test]
    fn test_session_starts_at_first_topic() {
        let session = Session::new(MapVariant::Flat.catalog());
        assert_eq!(session.tracker().active(), TopicId::FIRST);
        assert_eq!(session.current_topic_name(), "ATP Power Plant");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_invalid_raw_ids_are_ignored() {
        let mut session = Session::new(MapVariant::Flat.catalog());
        for raw in [0, -1, i64::MIN, i64::MAX, 15] {
            assert_eq!(session.click(raw), ClickOutcome::Ignored);
        }
        assert_eq!(session.tracker().unlocked_count(), 1);
        assert_eq!(session.tracker().active(), TopicId::FIRST);
    }

    #[test]
    fn test_history_records_every_click() {
        let mut session = Session::new(MapVariant::CitiesSkylines.catalog());
        session.click(1);
        session.click(5);
        session.click(2);

        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].requested, 1);
        assert!(history[0].outcome.unlocked().is_some());
        assert!(history[1].outcome.is_ignored());
        assert_eq!(history[2].outcome.unlocked().map(TopicId::get), Some(3));
        assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert!(session.started_at() <= history[0].timestamp);
    }

    #[test]
    fn test_full_playthrough() {
        let mut session = Session::new(MapVariant::Isometric.catalog());
        for raw in 1..=13 {
            session.click(raw);
        }
        assert!(session.tracker().is_complete());

        assert_eq!(session.click(14), ClickOutcome::Activated { topic: TopicId::new(14).unwrap() });
        assert_eq!(session.current_topic_name(), "Fermentation Brewery");

        let view = session.view();
        assert!(view.topics.iter().all(|t| t.unlocked));
        assert!((view.progress.percentage - 100.0).abs() < f32::EPSILON);
    }
}
