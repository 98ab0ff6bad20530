//! Read-only map view handed to renderers.

use serde::{Deserialize, Serialize};
use biocity_core::{DisplayType, Position, Topic, TopicCatalog, TopicId, Zone};

use crate::tracker::ProgressTracker;

/// Everything a renderer needs to draw the map for the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Every topic with its lock and highlight flags
    pub topics: Vec<TopicView>,

    /// Path segments between consecutive topics
    pub connections: Vec<Connection>,

    /// Unlock progress
    pub progress: ProgressSummary,

    /// The active topic
    pub current_topic: CurrentTopic,

    /// Districts in order of first appearance (empty for unzoned layouts)
    pub districts: Vec<DistrictView>,
}

/// One building as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicView {
    /// Topic id
    pub id: TopicId,
    /// Display name
    pub name: String,
    /// Artwork tag
    pub display_type: DisplayType,
    /// Top-left corner on the map
    pub position: Position,
    /// District, if the layout is zoned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Zone, if the layout is zoned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
    /// Clickable
    pub unlocked: bool,
    /// Highlighted
    pub active: bool,
}

/// State of a path segment between topic `k` and `k+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// Both ends unlocked
    Open,
    /// Leads from the frontier to the next locked topic
    Next,
    /// Both ends locked
    Closed,
}

/// A path segment between two consecutive topics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Start topic
    pub from: TopicId,
    /// End topic
    pub to: TopicId,
    /// Attachment point on the start building
    pub start: Position,
    /// Attachment point on the end building
    pub end: Position,
    /// Segment state
    pub state: ConnectionState,
}

/// Unlock progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Unlocked topics
    pub unlocked: u32,
    /// All topics
    pub total: u32,
    /// Percentage unlocked (0-100)
    pub percentage: f32,
}

/// The active topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTopic {
    /// Topic id
    pub id: TopicId,
    /// Display name
    pub name: String,
}

/// Progress within one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictView {
    /// District name
    pub name: String,
    /// Topics in the district
    pub topics: Vec<TopicId>,
    /// How many of them are unlocked
    pub unlocked: usize,
}

impl MapView {
    /// Build the view for a catalog and the tracker following it.
    pub fn build<T: ProgressTracker + ?Sized>(catalog: &TopicCatalog, tracker: &T) -> Self {
        let topics = catalog
            .iter()
            .map(|topic| TopicView::new(topic, tracker))
            .collect();

        let connections = catalog
            .topics()
            .windows(2)
            .filter_map(|pair| {
                let (from, to) = (pair[0].id, pair[1].id);
                Some(Connection {
                    from,
                    to,
                    start: catalog.anchor_of(from)?,
                    end: catalog.anchor_of(to)?,
                    state: connection_state(tracker, from, to),
                })
            })
            .collect();

        let unlocked = tracker.unlocked_count();
        let total = tracker.total();
        let progress = ProgressSummary {
            unlocked,
            total,
            percentage: unlocked as f32 / total as f32 * 100.0,
        };

        let active = tracker.active();
        let current_topic = CurrentTopic {
            id: active,
            name: catalog
                .get(active)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
        };

        let districts = catalog
            .districts()
            .into_iter()
            .map(|(name, ids)| DistrictView {
                name: name.to_string(),
                unlocked: ids.iter().filter(|id| tracker.is_unlocked(**id)).count(),
                topics: ids,
            })
            .collect();

        Self {
            topics,
            connections,
            progress,
            current_topic,
            districts,
        }
    }

    /// Serialize for an external renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl TopicView {
    fn new<T: ProgressTracker + ?Sized>(topic: &Topic, tracker: &T) -> Self {
        Self {
            id: topic.id,
            name: topic.name.clone(),
            display_type: topic.display_type.clone(),
            position: topic.position,
            district: topic.district.clone(),
            zone: topic.zone,
            unlocked: tracker.is_unlocked(topic.id),
            active: tracker.is_active(topic.id),
        }
    }
}

fn connection_state<T: ProgressTracker + ?Sized>(tracker: &T, from: TopicId, to: TopicId) -> ConnectionState {
    match (tracker.is_unlocked(from), tracker.is_unlocked(to)) {
        (_, true) => ConnectionState::Open,
        (true, false) => ConnectionState::Next,
        (false, false) => ConnectionState::Closed,
    }
}
