//! Topic catalog - the validated, ordered list of buildings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use crate::error::{CatalogError, Result};
use crate::id::TopicId;
use crate::topic::{Position, Topic};

/// Ordered topics whose ids are exactly `1..=N`.
///
/// The order of the catalog is the unlock order. Outside the built-in
/// layouts, a catalog can only be obtained through [`TopicCatalog::new`]
/// (or deserialization, which goes through it), so every instance upholds
/// the contiguity invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct TopicCatalog {
    topics: Vec<Topic>,
    anchor: Position,
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    anchor: Position,
    topics: Vec<Topic>,
}

impl TryFrom<CatalogFile> for TopicCatalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Self::new(file.topics, file.anchor)
    }
}

impl From<TopicCatalog> for CatalogFile {
    fn from(catalog: TopicCatalog) -> Self {
        Self {
            anchor: catalog.anchor,
            topics: catalog.topics,
        }
    }
}

impl TopicCatalog {
    /// Validate and build a catalog.
    ///
    /// `anchor` is added to a topic's position to get the point where
    /// connecting paths attach to the building.
    pub fn new(topics: Vec<Topic>, anchor: Position) -> Result<Self> {
        if topics.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, topic) in topics.iter().enumerate() {
            let expected = index as u32 + 1;
            if topic.id.get() != expected {
                return Err(CatalogError::NonContiguous {
                    index,
                    expected,
                    found: topic.id,
                });
            }
            if topic.name.trim().is_empty() {
                return Err(CatalogError::BlankField { id: topic.id, field: "name" });
            }
            if topic.display_type.as_str().trim().is_empty() {
                return Err(CatalogError::BlankField { id: topic.id, field: "display_type" });
            }
        }

        Ok(Self::from_parts(topics, anchor))
    }

    /// Build a catalog whose topics are known to be valid.
    pub(crate) fn from_parts(topics: Vec<Topic>, anchor: Position) -> Self {
        Self { topics, anchor }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Number of topics (N).
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the catalog has no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Id of the last topic in the sequence.
    pub fn last_id(&self) -> TopicId {
        self.topics[self.topics.len() - 1].id
    }

    /// Look up a topic.
    pub fn get(&self, id: TopicId) -> Option<&Topic> {
        self.topics.get(id.index())
    }

    /// All topics in unlock order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Iterate topics in unlock order.
    pub fn iter(&self) -> std::slice::Iter<'_, Topic> {
        self.topics.iter()
    }

    /// Offset from a building's position to its path attachment point.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Attachment point of a topic, if it exists.
    pub fn anchor_of(&self, id: TopicId) -> Option<Position> {
        self.get(id).map(|t| t.position.offset(self.anchor))
    }

    /// Districts in order of first appearance, with their topic ids.
    ///
    /// Topics without a district are skipped.
    pub fn districts(&self) -> Vec<(&str, Vec<TopicId>)> {
        let mut districts: Vec<(&str, Vec<TopicId>)> = Vec::new();
        for topic in &self.topics {
            let Some(name) = topic.district.as_deref() else {
                continue;
            };
            match districts.iter_mut().find(|(d, _)| *d == name) {
                Some((_, ids)) => ids.push(topic.id),
                None => districts.push((name, vec![topic.id])),
            }
        }
        districts
    }
}

impl<'a> IntoIterator for &'a TopicCatalog {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
