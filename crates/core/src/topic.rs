//! Topic model - the buildings of the city.

use serde::{Deserialize, Serialize};
use crate::id::TopicId;

/// A topic is one building on the map, representing a biology unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Position in the unlock sequence
    pub id: TopicId,

    /// Display name
    pub name: String,

    /// Tag telling renderers which building artwork to draw
    pub display_type: DisplayType,

    /// Top-left corner of the building on the map
    pub position: Position,

    /// District the building belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Zoning of the building's plot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
}

impl Topic {
    /// Create a topic without district or zone.
    pub fn new(
        id: TopicId,
        name: impl Into<String>,
        display_type: impl Into<DisplayType>,
        position: Position,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            display_type: display_type.into(),
            position,
            district: None,
            zone: None,
        }
    }

    /// Place the topic in a district and zone.
    pub fn in_district(mut self, district: impl Into<String>, zone: Zone) -> Self {
        self.district = Some(district.into());
        self.zone = Some(zone);
        self
    }
}

/// Opaque artwork tag, e.g. `atp-power-plant`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayType(String);

impl DisplayType {
    /// Borrow the tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DisplayType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DisplayType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map coordinate in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset
    pub x: f32,
    /// Vertical offset
    pub y: f32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset.
    pub fn offset(self, by: Position) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// Zoning of a building plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Power plants, factories, reactors
    Industrial,
    /// Stations and markets
    Commercial,
    /// Museums, towers, observatories
    Educational,
    /// Hospitals
    Medical,
    /// Laboratories and research parks
    Research,
}

impl Zone {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Industrial => "industrial",
            Zone::Commercial => "commercial",
            Zone::Educational => "educational",
            Zone::Medical => "medical",
            Zone::Research => "research",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_without_district_omits_fields() {
        let topic = Topic::new(TopicId::FIRST, "ATP Power Plant", "atp-power-plant", Position::new(50.0, 400.0));
        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["display_type"], "atp-power-plant");
        assert!(json.get("district").is_none());
        assert!(json.get("zone").is_none());
    }

    #[test]
    fn test_topic_in_district() {
        let topic = Topic::new(TopicId::FIRST, "ATP Power Plant", "atp-power-plant", Position::default())
            .in_district("Energy Basics", Zone::Industrial);
        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(json["district"], "Energy Basics");
        assert_eq!(json["zone"], "industrial");

        let back: Topic = serde_json::from_value(json).unwrap();
        assert_eq!(back, topic);
    }

    #[test]
    fn test_position_offset() {
        let anchor = Position::new(200.0, 100.0).offset(Position::new(40.0, 60.0));
        assert_eq!(anchor, Position::new(240.0, 160.0));
    }
}
