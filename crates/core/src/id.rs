//! Identifiers for Biology City entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Position of a topic in the unlock sequence, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TopicId(u32);

impl TopicId {
    /// The first topic, unlocked when a session starts.
    pub const FIRST: TopicId = TopicId(1);

    /// Create a topic id. Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position in the unlock sequence.
    pub fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }

    /// The topic that follows this one in the unlock order.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<u32> for TopicId {
    type Error = InvalidTopicId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidTopicId::OutOfRange(value.into()))
    }
}

impl TryFrom<i64> for TopicId {
    type Error = InvalidTopicId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidTopicId::OutOfRange(value))
    }
}

impl From<TopicId> for u32 {
    fn from(id: TopicId) -> Self {
        id.0
    }
}

impl std::str::FromStr for TopicId {
    type Err = InvalidTopicId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidTopicId::Unparsable(s.to_string()))?;
        Self::try_from(value)
    }
}

/// A raw value that cannot name any topic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTopicId {
    /// Zero, negative, or too large
    #[error("not a valid topic id: {0}")]
    OutOfRange(i64),

    /// Not parseable as a 64-bit integer
    #[error("not a topic id: '{0}'")]
    Unparsable(String),
}

/// Unique identifier for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Ulid);

impl SessionId {
    /// Generate a new SessionId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a click event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Ulid);

impl EventId {
    /// Generate a new EventId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_rejects_zero() {
        assert_eq!(TopicId::new(0), None);
        assert_eq!(TopicId::new(1), Some(TopicId::FIRST));
    }

    #[test]
    fn test_topic_id_from_raw_integer() {
        assert_eq!(TopicId::try_from(7i64).map(TopicId::get), Ok(7));
        assert_eq!(TopicId::try_from(-3i64), Err(InvalidTopicId::OutOfRange(-3)));
        assert_eq!(TopicId::try_from(0i64), Err(InvalidTopicId::OutOfRange(0)));
        assert_eq!(TopicId::try_from(0u32), Err(InvalidTopicId::OutOfRange(0)));
        assert!(TopicId::try_from(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_topic_id_parse() {
        let id: TopicId = " 12 ".parse().unwrap();
        assert_eq!(id.get(), 12);
        assert_eq!("-1".parse::<TopicId>(), Err(InvalidTopicId::OutOfRange(-1)));
    }

    #[test]
    fn test_topic_id_parse_error_keeps_input() {
        let err = "abc".parse::<TopicId>().unwrap_err();
        assert_eq!(err, InvalidTopicId::Unparsable("abc".to_string()));
        assert_eq!(err.to_string(), "not a topic id: 'abc'");

        let err = "99999999999999999999".parse::<TopicId>().unwrap_err();
        assert!(err.to_string().contains("99999999999999999999"));
    }

    #[test]
    fn test_topic_id_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<TopicId>("0").is_err());
        assert!(serde_json::from_str::<TopicId>("-4").is_err());

        let id: TopicId = serde_json::from_str("14").unwrap();
        assert_eq!(id.get(), 14);
        assert_eq!(serde_json::to_string(&id).unwrap(), "14");
    }

    #[test]
    fn test_topic_id_neighbours() {
        let id = TopicId::new(2).unwrap();
        assert_eq!(id.next().map(TopicId::get), Some(3));
        assert_eq!(id.index(), 1);
        assert_eq!(TopicId::FIRST.index(), 0);
        assert_eq!(TopicId::new(u32::MAX).unwrap().next(), None);
    }
}
