//! Error types for catalog construction and loading.

use crate::id::TopicId;

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while building or loading a topic catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog has no topics
    #[error("catalog has no topics")]
    Empty,

    /// Topic ids are not exactly 1..=N in order
    #[error("topic at position {index} has id {found}, expected {expected}")]
    NonContiguous {
        /// Zero-based position in the topic list
        index: usize,
        /// Id that should be at this position
        expected: u32,
        /// Id actually found
        found: TopicId,
    },

    /// A required text field is blank
    #[error("topic {id} has a blank {field}")]
    BlankField {
        /// Offending topic
        id: TopicId,
        /// Field name
        field: &'static str,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A map variant name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown map variant '{0}' (expected flat, isometric, realistic or cities-skylines)")]
pub struct UnknownVariant(pub String);
