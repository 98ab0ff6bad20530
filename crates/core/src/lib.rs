//! Biology City core data models.
//!
//! This crate defines the topics, layouts and events that the progression
//! tracker and the map renderers share.

#![warn(missing_docs)]

// Identities
mod id;

// Static map data
mod topic;
mod catalog;
mod layout;

// Input
mod event;

mod error;

// Re-exports
pub use id::*;

pub use topic::{Topic, DisplayType, Position, Zone};
pub use catalog::TopicCatalog;
pub use layout::{MapVariant, DISPLAY_TYPES};
pub use event::{ClickEvent, ClickOutcome};
pub use error::{CatalogError, Result, UnknownVariant};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
