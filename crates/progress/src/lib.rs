//! Progression tracking for Biology City.
//!
//! The linear unlock chain, per-visit sessions, and the read-only view
//! that map renderers draw from.

#![warn(missing_docs)]

pub mod tracker;
pub mod session;
pub mod view;

pub use tracker::{ProgressTracker, FrontierTracker};
pub use session::Session;
pub use view::{MapView, TopicView, Connection, ConnectionState, ProgressSummary, CurrentTopic, DistrictView};
