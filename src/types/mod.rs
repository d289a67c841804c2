//! Core data types for the story terminal

pub mod catalog;
pub mod event;
pub mod session;
pub mod story;

pub use catalog::{Catalog, CollectionEntry, StoryRef, story_filename};
pub use event::VisibilityEvent;
pub use session::{Mode, SessionState};
pub use story::{StoryDocument, StoryFormatError};
