//! Application layer: the engine that hosts embed

pub mod engine;

pub use engine::{Output, StoryEngine};
