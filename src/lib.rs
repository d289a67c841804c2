//! # storyterm
//!
//! A terminal-style story engine: a command interpreter over a library of
//! story collections, and a sequential reveal scheduler that types content
//! one character at a time, strictly in document order, gated by
//! visibility.
//!
//! ## Quick Start
//!
//! ```rust
//! use storyterm::application::StoryEngine;
//! use storyterm::infrastructure::InMemoryRepository;
//! use storyterm::types::{Catalog, CollectionEntry, Mode, StoryRef};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let catalog = Catalog::new(vec![CollectionEntry {
//!     selection: "1".to_string(),
//!     title: "Archive".to_string(),
//!     items: vec![StoryRef {
//!         id: "x".to_string(),
//!         title: "Story X".to_string(),
//!         selection: "1".to_string(),
//!     }],
//! }]);
//! let repo = Arc::new(InMemoryRepository::new(catalog));
//! let mut engine = StoryEngine::new(repo.clone(), repo);
//!
//! engine.power_on(true).await;
//! engine.submit("1").await;
//! assert_eq!(engine.session().mode, Mode::Collection);
//! # }
//! ```
//!
//! ## Reveal scheduling
//!
//! ```rust
//! use storyterm::scheduler::{RevealScheduler, RevealTarget, RewindPolicy, TargetStatus};
//! use storyterm::types::VisibilityEvent;
//!
//! let targets = vec![RevealTarget::new(0, "hi")];
//! let mut scheduler = RevealScheduler::new(targets, RewindPolicy::Rewind);
//! scheduler.handle(VisibilityEvent::Entered(0));
//! scheduler.tick();
//! scheduler.tick();
//! assert_eq!(scheduler.targets()[0].status, TargetStatus::Done);
//! assert_eq!(scheduler.targets()[0].shown, "hi");
//! ```

pub mod application;
pub mod cli;
pub mod infrastructure;
pub mod interpreter;
pub mod render;
pub mod scheduler;
pub mod types;

pub use application::{Output, StoryEngine};
pub use interpreter::{Effect, Interpreter};
pub use scheduler::{RevealScheduler, RevealTarget, RewindPolicy, TargetStatus};
pub use types::{Catalog, Mode, SessionState, StoryRef, VisibilityEvent};
