//! High-level story engine
//!
//! Glues the interpreter, the repositories, and the renderer. Every user
//! interaction goes through [`StoryEngine::submit`]; the engine executes
//! the interpreter's effects, performing the async loads they request, and
//! returns presentation events for the host to display. No error here is
//! fatal: load failures become transcript error lines and the engine stays
//! interactive.

use crate::infrastructure::{CatalogRepository, StoryRepository};
use crate::interpreter::{Effect, Interpreter};
use crate::render::{RenderedStory, render_story};
use crate::types::{Catalog, SessionState, StoryRef};
use std::sync::Arc;

/// Presentation events for the host, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Append a transcript line immediately
    Line(String),
    /// Append a transcript line with the typewriter animation
    Typed(String),
    /// Append an error-styled transcript line
    ErrorLine(String),
    /// Clear the transcript
    Clear,
    /// Switch to the story viewport and show the rendered story
    Story(RenderedStory),
    /// Leave the story viewport, back to the terminal
    ReturnToTerminal,
    /// Play a short audio clip
    Clip(&'static str),
    /// Run the power-off theater
    ShutdownTheater,
}

/// The engine owning the session state and the loaded catalog
pub struct StoryEngine {
    session: SessionState,
    interpreter: Interpreter,
    catalog_repo: Arc<dyn CatalogRepository>,
    story_repo: Arc<dyn StoryRepository>,
    catalog: Catalog,
}

impl StoryEngine {
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        story_repo: Arc<dyn StoryRepository>,
    ) -> Self {
        Self {
            session: SessionState::new(),
            interpreter: Interpreter::new(),
            catalog_repo,
            story_repo,
            catalog: Catalog::default(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dismiss_intro(&mut self) {
        self.session.dismiss_intro();
    }

    /// Power the engine on, optionally skipping the boot theater, and load
    /// the catalog. A catalog failure is reported inline and leaves the
    /// terminal interactive.
    pub async fn power_on(&mut self, skip_boot: bool) -> Vec<Output> {
        if self.session.powered {
            return Vec::new();
        }
        self.session.powered = true;

        let mut outputs = Vec::new();
        if !skip_boot {
            outputs.push(Output::Typed("Initializing Story Engine v2.0...".to_string()));
            outputs.push(Output::Typed("Loading library modules...".to_string()));
        }

        match self.catalog_repo.load_catalog().await {
            Ok(catalog) => {
                self.catalog = catalog;
                outputs.push(Output::Typed("Library loaded successfully.".to_string()));
                outputs.push(Output::Typed("--------------------------------".to_string()));
                self.list_library(&mut outputs);
            }
            Err(e) => {
                log::warn!("catalog load failed: {e}");
                outputs.push(Output::ErrorLine(format!("Error: {e}")));
            }
        }
        outputs
    }

    /// Process one submitted command line
    pub async fn submit(&mut self, line: &str) -> Vec<Output> {
        let effects = self
            .interpreter
            .submit(&mut self.session, &self.catalog, line);

        let mut outputs = Vec::new();
        for effect in effects {
            self.run_effect(effect, &mut outputs).await;
        }
        outputs
    }

    async fn run_effect(&mut self, effect: Effect, outputs: &mut Vec<Output>) {
        match effect {
            Effect::Echo(text) | Effect::Print(text) => outputs.push(Output::Line(text)),
            Effect::TypeLine(text) => outputs.push(Output::Typed(text)),
            Effect::Clear => outputs.push(Output::Clear),
            Effect::ListLibrary => self.list_library(outputs),
            Effect::ListCollection => self.list_collection(outputs),
            Effect::LoadStory(story) => self.load_story(story, outputs).await,
            Effect::ReturnToTerminal { .. } => outputs.push(Output::ReturnToTerminal),
            Effect::Shutdown => self.shutdown(outputs),
            Effect::PlayClip(clip) => {
                if !self.session.muted {
                    outputs.push(Output::Clip(clip));
                }
            }
        }
    }

    async fn load_story(&mut self, story: StoryRef, outputs: &mut Vec<Output>) {
        match self.story_repo.load_story(&story.id).await {
            Ok(doc) => {
                outputs.push(Output::Story(render_story(&doc, &story)));
            }
            Err(e) => {
                log::warn!("story load failed for {}: {e}", story.id);
                outputs.push(Output::ErrorLine(format!("Error: {e}")));
                outputs.push(Output::ErrorLine(format!(
                    "Failed to load \"{}\". Check the data directory.",
                    story.title
                )));
                self.interpreter.unwind_failed_load(&mut self.session);
            }
        }
    }

    fn shutdown(&mut self, outputs: &mut Vec<Output>) {
        if self.session.transitioning {
            return;
        }
        self.session.transitioning = true;
        outputs.push(Output::ShutdownTheater);
        outputs.push(Output::Clear);
        self.session.powered = false;
        self.session.transitioning = false;
    }

    fn list_library(&self, outputs: &mut Vec<Output>) {
        outputs.push(Output::Line("AVAILABLE COLLECTIONS:".to_string()));
        for entry in &self.catalog.collections {
            outputs.push(Output::Typed(format!("[{}] {}", entry.selection, entry.title)));
        }
        outputs.push(Output::Line("--------------------------------".to_string()));
        outputs.push(Output::Line(
            "Please select the number index of the collection you choose. (Example: 1)"
                .to_string(),
        ));
        outputs.push(Output::Line("Type 'exit' to shutdown the engine.".to_string()));
    }

    fn list_collection(&self, outputs: &mut Vec<Output>) {
        let Some(entry) = self.session.active_collection.and_then(|i| self.catalog.get(i)) else {
            self.list_library(outputs);
            return;
        };
        outputs.push(Output::Line("AVAILABLE STORIES:".to_string()));
        for story in &entry.items {
            outputs.push(Output::Typed(format!("[{}] {}", story.selection, story.title)));
        }
        outputs.push(Output::Line("--------------------------------".to_string()));
        outputs.push(Output::Line(
            "Please select the number index of the story you choose. (Example: 1)".to_string(),
        ));
        outputs.push(Output::Line("Type 'back' to return to the library.".to_string()));
    }
}
