//! Session state owned by the engine
//!
//! All formerly-ambient flags live here and are passed by reference to the
//! interpreter, so there is no hidden coupling between handlers.

use serde::{Deserialize, Serialize};

/// Navigation depth of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    #[default]
    Library,
    Collection,
    Story,
}

/// The single mutable record the interpreter operates on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionState {
    pub mode: Mode,
    /// Index of the selected collection in the catalog, if any
    pub active_collection: Option<usize>,
    pub muted: bool,
    pub powered: bool,
    /// Guards reentrant power-on/shutdown sequences
    pub transitioning: bool,
    /// Whether the introductory overlay was dismissed this session
    pub intro_dismissed: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the terminal currently accepts commands
    pub fn accepts_input(&self) -> bool {
        self.powered && !self.transitioning
    }

    pub fn dismiss_intro(&mut self) {
        self.intro_dismissed = true;
    }

    /// Reset navigation back to the library root
    pub fn reset_navigation(&mut self) {
        self.mode = Mode::Library;
        self.active_collection = None;
    }
}
