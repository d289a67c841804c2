//! External events delivered to the reveal scheduler
//!
//! Viewport intersection is modeled as discrete events keyed by target
//! order, so the character-ticking loop stays a pure function of target
//! state and can be tested without a real viewport.

use serde::{Deserialize, Serialize};

/// A visibility transition for a single reveal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityEvent {
    /// The target scrolled into view
    Entered(usize),
    /// The target scrolled out of view
    Left(usize),
}

impl VisibilityEvent {
    pub fn order(&self) -> usize {
        match self {
            Self::Entered(order) | Self::Left(order) => *order,
        }
    }
}
