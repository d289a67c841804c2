//! Terminal command interpreter
//!
//! A finite-state machine over `{library, collection, story}` that parses
//! single-line commands, validates them against the input deny-list, and
//! dispatches to navigation and content effects. The interpreter itself
//! performs no IO; it returns an ordered list of [`Effect`]s for the
//! application layer to execute.

mod dispatch;
pub mod security;

use crate::types::{Catalog, Mode, SessionState, StoryRef};
use dispatch::Builtin;

pub use security::INTEGRITY_WARNING;

/// Side effects requested by a single submitted line, in execution order
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append the prompt-prefixed echo of the submitted line
    Echo(String),
    /// Append a transcript line immediately
    Print(String),
    /// Append a transcript line with the typewriter animation
    TypeLine(String),
    /// Clear the transcript
    Clear,
    /// List the library's collections
    ListLibrary,
    /// List the active collection's stories
    ListCollection,
    /// Load and render a story document
    LoadStory(StoryRef),
    /// Leave the story view, restoring the given mode's listing
    ReturnToTerminal { to: Mode },
    /// Run the power-off theater
    Shutdown,
    /// Play a short audio clip (suppressed while muted)
    PlayClip(&'static str),
}

/// Shell prompt prefix used for command echoes
pub const PROMPT: &str = "admin@engine:~$";

/// The command interpreter. Stateless by itself; all mutable state lives
/// in the [`SessionState`] passed to [`Interpreter::submit`].
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Process one submitted line against the current session and catalog.
    ///
    /// Dispatch priority is fixed: deny-list filter, global commands,
    /// easter eggs, state-dependent selection lookup, then the generic
    /// echo fallback. Unmatched input is not an error.
    pub fn submit(
        &self,
        session: &mut SessionState,
        catalog: &Catalog,
        raw: &str,
    ) -> Vec<Effect> {
        if !session.accepts_input() {
            return Vec::new();
        }

        let line = raw.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let mut effects = vec![Effect::Echo(format!("{PROMPT} {line}"))];

        if !security::check_integrity(line) {
            log::debug!("rejected input by deny-list: {line:?}");
            effects.push(Effect::Print(INTEGRITY_WARNING.to_string()));
            return effects;
        }

        let lowered = line.to_lowercase();

        if let Some(builtin) = dispatch::builtin(&lowered) {
            self.run_builtin(builtin, session, &mut effects);
            return effects;
        }

        if let Some(egg) = dispatch::easter_egg(&lowered) {
            for canned in egg.lines {
                effects.push(Effect::TypeLine((*canned).to_string()));
            }
            if let Some(clip) = egg.clip {
                effects.push(Effect::PlayClip(clip));
            }
            if let Some(story) = egg.story {
                let story = story();
                session.mode = Mode::Story;
                effects.push(Effect::Print(format!("Loading {}...", story.title)));
                effects.push(Effect::LoadStory(story));
            }
            return effects;
        }

        if self.select(session, catalog, line, &mut effects) {
            return effects;
        }

        // Shell-like fallback: unmatched input echoes verbatim
        effects.push(Effect::Print(line.to_string()));
        effects
    }

    /// Restore the pre-load mode after a failed story load, so the user is
    /// never stranded in a half-entered story
    pub fn unwind_failed_load(&self, session: &mut SessionState) {
        if session.mode == Mode::Story {
            session.mode = if session.active_collection.is_some() {
                Mode::Collection
            } else {
                Mode::Library
            };
        }
    }

    fn run_builtin(&self, builtin: Builtin, session: &mut SessionState, effects: &mut Vec<Effect>) {
        match builtin {
            Builtin::Exit => {
                session.reset_navigation();
                effects.push(Effect::Shutdown);
            }
            Builtin::Clear => effects.push(Effect::Clear),
            Builtin::List => match session.mode {
                Mode::Collection | Mode::Story if session.active_collection.is_some() => {
                    effects.push(Effect::ListCollection);
                }
                _ => effects.push(Effect::ListLibrary),
            },
            Builtin::Back => match session.mode {
                Mode::Collection => {
                    session.reset_navigation();
                    effects.push(Effect::ListLibrary);
                }
                Mode::Story => {
                    let to = if session.active_collection.is_some() {
                        Mode::Collection
                    } else {
                        Mode::Library
                    };
                    session.mode = to;
                    effects.push(Effect::ReturnToTerminal { to });
                    effects.push(match to {
                        Mode::Collection => Effect::ListCollection,
                        _ => Effect::ListLibrary,
                    });
                }
                Mode::Library => {
                    effects.push(Effect::Print("Already at the library root.".to_string()));
                }
            },
            Builtin::Mute => {
                session.muted = true;
                effects.push(Effect::Print("Audio muted.".to_string()));
            }
            Builtin::Unmute => {
                session.muted = false;
                effects.push(Effect::Print("Audio unmuted.".to_string()));
            }
        }
    }

    /// State-dependent selection lookup; returns true when the line
    /// matched a catalog key
    fn select(
        &self,
        session: &mut SessionState,
        catalog: &Catalog,
        line: &str,
        effects: &mut Vec<Effect>,
    ) -> bool {
        match session.mode {
            Mode::Library => {
                let Some((index, entry)) = catalog.find_collection(line) else {
                    return false;
                };
                session.mode = Mode::Collection;
                session.active_collection = Some(index);
                effects.push(Effect::TypeLine("[SYSTEM] ACCESSING DATA_STREAM...".to_string()));
                effects.push(Effect::Print(format!("Opening {}...", entry.title)));
                effects.push(Effect::ListCollection);
                true
            }
            Mode::Collection => {
                let story = session
                    .active_collection
                    .and_then(|i| catalog.get(i))
                    .and_then(|entry| entry.find_story(line))
                    .cloned();
                let Some(story) = story else {
                    return false;
                };
                session.mode = Mode::Story;
                effects.push(Effect::TypeLine("[SYSTEM] ACCESSING DATA_STREAM...".to_string()));
                effects.push(Effect::Print(format!("Loading {}...", story.title)));
                effects.push(Effect::LoadStory(story));
                true
            }
            Mode::Story => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CollectionEntry, StoryRef};

    fn catalog() -> Catalog {
        Catalog::new(vec![CollectionEntry {
            selection: "1".to_string(),
            title: "A".to_string(),
            items: vec![StoryRef {
                id: "x".to_string(),
                title: "Story X".to_string(),
                selection: "1".to_string(),
            }],
        }])
    }

    fn powered_session() -> SessionState {
        SessionState {
            powered: true,
            ..SessionState::new()
        }
    }

    #[test]
    fn empty_line_is_a_complete_noop() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        assert!(interp.submit(&mut session, &catalog(), "").is_empty());
        assert!(interp.submit(&mut session, &catalog(), "   ").is_empty());
    }

    #[test]
    fn unpowered_session_ignores_input() {
        let interp = Interpreter::new();
        let mut session = SessionState::new();
        assert!(interp.submit(&mut session, &catalog(), "list").is_empty());
    }

    #[test]
    fn denied_input_warns_without_state_change() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        let effects = interp.submit(&mut session, &catalog(), "<script>alert(1)</script>");
        assert_eq!(session.mode, Mode::Library);
        assert!(session.active_collection.is_none());
        assert_eq!(
            effects,
            vec![
                Effect::Echo(format!("{PROMPT} <script>alert(1)</script>")),
                Effect::Print(INTEGRITY_WARNING.to_string()),
            ]
        );
    }

    #[test]
    fn collection_selection_enters_collection_mode() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        let effects = interp.submit(&mut session, &catalog(), "1");
        assert_eq!(session.mode, Mode::Collection);
        assert_eq!(session.active_collection, Some(0));
        assert!(effects.contains(&Effect::ListCollection));
    }

    #[test]
    fn story_selection_emits_load_with_eager_transition() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        interp.submit(&mut session, &catalog(), "1");
        let effects = interp.submit(&mut session, &catalog(), "1");
        assert_eq!(session.mode, Mode::Story);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::LoadStory(story) if story.id == "x"
        )));
    }

    #[test]
    fn back_from_collection_returns_to_library() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        interp.submit(&mut session, &catalog(), "1");
        let effects = interp.submit(&mut session, &catalog(), "back");
        assert_eq!(session.mode, Mode::Library);
        assert!(session.active_collection.is_none());
        assert!(effects.contains(&Effect::ListLibrary));
    }

    #[test]
    fn back_from_story_restores_collection_when_active() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        interp.submit(&mut session, &catalog(), "1");
        interp.submit(&mut session, &catalog(), "1");
        let effects = interp.submit(&mut session, &catalog(), "back");
        assert_eq!(session.mode, Mode::Collection);
        assert!(effects.contains(&Effect::ReturnToTerminal { to: Mode::Collection }));
    }

    #[test]
    fn commands_match_case_insensitively() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        interp.submit(&mut session, &catalog(), "1");
        let effects = interp.submit(&mut session, &catalog(), "BACK");
        assert_eq!(session.mode, Mode::Library);
        assert!(effects.contains(&Effect::ListLibrary));
    }

    #[test]
    fn selections_match_case_sensitively() {
        let mut cat = catalog();
        cat.collections[0].selection = "A".to_string();
        let interp = Interpreter::new();
        let mut session = powered_session();
        let effects = interp.submit(&mut session, &cat, "a");
        // "a" misses the catalog key "A" and falls through to the echo
        assert_eq!(session.mode, Mode::Library);
        assert_eq!(effects.last(), Some(&Effect::Print("a".to_string())));
    }

    #[test]
    fn unknown_command_echoes_verbatim_in_every_mode() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        for _ in 0..3 {
            let effects = interp.submit(&mut session, &catalog(), "foobar");
            assert_eq!(effects.last(), Some(&Effect::Print("foobar".to_string())));
            assert_eq!(session.mode, Mode::Library);
        }
    }

    #[test]
    fn exit_resets_navigation_and_requests_shutdown() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        interp.submit(&mut session, &catalog(), "1");
        let effects = interp.submit(&mut session, &catalog(), "exit");
        assert_eq!(session.mode, Mode::Library);
        assert!(session.active_collection.is_none());
        assert!(effects.contains(&Effect::Shutdown));
    }

    #[test]
    fn unwind_failed_load_restores_pre_load_mode() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        interp.submit(&mut session, &catalog(), "1");
        interp.submit(&mut session, &catalog(), "1");
        assert_eq!(session.mode, Mode::Story);
        interp.unwind_failed_load(&mut session);
        assert_eq!(session.mode, Mode::Collection);

        session.active_collection = None;
        session.mode = Mode::Story;
        interp.unwind_failed_load(&mut session);
        assert_eq!(session.mode, Mode::Library);
    }

    #[test]
    fn easter_egg_types_canned_lines() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        let effects = interp.submit(&mut session, &catalog(), "chai");
        assert!(effects.contains(&Effect::TypeLine("LIFE FORCE DETECTED (18)".to_string())));
        assert!(effects.contains(&Effect::PlayClip("pulse")));
        assert_eq!(session.mode, Mode::Library);
    }

    #[test]
    fn hidden_archive_egg_navigates_into_a_story() {
        let interp = Interpreter::new();
        let mut session = powered_session();
        let effects = interp.submit(&mut session, &catalog(), "lawithanx");
        assert_eq!(session.mode, Mode::Story);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::LoadStory(story) if story.id == "story_lawithanx"
        )));
    }
}
