//! Command lookup tables
//!
//! Recognized literals map to handlers through these tables; anything that
//! misses both tables falls through to the state-dependent selection match
//! and finally to the generic echo.

use crate::types::StoryRef;

/// Global commands, recognized in every mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Builtin {
    Exit,
    Clear,
    List,
    Back,
    Mute,
    Unmute,
}

/// Look up a lowercased line in the global command table
pub(super) fn builtin(cmd: &str) -> Option<Builtin> {
    const TABLE: &[(&str, Builtin)] = &[
        ("exit", Builtin::Exit),
        ("clear", Builtin::Clear),
        ("list", Builtin::List),
        ("ls", Builtin::List),
        ("back", Builtin::Back),
        ("mute", Builtin::Mute),
        ("unmute", Builtin::Unmute),
    ];
    TABLE
        .iter()
        .find(|(keyword, _)| *keyword == cmd)
        .map(|(_, b)| *b)
}

/// Canned response for an easter-egg keyword
pub(super) struct Egg {
    pub lines: &'static [&'static str],
    pub clip: Option<&'static str>,
    /// Some eggs navigate straight into a hidden story
    pub story: Option<fn() -> StoryRef>,
}

fn hidden_archive() -> StoryRef {
    StoryRef {
        id: "story_lawithanx".to_string(),
        title: "The LawithanX File".to_string(),
        selection: "*".to_string(),
    }
}

/// Look up a lowercased line in the easter-egg table
pub(super) fn easter_egg(cmd: &str) -> Option<Egg> {
    match cmd {
        "whoami" => Some(Egg {
            lines: &["admin", "Or so the system believes."],
            clip: None,
            story: None,
        }),
        "sudo" => Some(Egg {
            lines: &["Permission denied. Root belongs to the archive."],
            clip: None,
            story: None,
        }),
        "chai" => Some(Egg {
            lines: &["LIFE FORCE DETECTED (18)"],
            clip: Some("pulse"),
            story: None,
        }),
        "lawithanx" => Some(Egg {
            lines: &["[SYSTEM] HIDDEN ARCHIVE UNLOCKED"],
            clip: None,
            story: Some(hidden_archive),
        }),
        _ => None,
    }
}
