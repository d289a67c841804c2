//! Per-line terminal typewriter
//!
//! A lighter stepper used for the transcript (boot messages, command
//! echoes). Unlike the reveal scheduler it has no lock and no visibility
//! gating: it runs as soon as it is invoked, and callers get await-style
//! sequencing simply by driving one line to completion before the next.

use std::time::Duration;

/// Default delay between transcript characters
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_millis(15);

/// Character-by-character stepper for a single transcript line
#[derive(Debug, Clone)]
pub struct LineTypewriter {
    text: String,
    cursor: usize,
    shown: String,
}

impl LineTypewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            shown: String::new(),
        }
    }

    /// Append the next character, returning it, or None once the line is
    /// fully typed
    pub fn tick(&mut self) -> Option<char> {
        let ch = self.text[self.cursor..].chars().next()?;
        self.cursor += ch.len_utf8();
        self.shown.push(ch);
        Some(ch)
    }

    pub fn shown(&self) -> &str {
        &self.shown
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_emit_characters_in_order() {
        let mut tw = LineTypewriter::new("boot");
        assert_eq!(tw.tick(), Some('b'));
        assert_eq!(tw.tick(), Some('o'));
        assert_eq!(tw.tick(), Some('o'));
        assert_eq!(tw.tick(), Some('t'));
        assert_eq!(tw.tick(), None);
        assert!(tw.is_done());
        assert_eq!(tw.shown(), "boot");
    }

    #[test]
    fn empty_line_is_done_immediately() {
        let mut tw = LineTypewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn two_typewriters_are_independent() {
        let mut a = LineTypewriter::new("aa");
        let mut b = LineTypewriter::new("bb");
        assert_eq!(a.tick(), Some('a'));
        assert_eq!(b.tick(), Some('b'));
        assert_eq!(a.tick(), Some('a'));
        assert!(a.is_done());
        assert!(!b.is_done());
    }
}
