//! Sequential reveal scheduler
//!
//! Types the text of reveal targets one character per tick, enforcing a
//! global typing lock (only one target animates at a time) and strict
//! document-order pacing: a later target never starts while an earlier one
//! is still pending, even if the later one is already visible.
//!
//! The scheduler is a pure state machine advanced by [`RevealScheduler::tick`];
//! timers live in the driver (the CLI player uses `tokio::time::sleep`,
//! tests call `tick` directly).

pub mod typewriter;

pub use typewriter::LineTypewriter;

use crate::types::VisibilityEvent;
use std::time::Duration;

/// Lifecycle of a single reveal target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    /// Created, not yet visible
    Pending,
    /// Visible and waiting for its turn
    Ready,
    /// Currently animating; at most one target process-wide
    Typing,
    /// Fully revealed
    Done,
}

/// A unit of text eligible for character-by-character display
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    /// Document position; fixed at creation, never changes
    pub order: usize,
    pub text: String,
    pub shown: String,
    pub status: TargetStatus,
}

impl RevealTarget {
    pub fn new(order: usize, text: impl Into<String>) -> Self {
        Self {
            order,
            text: text.into(),
            shown: String::new(),
            status: TargetStatus::Pending,
        }
    }

    fn reset(&mut self) {
        self.status = TargetStatus::Pending;
        self.shown.clear();
    }
}

/// What happens when a target scrolls out of view before finishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewindPolicy {
    /// Unfinished targets reset and replay when scrolled back into view
    #[default]
    Rewind,
    /// Once observed, a target reveals exactly once and is never reset
    RevealOnce,
}

/// Per-character delay carried for the real-time driver; never consulted
/// by the tick logic itself
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(25);

/// The animation coordinator
#[derive(Debug)]
pub struct RevealScheduler {
    targets: Vec<RevealTarget>,
    /// Index of the target holding the typing lock, with its byte cursor
    typing: Option<(usize, usize)>,
    policy: RewindPolicy,
    char_delay: Duration,
}

impl RevealScheduler {
    pub fn new(targets: Vec<RevealTarget>, policy: RewindPolicy) -> Self {
        Self {
            targets,
            typing: None,
            policy,
            char_delay: DEFAULT_CHAR_DELAY,
        }
    }

    pub fn with_char_delay(mut self, delay: Duration) -> Self {
        self.char_delay = delay;
        self
    }

    pub fn char_delay(&self) -> Duration {
        self.char_delay
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    /// Whether the typing lock is currently held
    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    /// Whether every target has fully revealed
    pub fn is_done(&self) -> bool {
        self.targets.iter().all(|t| t.status == TargetStatus::Done)
    }

    /// Apply a visibility transition and run a scheduling pass
    pub fn handle(&mut self, event: VisibilityEvent) {
        match event {
            VisibilityEvent::Entered(order) => {
                if let Some(target) = self.target_mut(order)
                    && target.status == TargetStatus::Pending
                {
                    target.status = TargetStatus::Ready;
                }
            }
            VisibilityEvent::Left(order) => {
                if self.policy == RewindPolicy::Rewind
                    && let Some(target) = self.target_mut(order)
                    && target.status != TargetStatus::Done
                {
                    // Aborts an in-flight animation too; the lock is
                    // released by the validity check on the next tick
                    target.reset();
                }
            }
        }
        self.schedule();
    }

    /// Advance the animation by one character.
    ///
    /// Idle ticks just re-run the scheduling pass. A tick that lands on a
    /// target which was reset mid-flight releases the lock immediately and
    /// reschedules, so an abort can never stall the queue.
    pub fn tick(&mut self) {
        let Some((index, cursor)) = self.typing else {
            self.schedule();
            return;
        };

        let target = &mut self.targets[index];
        if target.status != TargetStatus::Typing {
            self.typing = None;
            self.schedule();
            return;
        }

        match target.text[cursor..].chars().next() {
            Some(ch) => {
                target.shown.push(ch);
                let next = cursor + ch.len_utf8();
                if next >= target.text.len() {
                    target.status = TargetStatus::Done;
                    self.typing = None;
                    self.schedule();
                } else {
                    self.typing = Some((index, next));
                }
            }
            None => {
                // Empty text: nothing to append, complete on the spot
                target.status = TargetStatus::Done;
                self.typing = None;
                self.schedule();
            }
        }
    }

    /// Pick the next target to animate, honoring the lock and document
    /// order: the first non-done target starts if ready, and blocks the
    /// scan if still pending
    fn schedule(&mut self) {
        if self.typing.is_some() {
            return;
        }
        for (index, target) in self.targets.iter_mut().enumerate() {
            match target.status {
                TargetStatus::Done => continue,
                TargetStatus::Ready => {
                    target.shown.clear();
                    target.status = TargetStatus::Typing;
                    self.typing = Some((index, 0));
                    return;
                }
                // Not yet reached by the viewer's scroll position; later
                // targets must not start out of order
                TargetStatus::Pending => return,
                TargetStatus::Typing => return,
            }
        }
    }

    fn target_mut(&mut self, order: usize) -> Option<&mut RevealTarget> {
        self.targets.iter_mut().find(|t| t.order == order)
    }
}
