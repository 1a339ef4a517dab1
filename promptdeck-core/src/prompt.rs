//! Prompt input: a controlled text field plus a send button.
//!
//! The text itself lives in the page; this component only owns the busy
//! flag. Busy is purely cosmetic and is cleared by a scheduled reset, not by
//! any completion signal from the submission sink.

use std::time::Duration;

/// Delay before the busy flag clears after a submit
pub const DEFAULT_BUSY_RESET: Duration = Duration::from_millis(300);

/// Placeholder shown while the field is empty
pub const PLACEHOLDER: &str = "Schreibe deinen KI-Prompt hier…";

/// Hint shown below the field
pub const SUBMIT_HINT: &str = "Tipp: ⌘/Ctrl + Enter zum Senden";

/// Send button label
pub const SUBMIT_LABEL: &str = "Absenden";

/// How a submit was triggered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The send button (guarded by [`PromptInput::can_submit`])
    Button,
    /// Ctrl/Cmd + Enter inside the field (no emptiness guard)
    Chord,
}

/// A pending busy reset, tagged with the submit it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusyReset {
    pub generation: u64,
    pub after: Duration,
}

/// Reported to the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptEvent {
    /// Full field content after an edit
    Changed(String),
    /// Untrimmed value to hand to the sink, plus the reset to schedule
    Submitted { value: String, reset: BusyReset },
}

#[derive(Debug, Clone)]
pub struct PromptInput {
    busy: bool,
    generation: u64,
    reset_after: Duration,
}

impl PromptInput {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            busy: false,
            generation: 0,
            reset_after,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    /// Generation of the most recent submit (0 before the first one)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every raw edit reports the whole content, unchanged
    pub fn edit(&self, content: impl Into<String>) -> PromptEvent {
        PromptEvent::Changed(content.into())
    }

    /// Whether the send button is enabled for `value`
    pub fn can_submit(&self, value: &str) -> bool {
        !self.busy && !is_blank(value)
    }

    /// Run the submit sequence. Returns `None` only for a disabled button.
    pub fn submit(&mut self, trigger: SubmitTrigger, value: &str) -> Option<PromptEvent> {
        if trigger == SubmitTrigger::Button && !self.can_submit(value) {
            return None;
        }

        self.busy = true;
        self.generation += 1;
        tracing::debug!(?trigger, generation = self.generation, "prompt submitted");

        Some(PromptEvent::Submitted {
            value: value.to_string(),
            reset: BusyReset {
                generation: self.generation,
                after: self.reset_after,
            },
        })
    }

    /// Apply a fired reset. Resets from superseded submits are ignored;
    /// returns whether the flag was cleared.
    pub fn busy_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "ignoring stale busy reset"
            );
            return false;
        }
        self.busy = false;
        tracing::debug!(generation, "busy reset");
        true
    }
}

/// Blank after trimming whitespace and byte order marks
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

impl Default for PromptInput {
    fn default() -> Self {
        Self::new(DEFAULT_BUSY_RESET)
    }
}
