use crate::edit::outcome::{CommitOutcome, CommitResult, RevertReason};
use crate::units::{format_value, parse_input_value, Bounds};
use tracing::debug;

/// Transient text state of the value field.
///
/// While the field has focus the text echoes exactly what was typed, valid or
/// not. On blur the text is parsed and validated and either committed or
/// reverted to the last valid value. Outside of editing the text mirrors the
/// committed value.
#[derive(Debug, Clone)]
pub struct ValueEditBuffer {
    text: String,
    editing: bool,
    previous_valid: f64,
}

impl ValueEditBuffer {
    pub fn new(value: f64) -> Self {
        Self {
            text: format_value(value),
            editing: false,
            previous_valid: value,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Last value known to pass validation; the revert target
    pub fn previous_valid(&self) -> f64 {
        self.previous_valid
    }

    pub fn focus(&mut self) {
        debug!(text = %self.text, "edit started");
        self.editing = true;
    }

    /// Replace the edit text verbatim. Ignored unless editing.
    pub fn input(&mut self, text: &str) {
        if !self.editing {
            debug!(text, "input ignored outside of editing");
            return;
        }
        self.text.clear();
        self.text.push_str(text);
    }

    /// Finish editing and decide what to commit.
    ///
    /// Below-minimum values snap up to the minimum; values above a finite
    /// maximum are discarded in favour of the previous valid value. The two
    /// directions are intentionally not symmetric.
    pub fn blur(&mut self, bounds: Bounds) -> CommitResult {
        self.editing = false;

        let result = match parse_input_value(&self.text) {
            None => self.revert(bounds, RevertReason::UnparsableText),
            Some(parsed) if parsed < bounds.min => CommitResult {
                value: bounds.min,
                outcome: CommitOutcome::Clamped,
            },
            Some(parsed) if bounds.is_bounded_above() && parsed > bounds.max => {
                self.revert(bounds, RevertReason::OutOfRangeOnCommit)
            }
            Some(parsed) => CommitResult {
                value: parsed,
                outcome: CommitOutcome::Accepted,
            },
        };

        debug!(
            text = %self.text,
            value = result.value,
            outcome = ?result.outcome,
            "edit finished"
        );

        self.sync(result.value);
        result
    }

    /// Mirror a value committed elsewhere (unit switch, host).
    /// Deferred while editing so in-flight keystrokes survive.
    pub fn on_external_value_change(&mut self, value: f64) {
        if self.editing {
            debug!(value, "external change deferred while editing");
            return;
        }
        self.sync(value);
    }

    /// Mirror a stepper click. Unlike external changes this applies while
    /// editing too: the click replaces the typed text and the revert target.
    pub fn on_step(&mut self, value: f64) {
        self.sync(value);
    }

    fn revert(&self, bounds: Bounds, reason: RevertReason) -> CommitResult {
        // The unit may have changed while editing; never revert out of range
        CommitResult {
            value: bounds.clamp(self.previous_valid),
            outcome: CommitOutcome::Reverted(reason),
        }
    }

    fn sync(&mut self, value: f64) {
        self.previous_valid = value;
        self.text = format_value(value);
    }
}

impl Default for ValueEditBuffer {
    fn default() -> Self {
        Self::new(0.0)
    }
}
