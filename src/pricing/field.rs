//! Desired-price text field state
//!
//! Holds the formatted display string and applies the edit-or-reject rule:
//! an edit that fails normalization leaves the previous value in place, so
//! invalid keystrokes are silently discarded.

use crate::pricing::format::{group_digits, normalize, strip_separators};

/// Editable desired-price field. Empty display means "no input yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceField {
    display: String,
}

impl PriceField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current formatted display value.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Raw numeric string with grouping separators removed.
    pub fn raw(&self) -> String {
        strip_separators(&self.display)
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// Replaces the whole field content. Rejected edits leave the previous
    /// value untouched. Returns whether the edit was accepted.
    pub fn set(&mut self, text: &str) -> bool {
        match normalize(text) {
            Some(display) => {
                self.display = display;
                true
            }
            None => false,
        }
    }

    /// Appends one typed character, subject to the same accept/reject rule.
    pub fn push(&mut self, ch: char) -> bool {
        let mut candidate = self.display.clone();
        candidate.push(ch);
        self.set(&candidate)
    }

    /// Deletes the last entered character (grouping separators are not
    /// characters the user typed, so deletion works on the raw string).
    pub fn backspace(&mut self) {
        let mut raw = self.raw();
        raw.pop();
        self.display = if raw.is_empty() {
            String::new()
        } else {
            group_digits(&raw)
        };
    }

    pub fn clear(&mut self) {
        self.display.clear();
    }
}
