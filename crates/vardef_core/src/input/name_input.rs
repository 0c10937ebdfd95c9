//! "New variable name" input gate.
//!
//! # Responsibility
//! - Filter keystrokes typed into the new-name field.
//! - Derive whether the create action is enabled.
//!
//! # Invariants
//! - Navigation (left/right) and editing (backspace/delete) keys always pass.
//! - Any other character passes only if it is in `[A-Za-z0-9_.]`; a rejected
//!   keystroke leaves value and cursor untouched.
//! - Create is enabled iff the value is non-empty, re-evaluated after every
//!   accepted keystroke.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.]$").expect("valid name char regex"));

/// One key event delivered to the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    ArrowLeft,
    ArrowRight,
    Backspace,
    Delete,
    Char(char),
}

/// Effect of one keystroke on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Cursor moved; value unchanged.
    Moved,
    /// Value edited (possibly a no-op backspace at position 0).
    Edited,
    /// Keystroke swallowed.
    Rejected,
}

impl KeyOutcome {
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Returns whether `ch` may appear in a variable name.
pub fn accepts_name_char(ch: char) -> bool {
    let mut buf = [0u8; 4];
    NAME_CHAR_RE.is_match(ch.encode_utf8(&mut buf))
}

/// Value and cursor of the new-name field.
///
/// `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    value: String,
    cursor: usize,
    create_enabled: bool,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn create_enabled(&self) -> bool {
        self.create_enabled
    }

    /// Applies one keystroke at the current cursor position.
    pub fn apply(&mut self, key: Keystroke) -> KeyOutcome {
        let outcome = match key {
            Keystroke::ArrowLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                return KeyOutcome::Moved;
            }
            Keystroke::ArrowRight => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                return KeyOutcome::Moved;
            }
            Keystroke::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_at(self.cursor);
                }
                KeyOutcome::Edited
            }
            Keystroke::Delete => {
                if self.cursor < self.char_len() {
                    self.remove_at(self.cursor);
                }
                KeyOutcome::Edited
            }
            Keystroke::Char(ch) if accepts_name_char(ch) => {
                let offset = self.byte_offset(self.cursor);
                self.value.insert(offset, ch);
                self.cursor += 1;
                KeyOutcome::Edited
            }
            Keystroke::Char(_) => return KeyOutcome::Rejected,
        };

        self.create_enabled = !self.value.is_empty();
        outcome
    }

    /// Types every character of `text` in order, returning how many passed.
    pub fn type_str(&mut self, text: &str) -> usize {
        text.chars()
            .map(|ch| self.apply(Keystroke::Char(ch)))
            .filter(|outcome| outcome.is_accepted())
            .count()
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }

    fn remove_at(&mut self, char_index: usize) {
        let offset = self.byte_offset(char_index);
        if offset < self.value.len() {
            self.value.remove(offset);
        }
    }
}
