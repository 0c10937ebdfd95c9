//! Keystroke-level input gates.

pub mod name_input;
