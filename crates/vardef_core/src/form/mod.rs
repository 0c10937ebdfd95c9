//! Edit form working copy and submit-time validation.
//!
//! # Responsibility
//! - Hold the mutable working copy of the selected definition.
//! - Validate the working copy before any network dispatch.
//!
//! # Invariants
//! - Typing into the form never mutates the tree store.
//! - Validation is side-effect free.

pub mod fields;
pub mod validator;
