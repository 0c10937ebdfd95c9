//! Editor state machine components.
//!
//! # Responsibility
//! - Track selection, structural changes and delete confirmation.
//! - Thread all of it through one explicit session object.
//!
//! # Invariants
//! - No module-level mutable state; every handler receives the session.

pub mod change_tracker;
pub mod delete_flow;
pub mod selection;
pub mod session;
pub mod status;
