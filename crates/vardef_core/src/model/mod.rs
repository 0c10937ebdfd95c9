//! Domain model for variable definitions.
//!
//! # Responsibility
//! - Define the canonical attribute payload shared by store, form and gateway.
//! - Keep one wire shape for the load-all and apply-all endpoints.
//!
//! # Invariants
//! - Every definition is identified by its unique, immutable name.
//! - There is no rename: a name change is a delete plus a create.

pub mod attributes;
