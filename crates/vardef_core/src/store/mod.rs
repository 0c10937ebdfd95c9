//! In-memory ownership of the variable definition set.
//!
//! # Responsibility
//! - Hold every definition keyed by unique name, in sorted order.
//! - Expose create/delete/select/replace-all mutations for editor handlers.
//!
//! # Invariants
//! - The store is the only owner of attribute records; other components
//!   refer to records by name.

pub mod tree_store;
