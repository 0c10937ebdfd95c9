//! Variable definition model.
//!
//! # Responsibility
//! - Define the typed attributes carried by one variable definition.
//! - Own the sparse wire shape used by the backend.
//!
//! # Invariants
//! - `name` matches `[A-Za-z0-9_.]+` and is never changed after creation.
//! - Absent wire attributes decode to `""`, `0` and `DEFAULT_TTL_SECS`.
//! - `var_type` and `ttl` are always serialized; empty `unit` and zero
//!   `threshold` are omitted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Time-to-live given to freshly created definitions, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 7200;

static VAR_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.]+$").expect("valid var name regex"));

/// Name-keyed attribute mapping, as exchanged with the backend.
///
/// `BTreeMap` keeps iteration sorted by name.
pub type VarDefMap = BTreeMap<String, VarAttributes>;

/// Returns whether `name` is a legal variable name.
pub fn is_valid_var_name(name: &str) -> bool {
    VAR_NAME_RE.is_match(name)
}

/// Typed attribute payload of one variable definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarAttributes {
    /// Kind of the monitored value. May stay empty until set by the operator.
    #[serde(default)]
    pub var_type: String,
    /// Free-form unit label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,
    /// Minimal change triggering a new value notification.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub threshold: u64,
    /// Seconds after which a value is considered stale.
    #[serde(default = "default_ttl")]
    pub ttl: u64,
}

impl Default for VarAttributes {
    fn default() -> Self {
        Self {
            var_type: String::new(),
            unit: String::new(),
            threshold: 0,
            ttl: DEFAULT_TTL_SECS,
        }
    }
}

/// One variable definition: its unique name plus attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDef {
    /// Unique identifier, also the display label in the tree.
    pub name: String,
    pub attributes: VarAttributes,
}

impl VarDef {
    /// Creates a definition with default attribute values.
    ///
    /// Does not validate `name`; the store does that on insertion.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_attributes(name, VarAttributes::default())
    }

    pub fn with_attributes(name: impl Into<String>, attributes: VarAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

fn default_ttl() -> u64 {
    DEFAULT_TTL_SECS
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::{is_valid_var_name, VarAttributes, DEFAULT_TTL_SECS};

    #[test]
    fn default_attributes_match_create_defaults() {
        let attrs = VarAttributes::default();
        assert_eq!(attrs.var_type, "");
        assert_eq!(attrs.unit, "");
        assert_eq!(attrs.threshold, 0);
        assert_eq!(attrs.ttl, DEFAULT_TTL_SECS);
    }

    #[test]
    fn var_name_accepts_dotted_identifiers() {
        assert!(is_valid_var_name("temp.kitchen"));
        assert!(is_valid_var_name("_x.1"));
        assert!(!is_valid_var_name(""));
        assert!(!is_valid_var_name("temp kitchen"));
        assert!(!is_valid_var_name("temp!"));
    }
}
