//! Variable definition tree store.
//!
//! # Responsibility
//! - Own every definition, keyed by unique name.
//! - Track the single selected node.
//! - Render-independent: presentation layers iterate `nodes()`.
//!
//! # Invariants
//! - Names are unique and iteration is ascending lexicographic by name.
//! - At most one node is selected, and a selected name always exists.
//! - `load` replaces the whole collection and clears selection.
//! - `create` rejects duplicates; it never overwrites an existing record.

use crate::model::attributes::{is_valid_var_name, VarAttributes, VarDef, VarDefMap};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by tree store mutations.
pub type TreeStoreResult<T> = Result<T, TreeStoreError>;

/// Errors from tree store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeStoreError {
    /// Name is empty or contains characters outside `[A-Za-z0-9_.]`.
    InvalidName(String),
    /// A definition with this name already exists.
    DuplicateName(String),
    /// No definition with this name exists.
    NotFound(String),
}

impl Display for TreeStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "invalid variable name: `{name}`"),
            Self::DuplicateName(name) => write!(f, "variable already defined: {name}"),
            Self::NotFound(name) => write!(f, "variable not found: {name}"),
        }
    }
}

impl Error for TreeStoreError {}

/// Read-only view of one stored node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode<'a> {
    pub name: &'a str,
    pub attributes: &'a VarAttributes,
    pub selected: bool,
}

/// Sorted, uniquely keyed collection of variable definitions.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    records: BTreeMap<String, VarAttributes>,
    selected: Option<String>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire collection and clears selection.
    ///
    /// Names are taken as provided by the backend; names outside the
    /// allowed class are kept but reported.
    pub fn load(&mut self, entries: VarDefMap) {
        for name in entries.keys().filter(|name| !is_valid_var_name(name)) {
            warn!("event=store_load module=store status=warn reason=invalid_name name={name:?}");
        }
        self.records = entries;
        self.selected = None;
        info!(
            "event=store_load module=store status=ok count={}",
            self.records.len()
        );
    }

    /// Inserts a new definition with default attributes.
    ///
    /// # Errors
    /// - `InvalidName` when `name` is empty or not in `[A-Za-z0-9_.]+`.
    /// - `DuplicateName` when `name` already exists; the store is unchanged.
    pub fn create(&mut self, name: &str) -> TreeStoreResult<TreeNode<'_>> {
        if !is_valid_var_name(name) {
            return Err(TreeStoreError::InvalidName(name.to_string()));
        }
        if self.records.contains_key(name) {
            return Err(TreeStoreError::DuplicateName(name.to_string()));
        }

        self.records.insert(name.to_string(), VarAttributes::default());
        info!("event=store_create module=store status=ok name={name}");
        self.node(name)
    }

    /// Removes one definition.
    ///
    /// Missing names are reported as `NotFound` and leave the store as is.
    /// Deleting the selected node clears selection.
    pub fn delete(&mut self, name: &str) -> TreeStoreResult<VarDef> {
        let attributes = self
            .records
            .remove(name)
            .ok_or_else(|| TreeStoreError::NotFound(name.to_string()))?;
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        info!("event=store_delete module=store status=ok name={name}");
        Ok(VarDef::with_attributes(name, attributes))
    }

    /// Marks `name` as the selected node and returns it.
    pub fn select(&mut self, name: &str) -> TreeStoreResult<TreeNode<'_>> {
        if !self.records.contains_key(name) {
            return Err(TreeStoreError::NotFound(name.to_string()));
        }
        self.selected = Some(name.to_string());
        self.node(name)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replaces the attributes of an existing definition.
    pub fn update_attributes(
        &mut self,
        name: &str,
        attributes: VarAttributes,
    ) -> TreeStoreResult<()> {
        let slot = self
            .records
            .get_mut(name)
            .ok_or_else(|| TreeStoreError::NotFound(name.to_string()))?;
        *slot = attributes;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<TreeNode<'_>> {
        self.records
            .get_key_value(name)
            .map(|(name, attributes)| self.view(name, attributes))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Iterates nodes in ascending name order.
    pub fn nodes(&self) -> impl Iterator<Item = TreeNode<'_>> + '_ {
        self.records
            .iter()
            .map(|(name, attributes)| self.view(name, attributes))
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of the whole collection in wire shape.
    pub fn to_map(&self) -> VarDefMap {
        self.records.clone()
    }

    fn node(&self, name: &str) -> TreeStoreResult<TreeNode<'_>> {
        self.get(name).ok_or_else(|| TreeStoreError::NotFound(name.to_string()))
    }

    fn view<'a>(&'a self, name: &'a str, attributes: &'a VarAttributes) -> TreeNode<'a> {
        TreeNode {
            name,
            attributes,
            selected: self.selected.as_deref() == Some(name),
        }
    }
}
