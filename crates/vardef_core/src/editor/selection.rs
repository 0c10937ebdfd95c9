//! Selection controller.
//!
//! # Responsibility
//! - Remember which node is being edited, by name.
//! - Mirror the selected record into the form working copy.
//!
//! # Invariants
//! - The form is visible iff a name is selected.
//! - Selecting copies the four stored attributes verbatim; edits to the form
//!   never flow back into the store on their own.

use crate::form::fields::{FormField, FormFields};
use crate::store::tree_store::{TreeStore, TreeStoreResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<String>,
    form: FormFields,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `name` in `store` and loads its attributes into the form.
    ///
    /// On `NotFound` the previous selection and form are kept.
    pub fn select(&mut self, store: &mut TreeStore, name: &str) -> TreeStoreResult<&FormFields> {
        let node = store.select(name)?;
        self.form = FormFields::from_attributes(node.attributes);
        self.selected = Some(node.name.to_string());
        Ok(&self.form)
    }

    /// Name shown above the form.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_form_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Hides the form and forgets the selection.
    pub fn clear(&mut self) {
        self.selected = None;
        self.form = FormFields::default();
    }
}
