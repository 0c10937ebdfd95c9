//! Editor session: the explicit application state.
//!
//! # Responsibility
//! - Own the tree store and every per-session component.
//! - Implement the user-facing handlers (load, type, create, select, edit,
//!   submit, delete, apply-all) on top of them.
//! - Turn recoverable failures into status/alert state.
//!
//! # Invariants
//! - Validation runs before any gateway call; a rejected form issues none.
//! - Only the most recently dispatched save may update status or store.
//! - A fatal error is sticky for the lifetime of the session.

use crate::editor::change_tracker::{ChangeTracker, StructuralChange};
use crate::editor::delete_flow::{DeleteConfirmation, DeleteState};
use crate::editor::selection::SelectionController;
use crate::editor::status::{StatusMessage, MSG_APPLY_OK, MSG_COMMAND_FAILED, MSG_SAVE_OK};
use crate::error::{DeleteFailure, EditorError, FatalError, SaveFailure, SaveScope};
use crate::form::fields::{FormField, FormFields};
use crate::form::validator::{validate, FieldErrors};
use crate::gateway::{GatewayResult, SaveRequest, SyncGateway};
use crate::input::name_input::{KeyOutcome, Keystroke, NameInput};
use crate::model::attributes::{VarDef, VarDefMap};
use crate::store::tree_store::{TreeNode, TreeStore};
use log::{error, info, warn};
use uuid::Uuid;

/// Identity of one dispatched save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaveTicket(Uuid);

impl SaveTicket {
    fn issue() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Validated save waiting for its gateway round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub ticket: SaveTicket,
    pub request: SaveRequest,
}

/// How a completed save was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDisposition {
    /// Backend accepted; store reconciled and status set.
    Saved,
    /// Backend rejected; error status set.
    Failed(SaveFailure),
    /// A newer save was dispatched meanwhile; response dropped.
    Superseded,
}

#[derive(Debug, Default)]
pub struct EditorSession {
    store: TreeStore,
    name_input: NameInput,
    selection: SelectionController,
    changes: ChangeTracker,
    delete_dialog: Option<DeleteConfirmation>,
    field_errors: FieldErrors,
    status: Option<StatusMessage>,
    alert: Option<String>,
    fatal: Option<FatalError>,
    latest_save: Option<SaveTicket>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load through the gateway.
    ///
    /// A failure is unrecoverable: it is recorded as the session fatal error.
    pub fn load(&mut self, gateway: &dyn SyncGateway) -> Result<usize, FatalError> {
        match gateway.load_all() {
            Ok(entries) => Ok(self.load_entries(entries)),
            Err(err) => {
                error!("event=session_load module=editor status=error");
                let fatal = FatalError::from_load_failure(&err);
                self.fatal = Some(fatal.clone());
                Err(fatal)
            }
        }
    }

    /// Replaces the whole set and resets selection, form and dirty state.
    ///
    /// A pending delete confirmation is cancelled and in-flight saves are
    /// orphaned: their replies come back `Superseded`.
    pub fn load_entries(&mut self, entries: VarDefMap) -> usize {
        self.store.load(entries);
        self.selection.clear();
        self.changes.clear();
        self.field_errors = FieldErrors::default();
        if let Some(dialog) = self.delete_dialog.as_mut() {
            dialog.cancel();
        }
        self.latest_save = None;
        self.store.len()
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// Sorted nodes for the tree view.
    pub fn nodes(&self) -> impl Iterator<Item = TreeNode<'_>> + '_ {
        self.store.nodes()
    }

    // --- new-name field ---

    pub fn press_name_key(&mut self, key: Keystroke) -> KeyOutcome {
        self.name_input.apply(key)
    }

    pub fn name_input(&self) -> &NameInput {
        &self.name_input
    }

    pub fn create_enabled(&self) -> bool {
        self.name_input.create_enabled()
    }

    /// Creates a definition named after the new-name field.
    ///
    /// The field keeps its value afterwards.
    pub fn create_from_input(&mut self) -> Result<(), EditorError> {
        let name = self.name_input.value().to_string();
        self.create(&name)
    }

    /// Creates a definition with default attributes.
    pub fn create(&mut self, name: &str) -> Result<(), EditorError> {
        if let Err(err) = self.store.create(name) {
            warn!("event=vardef_create module=editor status=rejected reason={err}");
            return Err(err.into());
        }
        self.changes.mark(StructuralChange::Created);
        Ok(())
    }

    // --- selection and form ---

    /// Selects `name` and mirrors it into the form.
    pub fn select(&mut self, name: &str) -> Result<&FormFields, EditorError> {
        self.field_errors = FieldErrors::default();
        Ok(self.selection.select(&mut self.store, name)?)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selection.selected_name()
    }

    pub fn form(&self) -> Option<&FormFields> {
        self.selection
            .is_form_visible()
            .then(|| self.selection.form())
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.selection.set_field(field, value);
    }

    /// Inline messages from the last rejected submit.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    // --- submit ---

    /// Validates the form and issues a ticket for the save.
    ///
    /// Nothing is sent; the caller performs the round-trip and reports it
    /// with [`EditorSession::finish_save`].
    pub fn begin_save(&mut self) -> Result<PendingSave, EditorError> {
        let name = self
            .selection
            .selected_name()
            .ok_or(EditorError::NoSelection)?
            .to_string();

        match validate(self.selection.form()) {
            Ok(fields) => {
                self.field_errors = FieldErrors::default();
                let ticket = SaveTicket::issue();
                self.latest_save = Some(ticket);
                info!(
                    "event=save_dispatch module=editor status=start name={name} ticket={}",
                    ticket.id()
                );
                Ok(PendingSave {
                    ticket,
                    request: SaveRequest::new(name, fields),
                })
            }
            Err(errors) => {
                info!(
                    "event=save_dispatch module=editor status=invalid fields={}",
                    errors.len()
                );
                self.field_errors = errors.clone();
                Err(errors.into())
            }
        }
    }

    /// Reports the outcome of a dispatched save.
    pub fn finish_save(
        &mut self,
        pending: PendingSave,
        result: GatewayResult<()>,
    ) -> SaveDisposition {
        if self.latest_save != Some(pending.ticket) {
            info!(
                "event=save_reply module=editor status=superseded ticket={}",
                pending.ticket.id()
            );
            return SaveDisposition::Superseded;
        }
        self.latest_save = None;

        match result {
            Ok(()) => {
                let name = pending.request.name.clone();
                if self
                    .store
                    .update_attributes(&name, pending.request.attributes())
                    .is_err()
                {
                    warn!("event=save_reply module=editor status=orphan name={name}");
                }
                self.status = Some(StatusMessage::info(MSG_SAVE_OK));
                SaveDisposition::Saved
            }
            Err(err) => {
                let failure = SaveFailure::new(SaveScope::One(pending.request.name), err);
                warn!("event=save_reply module=editor status=error reason={failure}");
                self.status = Some(StatusMessage::error(failure.status_text()));
                SaveDisposition::Failed(failure)
            }
        }
    }

    /// Validates, saves through `gateway` and records the outcome.
    pub fn submit(&mut self, gateway: &dyn SyncGateway) -> Result<SaveDisposition, EditorError> {
        let pending = self.begin_save()?;
        let result = gateway.save_one(&pending.request);
        Ok(self.finish_save(pending, result))
    }

    // --- delete ---

    /// Opens the delete confirmation for the selected node.
    ///
    /// Without a selection the failure is surfaced as an alert.
    pub fn request_delete(&mut self) -> Result<(), DeleteFailure> {
        let target = self.selection.selected_name();
        let opened = self
            .delete_dialog
            .get_or_insert_with(DeleteConfirmation::new)
            .open(target);
        if opened.is_err() {
            self.alert = Some(MSG_COMMAND_FAILED.to_string());
        }
        opened
    }

    /// Confirms the pending delete.
    ///
    /// Failures are surfaced as an alert and returned; they never escalate.
    pub fn confirm_delete(&mut self) -> Result<VarDef, DeleteFailure> {
        let dialog = self
            .delete_dialog
            .get_or_insert_with(DeleteConfirmation::new);
        match dialog.confirm(&mut self.store, &mut self.changes) {
            Ok(removed) => {
                if self.selection.selected_name() == Some(removed.name.as_str()) {
                    self.selection.clear();
                }
                Ok(removed)
            }
            Err(failure) => {
                self.alert = Some(MSG_COMMAND_FAILED.to_string());
                Err(failure)
            }
        }
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.delete_dialog
            .as_mut()
            .map(DeleteConfirmation::cancel)
            .unwrap_or(false)
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete_dialog
            .as_ref()
            .map(|dialog| dialog.state().clone())
            .unwrap_or_default()
    }

    // --- apply-all ---

    /// Pushes the whole set and clears the dirty indicator on success.
    pub fn apply_all(&mut self, gateway: &dyn SyncGateway) -> Result<(), SaveFailure> {
        match gateway.apply_all(&self.store.to_map()) {
            Ok(()) => {
                self.changes.clear();
                self.status = Some(StatusMessage::info(MSG_APPLY_OK));
                info!(
                    "event=apply_all module=editor status=ok count={}",
                    self.store.len()
                );
                Ok(())
            }
            Err(err) => {
                let failure = SaveFailure::new(SaveScope::All, err);
                self.status = Some(StatusMessage::error(failure.status_text()));
                warn!("event=apply_all module=editor status=error reason={failure}");
                Err(failure)
            }
        }
    }

    // --- indicators ---

    pub fn is_dirty(&self) -> bool {
        self.changes.is_dirty()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns and dismisses the pending alert.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn fatal_error(&self) -> Option<&FatalError> {
        self.fatal.as_ref()
    }
}
