//! Delete confirmation flow.
//!
//! # Responsibility
//! - Gate destructive deletes behind an explicit confirm step.
//! - Expose the delete itself as a render-independent operation.
//!
//! # Invariants
//! - States: `Idle` and `ConfirmPending`; every cycle starts and ends `Idle`.
//! - Confirm deletes only the target captured when the dialog opened.
//! - Cancel never mutates the store.

use crate::editor::change_tracker::{ChangeTracker, StructuralChange};
use crate::error::DeleteFailure;
use crate::model::attributes::VarDef;
use crate::store::tree_store::TreeStore;
use log::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    ConfirmPending {
        target: String,
    },
}

/// Confirmation dialog state machine.
///
/// The session keeps one instance once built; its state resets each cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    state: DeleteState,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DeleteState::ConfirmPending { .. })
    }

    /// `Idle -> ConfirmPending` for `target`.
    ///
    /// Re-opening while pending retargets the dialog.
    pub fn open(&mut self, target: Option<&str>) -> Result<(), DeleteFailure> {
        let target = target.ok_or(DeleteFailure::NoSelection)?;
        self.state = DeleteState::ConfirmPending {
            target: target.to_string(),
        };
        Ok(())
    }

    /// `ConfirmPending -> Idle`, deleting the captured target.
    pub fn confirm(
        &mut self,
        store: &mut TreeStore,
        tracker: &mut ChangeTracker,
    ) -> Result<VarDef, DeleteFailure> {
        match std::mem::take(&mut self.state) {
            DeleteState::Idle => Err(DeleteFailure::NotPending),
            DeleteState::ConfirmPending { target } => confirm_delete(store, tracker, &target),
        }
    }

    /// `ConfirmPending -> Idle` without mutation. Returns whether a
    /// confirmation was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = DeleteState::Idle;
        was_pending
    }
}

/// Deletes `name` and marks the change tracker on success.
///
/// A missing name is reported as `DeleteFailure::NotFound`; store and
/// tracker are left untouched.
pub fn confirm_delete(
    store: &mut TreeStore,
    tracker: &mut ChangeTracker,
    name: &str,
) -> Result<VarDef, DeleteFailure> {
    match store.delete(name) {
        Ok(removed) => {
            tracker.mark(StructuralChange::Deleted);
            Ok(removed)
        }
        Err(err) => {
            warn!("event=delete_confirm module=editor status=error name={name}");
            Err(err.into())
        }
    }
}
