//! Structural change indicator.
//!
//! # Invariants
//! - Starts clean.
//! - Only successful creates and deletes mark it dirty; field saves do not.
//! - Cleared by a successful apply-all or a fresh load.

use log::info;

/// Structural mutation that made the set dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralChange {
    Created,
    Deleted,
}

impl StructuralChange {
    fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    pending_changes: usize,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dirty indicator is visible.
    pub fn is_dirty(&self) -> bool {
        self.pending_changes > 0
    }

    /// Structural changes recorded since the last clear.
    pub fn pending_changes(&self) -> usize {
        self.pending_changes
    }

    pub fn mark(&mut self, change: StructuralChange) {
        self.pending_changes += 1;
        info!(
            "event=config_changed module=editor change={} pending={}",
            change.as_str(),
            self.pending_changes
        );
    }

    pub fn clear(&mut self) {
        self.pending_changes = 0;
    }
}
