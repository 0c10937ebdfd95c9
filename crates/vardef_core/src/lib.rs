//! Core of the variable definition editor.
//! This crate is the single source of truth for editor state and invariants.

pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod gateway;
pub mod input;
pub mod logging;
pub mod model;
pub mod store;

pub use config::{EditorConfig, GatewayConfig};
pub use editor::change_tracker::{ChangeTracker, StructuralChange};
pub use editor::delete_flow::{confirm_delete, DeleteConfirmation, DeleteState};
pub use editor::selection::SelectionController;
pub use editor::session::{EditorSession, PendingSave, SaveDisposition, SaveTicket};
pub use editor::status::{StatusLevel, StatusMessage};
pub use error::{DeleteFailure, EditorError, FatalError, SaveFailure, SaveScope};
pub use form::fields::{FormField, FormFields};
pub use form::validator::{validate, FieldErrors, FieldRule, ValidatedFields};
pub use gateway::http::HttpSyncGateway;
pub use gateway::memory::{CallCounts, MemoryGateway};
pub use gateway::{GatewayError, GatewayResult, SaveRequest, SyncGateway};
pub use input::name_input::{accepts_name_char, KeyOutcome, Keystroke, NameInput};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::attributes::{is_valid_var_name, VarAttributes, VarDef, VarDefMap, DEFAULT_TTL_SECS};
pub use store::tree_store::{TreeNode, TreeStore, TreeStoreError, TreeStoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
