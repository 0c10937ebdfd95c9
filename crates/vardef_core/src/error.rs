//! Editor error taxonomy.
//!
//! # Responsibility
//! - Classify every failure an editor handler can surface.
//! - Map layer errors into the operator-facing categories.
//!
//! # Invariants
//! - Validation errors never reach the gateway.
//! - Delete and save failures are recoverable and leave the store unchanged.
//! - Only load failures and broken invariants escalate to `FatalError`.

use crate::editor::status::{MSG_APPLY_ERR, MSG_SAVE_ERR};
use crate::form::validator::FieldErrors;
use crate::gateway::wire::first_line;
use crate::gateway::GatewayError;
use crate::store::tree_store::TreeStoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a confirmed delete could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFailure {
    /// Delete requested while no node is selected.
    NoSelection,
    /// Confirm or cancel received while no confirmation is pending.
    NotPending,
    /// Target name is no longer in the store.
    NotFound(String),
}

impl Display for DeleteFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no variable selected"),
            Self::NotPending => write!(f, "no delete confirmation pending"),
            Self::NotFound(name) => write!(f, "variable not found: {name}"),
        }
    }
}

impl Error for DeleteFailure {}

impl From<TreeStoreError> for DeleteFailure {
    fn from(value: TreeStoreError) -> Self {
        match value {
            TreeStoreError::NotFound(name)
            | TreeStoreError::InvalidName(name)
            | TreeStoreError::DuplicateName(name) => Self::NotFound(name),
        }
    }
}

/// What a failed push was trying to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveScope {
    /// Save-one for the named definition.
    One(String),
    /// Apply-all of the whole set.
    All,
}

/// Failed save or apply round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFailure {
    pub scope: SaveScope,
    pub source: GatewayError,
}

impl SaveFailure {
    pub fn new(scope: SaveScope, source: GatewayError) -> Self {
        Self { scope, source }
    }

    /// Status banner text: prefix plus the first line of the server detail.
    pub fn status_text(&self) -> String {
        let prefix = match self.scope {
            SaveScope::One(_) => MSG_SAVE_ERR,
            SaveScope::All => MSG_APPLY_ERR,
        };
        let detail = self.source.detail_text();
        format!("{prefix} ({})", first_line(&detail))
    }
}

impl Display for SaveFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.scope {
            SaveScope::One(name) => write!(f, "save of `{name}` failed: {}", self.source),
            SaveScope::All => write!(f, "apply-all failed: {}", self.source),
        }
    }
}

impl Error for SaveFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Unrecoverable condition for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalError {
    pub message: String,
    /// Extra lines rendered one per paragraph under the banner.
    pub addit_infos: Option<Vec<String>>,
}

impl FatalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            addit_infos: None,
        }
    }

    pub fn with_details(message: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            message: message.into(),
            addit_infos: Some(lines),
        }
    }

    /// Detail lines; empty when none were provided.
    pub fn detail_lines(&self) -> &[String] {
        self.addit_infos.as_deref().unwrap_or_default()
    }

    /// Builds the fatal banner for a failed initial load.
    pub fn from_load_failure(err: &GatewayError) -> Self {
        let lines = err
            .detail_text()
            .lines()
            .map(str::to_string)
            .collect::<Vec<_>>();
        Self::with_details("Unable to load variable definitions", lines)
    }
}

impl Display for FatalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for line in self.detail_lines() {
            write!(f, "; {line}")?;
        }
        Ok(())
    }
}

impl Error for FatalError {}

/// Umbrella error returned by editor session handlers.
#[derive(Debug)]
pub enum EditorError {
    /// Action needs a selected node.
    NoSelection,
    /// Form rejected before dispatch.
    Validation(FieldErrors),
    /// Tree store refused a mutation.
    Store(TreeStoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no variable selected"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoSelection => None,
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<FieldErrors> for EditorError {
    fn from(value: FieldErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<TreeStoreError> for EditorError {
    fn from(value: TreeStoreError) -> Self {
        Self::Store(value)
    }
}
