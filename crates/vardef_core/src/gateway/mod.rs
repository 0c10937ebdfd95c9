//! Backend synchronization boundary.
//!
//! # Responsibility
//! - Define the load-all / save-one / apply-all contract used by the editor.
//! - Keep transport details (HTTP, wire encoding) behind one trait.
//!
//! # Invariants
//! - Implementations never retry; one call is one backend round-trip.
//! - Rejections carry the server-provided detail text unchanged.

pub mod http;
pub mod memory;
pub mod wire;

use crate::form::fields::FormField;
use crate::form::validator::ValidatedFields;
use crate::model::attributes::{VarAttributes, VarDefMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors from backend round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Connection, timeout or I/O failure before a response was read.
    Transport(String),
    /// Backend answered with a non-2xx status.
    Rejected {
        status: u16,
        /// `additInfos` from the error body, when present.
        detail: Option<String>,
    },
    /// Response body does not match the expected shape.
    InvalidPayload(String),
    /// Gateway configuration is unusable.
    InvalidConfig(String),
}

impl GatewayError {
    /// Text shown to the operator: the server detail when available.
    pub fn detail_text(&self) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Rejected {
                status,
                detail: None,
            } => format!("HTTP {status}"),
            Self::Transport(message)
            | Self::InvalidPayload(message)
            | Self::InvalidConfig(message) => message.clone(),
        }
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "gateway transport failure: {message}"),
            Self::Rejected { status, detail } => match detail {
                Some(detail) => write!(f, "gateway rejected request ({status}): {detail}"),
                None => write!(f, "gateway rejected request ({status})"),
            },
            Self::InvalidPayload(message) => write!(f, "invalid gateway payload: {message}"),
            Self::InvalidConfig(message) => write!(f, "invalid gateway config: {message}"),
        }
    }
}

impl Error for GatewayError {}

/// Save-one request: the selected name plus the validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub name: String,
    pub fields: ValidatedFields,
}

impl SaveRequest {
    /// Form parameter name carrying the variable name.
    pub const NAME_KEY: &'static str = "var_name";

    pub fn new(name: impl Into<String>, fields: ValidatedFields) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Form-encoded pairs, in submission order.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (Self::NAME_KEY, self.name.clone()),
            (FormField::VarType.wire_key(), self.fields.var_type.clone()),
            (FormField::Unit.wire_key(), self.fields.unit.clone()),
            (
                FormField::Threshold.wire_key(),
                self.fields.threshold.to_string(),
            ),
            (FormField::Ttl.wire_key(), self.fields.ttl.to_string()),
        ]
    }

    pub fn attributes(&self) -> VarAttributes {
        self.fields.clone().into_attributes()
    }
}

/// Backend holding the persisted definition set.
pub trait SyncGateway {
    /// Fetches every definition.
    fn load_all(&self) -> GatewayResult<VarDefMap>;
    /// Persists one edited definition.
    fn save_one(&self, request: &SaveRequest) -> GatewayResult<()>;
    /// Replaces the whole backend definition set.
    fn apply_all(&self, definitions: &VarDefMap) -> GatewayResult<()>;
}
