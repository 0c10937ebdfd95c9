//! Status banner model and fixed message table.

/// Save-one succeeded.
pub const MSG_SAVE_OK: &str = "Save successful";
/// Prefix of the save-one failure banner.
pub const MSG_SAVE_ERR: &str = "Save failure";
/// Apply-all succeeded.
pub const MSG_APPLY_OK: &str = "Configuration applied";
/// Prefix of the apply-all failure banner.
pub const MSG_APPLY_ERR: &str = "Apply failure";
/// Alert shown when a confirmed delete did not happen.
pub const MSG_COMMAND_FAILED: &str = "Command failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One-line status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}
