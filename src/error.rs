use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while maintaining the changelog note
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to scan vault: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("Failed to serialize settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("UI interaction error: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Invalid timestamp format: {0}")]
    InvalidFormat(String),

    #[error("Invalid maximum file count: {0}")]
    InvalidCount(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Scan(err) => format!("Failed to scan vault: {err}"),
            Self::Json(err) => format!("Failed to read or write settings: {err}"),
            Self::Watch(err) => format!("File watcher failed: {err}"),
            Self::Dialog(err) => format!("UI interaction error: {err}"),
            Self::NotAFile(path) => format!(
                "Cannot write changelog: {} exists but is not a regular file",
                path.display()
            ),
            Self::InvalidFormat(pattern) => {
                format!("Timestamp format {pattern:?} cannot format a timestamp")
            }
            Self::InvalidCount(raw) => {
                format!("Maximum file count must be a whole number of at least 1, got {raw:?}")
            }
            Self::UnknownSetting(key) => format!("No setting named {key:?}"),
            Self::InvalidValue { key, value } => format!("Invalid value for {key}: {value:?}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Type alias for Result with ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;
