use crate::model::EntryId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("{0}")]
    Validation(String),

    #[error("No entry was found with id {0}")]
    NotFound(EntryId),

    #[error("Journal file {} is corrupt: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl JournalError {
    pub fn validation(msg: impl Into<String>) -> Self {
        JournalError::Validation(msg.into())
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        JournalError::CorruptData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JournalError>;
