use crate::models::EntryOutcome;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a pasted configuration is rejected before it reaches the store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigInputError {
    #[error("configuration is empty")]
    Empty,

    #[error("configuration is shorter than {min} characters")]
    TooShort { min: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to save configuration to {path:?}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Entry {
        outcome: EntryOutcome,
        message: String,
    },

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Entry {
                outcome: EntryOutcome::Invalid,
                ..
            }
            | AppError::UnknownRegion(_) => 2,
            AppError::Settings(_) => 3,
            AppError::Entry { .. } | AppError::SaveFailed { .. } => 4,
            AppError::Io(_) => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::SaveFailed { .. } => "Failed to save configuration".to_string(),
            AppError::Entry { message, .. } => message.clone(),
            AppError::UnknownRegion(name) => format!("Region '{}' is not available", name),
            _ => self.to_string(),
        }
    }
}
