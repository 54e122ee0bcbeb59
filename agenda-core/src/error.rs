//! Error types for the agenda ecosystem.

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Unknown repeat rule '{0}'")]
    UnknownRepeat(String),

    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("Repeat end date must be on or after the start date")]
    RepeatEndsBeforeStart,

    #[error("The repeat rule produced no occurrences")]
    EmptyExpansion,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
