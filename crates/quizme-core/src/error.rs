//! Core error types for quizme-core.
//!
//! This module defines the error hierarchy using thiserror. Record-level
//! problems (`RecordError`) are never fatal on their own: the loader skips the
//! record and keeps going. Everything else is returned to the caller.

use std::path::PathBuf;
use thiserror::Error;

use crate::question::QuestionId;

/// Whole-file load failures. A single bad record never produces one of these.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Question file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The file contains invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON array of question records, found {found}")]
    NotAnArray { found: &'static str },
}

/// Why a single question record was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("Unsupported question type: {0}")]
    UnsupportedType(String),

    #[error("Missing required field for question: '{0}'")]
    MissingField(&'static str),

    #[error("Invalid value for '{field}': expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// Raised when a response cannot be interpreted at all.
///
/// This is distinct from an incorrect answer and must never be scored as one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Answer must be 'True' or 'False'.")]
    InvalidFormat { input: String },
}

/// Scheduler logic errors. These indicate misuse by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// `move_question` was called for a question never passed to `add_new_question`
    #[error("Question {0} is not tracked by the box manager")]
    UnknownQuestion(QuestionId),

    /// The manager returned an id the question bank does not hold
    #[error("Question {0} is not registered in the question bank")]
    NotInBank(QuestionId),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {}: {message}", path.display())]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// No home directory to derive the default location from
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// Failures of the request/answer loop itself.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The prompter could not read or write
    #[error("Prompter I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}
