//! Unified application error type.
//! All modules (store, core, cli, db) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Audit log database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Dataset load
    // ---------------------------
    #[error("Dataset source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed dataset: {0}")]
    Parse(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("No record found for {field} '{value}'")]
    NotFound { field: String, value: String },

    #[error("{count} records match {field} '{value}'; refine the selection")]
    Ambiguous {
        field: String,
        value: String,
        count: usize,
    },

    // ---------------------------
    // Gate / workflow
    // ---------------------------
    #[error("Access denied: invalid key")]
    AccessDenied,

    #[error("Invalid key '{0}': expected a 4-digit number between 1000 and 9999")]
    InvalidCredential(String),

    #[error("Invalid secret key, changes not saved")]
    CredentialRejected,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Record is locked: begin an edit first")]
    NotEditing,

    #[error("No record selected")]
    NoSelection,

    // ---------------------------
    // Remote sync
    // ---------------------------
    #[error("Sync failed: {0}")]
    Sync(#[from] crate::core::sync::SyncError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors after which an interactive session can keep going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AppError::SourceUnavailable(_) | AppError::Parse(_) | AppError::AccessDenied
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
