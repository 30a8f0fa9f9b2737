use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Only startup and data-integrity failures surface as `AppError` from a run;
/// per-applicant problems are logged and the applicant is passed through.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing file: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Applicants table must contain columns {required:?}; missing {missing:?}")]
    MissingColumns {
        required: Vec<&'static str>,
        missing: Vec<&'static str>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        AppError::MissingFile { path: path.into() }
    }

    /// True for the per-applicant recoverable condition of a text file not being on disk.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, AppError::MissingFile { .. })
    }
}
