//! Unified application error type.
//! All modules (core, api, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::pipeline::SubmissionReport;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid delimiter '{0}': a single ASCII character is required")]
    InvalidDelimiter(String),

    #[error("Spreadsheet error: {0}")]
    Sheet(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCell(String),

    #[error("No input given: pass a CSV file or pipe one on stdin")]
    MissingInput,

    // ---------------------------
    // Worklog gate
    // ---------------------------
    #[error("Missing data for: \n{}", .0.join("\n"))]
    MissingInfo(Vec<String>),

    #[error("Canceled")]
    Cancelled,

    #[error("{0}")]
    Submission(SubmissionReport),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded with HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Entry '{0}' cannot be submitted: {1}")]
    Unsubmittable(String, &'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
