//! Unified application error type.
//! All modules (core, export, cli, config) return AppError to keep the error
//! handling consistent. Row-level parse problems are modelled separately as
//! `ParseIssue`: they never abort a batch.

use std::io;
use thiserror::Error;

/// Non-fatal problem found while reading a single row.
///
/// The affected field is downgraded to null and processing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    #[error("could not parse time string '{0}'")]
    InvalidTime(String),

    #[error("invalid time range format: '{0}'")]
    InvalidRange(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input / parsing
    // ---------------------------
    #[error("Please provide CSV data to process")]
    EmptyInput,

    #[error("Invalid row number: {0}")]
    InvalidRow(usize),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("File name must end with .{extension}: '{name}'")]
    Validation { name: String, extension: &'static str },

    #[error("No processed data to export")]
    EmptyData,

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
