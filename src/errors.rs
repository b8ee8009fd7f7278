//! Unified application error type.
//! All modules (config, core, prompt, cli) return AppError to keep the error
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

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Data file errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    #[error("Invalid timestamp '{value}' at row {row}")]
    InvalidTimestamp { value: String, row: usize },

    #[error("Invalid value '{value}' for column '{column}' at row {row}")]
    InvalidField {
        column: String,
        value: String,
        row: usize,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
