//! Error types for the card generator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardGenError {
    #[error("Card data file not found: {}", .0.display())]
    MissingDataFile(PathBuf),

    #[error("{file}: row {row}: invalid value {value:?} for column '{column}'")]
    InvalidField {
        file: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{file}: missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("PDF conversion failed for {file}: {reason}")]
    Browser { file: String, reason: String },

    #[error("Git remote error: {0}")]
    GitRemote(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CardGenError>;
