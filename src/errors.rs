// ABOUTME: Error types for the smartpitch application
// ABOUTME: Provides structured error handling for generation and export

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitchError {
    #[error("Generation failed: {0}")]
    ServerRejected(String),

    #[error("Failed to reach generation endpoint: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File operation failed: {0}")]
    FileError(#[from] std::io::Error),

    #[error("PPTX export error: {0}")]
    PptxError(String),

    #[error("PDF export error: {0}")]
    PdfError(String),

    #[error("Nothing to export: the deck has no slides")]
    EmptyDeck,

    #[error("A generation request is already in flight")]
    RequestInFlight,

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our PitchError
impl From<anyhow::Error> for PitchError {
    fn from(err: anyhow::Error) -> Self {
        PitchError::UnknownError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for PitchError {
    fn from(err: zip::result::ZipError) -> Self {
        PitchError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PitchError>;
