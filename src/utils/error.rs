// src/utils/error.rs
use thiserror::Error;
use crate::tables::TableId;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500, 403

    #[error("Statement not found: {0}")]
    NotFound(String),

    #[error("Invalid URL template: {0}")]
    InvalidTemplate(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not load PDF: {0}")]
    PdfLoad(String),

    #[error("{table}: anchor {anchor:?} not found in document text")]
    AnchorNotFound { table: TableId, anchor: &'static str },

    #[error("{table}: end anchor at {end} precedes start anchor at {start}")]
    AnchorsOutOfOrder { table: TableId, start: usize, end: usize },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Statement download failed: {0}")]
    Source(#[from] SourceError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
