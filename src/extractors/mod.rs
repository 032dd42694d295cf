// src/extractors/mod.rs
pub mod date;
pub mod pdf;
pub mod region;
pub mod rows;
pub mod statement;

// Re-export key extraction types for convenience
pub use pdf::{PdfExtractExtractor, TextExtractor};
pub use statement::{ExtractedStatement, StatementExtractor};
