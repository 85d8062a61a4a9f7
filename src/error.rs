//! Error types for exam-snip

use thiserror::Error;

/// Result type alias for exam-snip
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for exam-snip
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Image encoding or cropping error
    #[error("Render error: {reason}")]
    Render { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
