//! Error types for report rendering.

use thiserror::Error;

/// Result type alias for rendering operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Failures while turning `ReportData` into a document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// The generated Typst source did not compile
    #[error("Typst compilation failed: {0}")]
    Compile(String),

    /// The compiled document could not be exported to PDF
    #[error("PDF rendering failed: {0}")]
    Render(String),
}
