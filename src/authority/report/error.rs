use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Error type covering the failures that can occur while fetching license
/// records, transforming them, or exporting the resulting report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Wrapper for IO failures such as reading the terminal or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the license payload cannot be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Transport level failures of the license service request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Raised when a successful response does not carry a list of records.
    #[error("unexpected license payload: {0}")]
    UnexpectedPayload(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
