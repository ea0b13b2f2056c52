//! Error types for the tpdf library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tpdf library
///
/// Every variant is fatal for a viewing session. Recoverable navigation
/// failures live in [`crate::pager::NavError`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external converter could not be found on this system
    #[error("{tool} not found. {hint}")]
    ExtractorUnavailable {
        /// Name of the missing program
        tool: String,
        /// Platform specific install instructions
        hint: String,
    },

    /// Source PDF does not exist
    #[error("PDF file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The converter ran but did not produce text
    #[error("failed to convert PDF with {tool}: {reason}")]
    ExtractionFailed {
        /// Program that was run
        tool: String,
        /// Exit status and stderr, or the spawn error
        reason: String,
    },

    /// Extracted text file could not be read
    #[error("failed to read converted text {}: {source}", path.display())]
    UnreadableText {
        /// Path of the extracted text file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extracted text is empty; holds the text file path when known
    #[error("no content found in PDF")]
    NoContent(PathBuf),

    /// Something already occupies the temporary text path
    #[error(
        "temporary file {} already exists; remove it or pick another with --temp-file",
        .0.display()
    )]
    TempFileExists(PathBuf),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
