//! Error types for the docfmt library.

use std::io;
use thiserror::Error;

/// Result type alias for docfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during formatting and layout.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Page geometry that cannot produce valid output.
    ///
    /// Raised by the paginator when `max_width` or `max_lines_per_page`
    /// is zero. Callers must correct the configuration before retrying;
    /// no partial output is produced.
    #[error("Invalid page configuration: {0}")]
    InvalidConfiguration(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
