//! Error types and handling for the asset inliner
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for inliner operations
#[derive(Error, Diagnostic, Debug)]
pub enum InlinerError {
    #[error("Failed to read source asset '{path}': {reason}")]
    #[diagnostic(
        code(inliner::source::read_failed),
        help("Check that the source image exists and is readable")
    )]
    SourceReadFailed { path: String, reason: String },

    #[error("Failed to write module '{path}': {reason}")]
    #[diagnostic(
        code(inliner::destination::write_failed),
        help("Check that the destination directory exists and is writable")
    )]
    DestinationWriteFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InlinerError>;
