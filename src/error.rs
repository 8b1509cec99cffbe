//! Import error classification
//!
//! Every failure the pipeline or orchestrator can hit maps to exactly one
//! variant here. Errors are terminal for the current step only — they never
//! crash the orchestrator and never auto-retry. Each one is translated into
//! a single notification and retained for re-display.

use thiserror::Error;

use crate::types::InvalidReason;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The selected file could not be read or decoded as text.
    #[error("could not read file: {0}")]
    FileRead(#[source] std::io::Error),

    /// Strict-mode rejection of a malformed data row. Carries the 1-based
    /// line number for the diagnostic.
    #[error("invalid CSV data on line {line}: {reason}")]
    InvalidFormat { line: usize, reason: InvalidReason },

    /// Validation and deduplication left no usable rows.
    #[error("the file contains no usable contact rows")]
    EmptyResult,

    /// Submit attempted without both a cleaned file and a selected account.
    #[error("please select a file and an account before uploading")]
    MissingInput,

    /// The selected account's label is not on the allow-list.
    #[error("the selected account is not permitted to receive imports")]
    PermissionDenied,

    /// The upload backend rejected the request or the transport failed.
    #[error("error uploading contacts: {0}")]
    Upload(String),

    /// The account directory could not supply the account options.
    #[error("error retrieving account options: {0}")]
    AccountDirectory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message_includes_line_number() {
        let err = ImportError::InvalidFormat {
            line: 5,
            reason: InvalidReason::DisallowedCharacters,
        };
        assert_eq!(
            err.to_string(),
            "invalid CSV data on line 5: disallowed characters or empty field"
        );
    }

    #[test]
    fn test_upload_message_carries_backend_detail() {
        let err = ImportError::Upload("duplicate batch".to_string());
        assert!(err.to_string().contains("duplicate batch"));
    }
}
