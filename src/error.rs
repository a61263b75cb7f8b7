//! Error types
//!
//! Errors from talking to the records API and from reading form drafts.

use thiserror::Error;

/// Errors that can occur when calling the records API
#[derive(Error, Debug)]
pub enum RecordsError {
    /// The request could not be sent or the response body could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not what we expected
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for RecordsError {
    fn from(err: serde_json::Error) -> Self {
        RecordsError::Decode(err.to_string())
    }
}

/// Errors in a create-form draft
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Release year must be a whole number, got {0:?}")]
    InvalidReleaseYear(String),
}

/// Result type alias for API operations
pub type RecordsResult<T> = Result<T, RecordsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordsError::Api {
            status: 404,
            message: "no such record".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: no such record");

        let err = DraftError::InvalidReleaseYear("19x9".to_string());
        assert_eq!(
            err.to_string(),
            "Release year must be a whole number, got \"19x9\""
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: RecordsError = json_err.into();
        assert!(matches!(err, RecordsError::Decode(_)));
    }
}
