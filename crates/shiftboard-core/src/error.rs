//! Error types for shiftboard-core
//!
//! Three recoverable families: validation (no request is sent), fetch
//! (prior display preserved) and auth (equivalent to an absent token).
//! Nothing here is fatal to the process.

use thiserror::Error;

/// User-correctable input errors, shown inline next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The `to` date precedes the `from` date. The message is what the
    /// dashboard has always shown; downstream tooling matches on it.
    #[error("pls select the date correctly")]
    DateRangeInverted,

    #[error("select at least one machine")]
    EmptySelection,
}

/// Core error type for shiftboard operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx response from the reporting API.
    #[error("request failed with status {status}: {message}")]
    Fetch { status: u16, message: String },

    /// Transport-level failure (DNS, connection, abort).
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// 401 or expired token. Treated exactly like an absent token: the
    /// session is cleared and navigation redirects to the login route.
    #[error("authentication required")]
    Auth,

    #[error("failed to render PDF: {0}")]
    PdfRender(String),
}

impl Error {
    /// True when the failure must clear the session and redirect to login.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth)
    }

    /// True when the error came from user input rather than the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_message_is_stable() {
        let err = ValidationError::DateRangeInverted;
        assert_eq!(err.to_string(), "pls select the date correctly");
    }

    #[test]
    fn test_validation_message_passes_through_error() {
        let err: Error = ValidationError::DateRangeInverted.into();
        assert_eq!(err.to_string(), "pls select the date correctly");
        assert!(err.is_validation());
    }

    #[test]
    fn test_auth_classification() {
        assert!(Error::Auth.is_auth());
        assert!(!Error::Network("timeout".into()).is_auth());
        assert!(!Error::Fetch { status: 500, message: "oops".into() }.is_auth());
    }
}
