/*
[INPUT]:  Error sources (local preconditions, HTTP, API, serialization, config)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::RestException;

/// Main error type for the Twilio adapter
#[derive(Error, Debug)]
pub enum TwilioError {
    /// Operation rejected locally before any request was sent
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response
    #[error("API error (status {status}{}): {message}", code_suffix(.code))]
    Api {
        status: u16,
        code: Option<i32>,
        message: String,
        more_info: Option<String>,
    },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Request could not be constructed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TwilioError {
    /// Check if the error came from building, sending or decoding a request
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            TwilioError::Http(_)
                | TwilioError::Api { .. }
                | TwilioError::Serialization(_)
                | TwilioError::UrlParse(_)
                | TwilioError::InvalidRequest(_)
        )
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            TwilioError::Api { status, .. } => Some(*status),
            TwilioError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    /// Check if error indicates rejected credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(code) if code == StatusCode::UNAUTHORIZED.as_u16()
                || code == StatusCode::FORBIDDEN.as_u16()
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TwilioError::Api {
            status: status.as_u16(),
            code: None,
            message: message.into(),
            more_info: None,
        }
    }

    pub(crate) fn from_exception(status: StatusCode, exception: RestException) -> Self {
        TwilioError::Api {
            status: exception.status.unwrap_or(status.as_u16()),
            code: exception.code,
            message: exception.message,
            more_info: exception.more_info,
        }
    }
}

fn code_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(", code {c}")).unwrap_or_default()
}

/// Result type alias for Twilio operations
pub type Result<T> = std::result::Result<T, TwilioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operation_is_not_request_error() {
        let err = TwilioError::InvalidOperation("self".to_string());
        assert!(!err.is_request_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_classification() {
        let not_found = TwilioError::api_error(StatusCode::NOT_FOUND, "missing");
        assert!(not_found.is_request_error());
        assert!(not_found.is_not_found());
        assert!(!not_found.is_auth_error());

        let unauthorized = TwilioError::api_error(StatusCode::UNAUTHORIZED, "bad token");
        assert!(unauthorized.is_auth_error());
    }

    #[test]
    fn test_api_error_from_exception() {
        let exception = RestException {
            code: Some(20003),
            message: "Authenticate".to_string(),
            more_info: Some("https://www.twilio.com/docs/errors/20003".to_string()),
            status: None,
        };
        let err = TwilioError::from_exception(StatusCode::UNAUTHORIZED, exception);
        match &err {
            TwilioError::Api { status, code, message, .. } => {
                assert_eq!(*status, 401);
                assert_eq!(*code, Some(20003));
                assert_eq!(message, "Authenticate");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.to_string(), "API error (status 401, code 20003): Authenticate");
    }
}
