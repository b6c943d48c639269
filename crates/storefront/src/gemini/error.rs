//! Error types for the Gemini API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request failed (includes timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// Status name from the API (e.g., `INVALID_ARGUMENT`).
        status: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// API error response envelope from Gemini.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiError,
}

/// Error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// HTTP status code echoed in the body.
    pub code: u16,
    /// Error message.
    pub message: String,
    /// Canonical status name.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_error_display() {
        let err = GeminiError::RateLimited(60);
        assert_eq!(err.to_string(), "rate limited, retry after 60 seconds");

        let err = GeminiError::Api {
            status: "INVALID_ARGUMENT".to_string(),
            message: "API key not valid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (INVALID_ARGUMENT): API key not valid"
        );
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.code, 400);
        assert_eq!(response.error.status, "INVALID_ARGUMENT");
        assert!(response.error.message.starts_with("API key not valid"));
    }
}
