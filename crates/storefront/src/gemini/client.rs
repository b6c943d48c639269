//! Gemini API client.
//!
//! One non-streaming `generateContent` exchange per call. The client holds
//! no state between calls besides its configuration.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{Content, GenerateContentRequest, GenerateContentResponse};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// Returns `None` when no API key is configured - the caller is
    /// expected to answer with its unavailable fallback in that case.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn from_config(config: &GeminiConfig) -> Option<Self> {
        let api_key = config.api_key.as_ref()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key.expose_secret()).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Some(Self {
            inner: Arc::new(GeminiClientInner {
                client,
                model: config.model.clone(),
                base_url: GEMINI_API_BASE_URL.to_string(),
            }),
        })
    }

    /// Override the API base URL. Used by tests to point at a local stub.
    #[must_use]
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(GeminiClientInner {
                client: self.inner.client.clone(),
                model: self.inner.model.clone(),
                base_url: base_url.into(),
            }),
        }
    }

    /// Send one `generateContent` request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport, the API
    /// returns a non-success status, or the body cannot be parsed.
    #[instrument(skip(self, system_instruction, user_text), fields(model = %self.inner.model))]
    pub async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::text(system_instruction)),
            contents: vec![Content::user(user_text)],
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.inner.base_url, self.inner.model
        );

        let response = self.inner.client.post(url).json(&request).send().await?;

        handle_response(response).await
    }
}

/// Map a raw HTTP response to a parsed response or a `GeminiError`.
async fn handle_response(
    response: reqwest::Response,
) -> Result<GenerateContentResponse, GeminiError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))
    } else {
        Err(handle_error_status(status, response).await)
    }
}

/// Turn a non-success status into the matching `GeminiError`.
async fn handle_error_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> GeminiError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return GeminiError::RateLimited(retry_after);
    }

    match response.text().await {
        Ok(body) => {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                GeminiError::Api {
                    status: api_error.error.status,
                    message: api_error.error.message,
                }
            } else {
                GeminiError::Api {
                    status: status.to_string(),
                    message: body,
                }
            }
        }
        Err(e) => GeminiError::Http(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: Some(SecretString::from("test-key")),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_from_config_without_key_is_none() {
        let config = GeminiConfig {
            api_key: None,
            ..test_config()
        };
        assert!(GeminiClient::from_config(&config).is_none());
    }

    #[test]
    fn test_from_config_with_key_is_some() {
        assert!(GeminiClient::from_config(&test_config()).is_some());
    }

    #[test]
    fn test_gemini_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GeminiClient>();
    }

    #[test]
    fn test_gemini_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiClient>();
    }
}
