//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FRIPOBLECH_HOST` - Bind address (default: 127.0.0.1)
//! - `FRIPOBLECH_PORT` - Listen port (default: 3000)
//! - `FRIPOBLECH_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `GEMINI_API_KEY` - Generative Language API key; when absent the
//!   stylist answers with a fixed unavailable message instead of failing
//!   startup
//! - `GEMINI_MODEL` - Model ID (default: gemini-2.5-flash)
//! - `GEMINI_TIMEOUT_SECS` - Advice request timeout (default: 20)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default advice request timeout in seconds.
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 20;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Gemini advice service configuration
    pub gemini: GeminiConfig,
}

/// Gemini Generative Language API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; `None` means the stylist runs in unavailable mode
    pub api_key: Option<SecretString>,
    /// Model ID (e.g., gemini-2.5-flash)
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("FRIPOBLECH_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FRIPOBLECH_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("FRIPOBLECH_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FRIPOBLECH_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("FRIPOBLECH_BASE_URL", "http://localhost:3000");

        let gemini = GeminiConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            gemini,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match get_optional_env("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("GEMINI_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_GEMINI_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key: get_optional_env("GEMINI_API_KEY").map(SecretString::from),
            model: get_env_or_default("GEMINI_MODEL", "gemini-2.5-flash"),
            timeout_secs,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Empty values count as absent.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
