//! Integration test harness for Fripoblech.
//!
//! Starts the real storefront router in-process on an ephemeral port and
//! talks to it over HTTP with a cookie-holding client, so the session
//! cart behaves exactly as it does for a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fripoblech-integration-tests
//! ```
//!
//! No external services are required: tests that exercise the stylist
//! spin up a local stub of the Gemini endpoint.

use std::net::SocketAddr;

use fripoblech_storefront::app;
use fripoblech_storefront::catalog::Catalog;
use fripoblech_storefront::config::{GeminiConfig, StorefrontConfig};
use fripoblech_storefront::gemini::GeminiClient;
use fripoblech_storefront::services::StylistService;
use fripoblech_storefront::state::AppState;
use secrecy::SecretString;

/// A storefront instance under test.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Start the storefront with a default (no Gemini key) state.
    ///
    /// # Panics
    ///
    /// Panics if the server fails to start.
    pub async fn spawn() -> Self {
        let config = test_config(None);
        let state = AppState::new(config).expect("catalog fixture is valid");
        Self::spawn_with_state(state).await
    }

    /// Start the storefront with a stylist pointed at a stub Gemini
    /// endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the server fails to start.
    pub async fn spawn_with_gemini_stub(stub_url: &str) -> Self {
        let config = test_config(Some("test-key"));
        let client = GeminiClient::from_config(&config.gemini)
            .expect("key is set")
            .with_base_url(stub_url);
        let state = AppState::from_parts(
            config,
            Catalog::load().expect("catalog fixture is valid"),
            StylistService::with_client(Some(client)),
        );
        Self::spawn_with_state(state).await
    }

    /// Start the storefront around an already-built state.
    ///
    /// # Panics
    ///
    /// Panics if the server fails to start.
    pub async fn spawn_with_state(state: AppState) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("test server error");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { addr, client }
    }

    /// Full URL for a path on the instance under test.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Configuration for tests: ephemeral-port placeholders, optional key.
#[must_use]
pub fn test_config(gemini_api_key: Option<&str>) -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid IP"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        gemini: GeminiConfig {
            api_key: gemini_api_key.map(SecretString::from),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Spawn a stub HTTP server from an axum router, returning its base URL.
///
/// # Panics
///
/// Panics if the stub fails to start.
pub async fn spawn_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub error");
    });

    format!("http://{addr}")
}
