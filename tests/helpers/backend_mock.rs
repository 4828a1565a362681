//! Mock PLAIS backend for testing
//!
//! This module provides a mock HTTP server that stands in for the backend
//! API. It uses wiremock to create configurable mock responses.

use std::time::Duration;

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

use plais_client::config::Settings;
use plais_client::services::UNUSED_IMAGES_PATH;

/// Mock backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub body: Option<Value>,
    pub set_cookie: Option<String>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 204,
            delay_ms: None,
            body: None,
            set_cookie: None,
        }
    }
}

impl MockResponseConfig {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    fn into_template(self) -> ResponseTemplate {
        let mut response = ResponseTemplate::new(self.status);

        if let Some(body) = self.body {
            response = response.set_body_json(body);
        }
        if let Some(cookie) = self.set_cookie {
            response = response.insert_header("set-cookie", cookie.as_str());
        }
        if let Some(delay) = self.delay_ms {
            response = response.set_delay(Duration::from_millis(delay));
        }

        response
    }
}

impl BackendMockServer {
    /// Create a new mock backend server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();

        Self { server, base_url }
    }

    /// Settings pointing at this server
    pub fn settings(&self) -> Settings {
        Settings::with_api_url(self.base_url.clone())
    }

    /// Settings pointing at this server with a session cookie
    pub fn settings_with_cookie(&self, cookie: &str) -> Settings {
        let mut settings = self.settings();
        settings.api.session_cookie = Some(cookie.to_string());
        settings
    }

    /// Setup mock for the unused-image cleanup endpoint
    pub async fn mock_delete_unused_images(&self, config: MockResponseConfig) {
        Mock::given(method("DELETE"))
            .and(path(format!("/{}", UNUSED_IMAGES_PATH)))
            .respond_with(config.into_template())
            .mount(&self.server)
            .await;
    }

    /// Setup a GET mock for an arbitrary endpoint
    pub async fn mock_get(&self, endpoint: &str, config: MockResponseConfig) {
        Mock::given(method("GET"))
            .and(path(endpoint.to_string()))
            .respond_with(config.into_template())
            .mount(&self.server)
            .await;
    }

    /// All requests the server has seen so far
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests seen for the unused-image endpoint
    pub async fn received_cleanup_requests(&self) -> Vec<Request> {
        let cleanup_path = format!("/{}", UNUSED_IMAGES_PATH);
        self.received()
            .await
            .into_iter()
            .filter(|r| r.url.path() == cleanup_path)
            .collect()
    }

    /// Reset all mocks and recorded requests
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

/// Base URL of a local port nothing listens on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Cookie header of a recorded request, if any
pub fn cookie_header(request: &Request) -> Option<String> {
    request
        .headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
