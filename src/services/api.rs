//! Backend API transport
//!
//! Owns the HTTP client, the resolved base URL and the cookie jar that
//! carries the session credentials. Every failure, whether an error status
//! or a transport problem, is reported as `ApiError::RequestFailed`.
//! Requests are sent once; nothing is retried.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::cookie::Jar;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::utils::errors::{ApiError, PlaisError, Result};
use crate::utils::logging::log_api_call;

/// HTTP client bound to one backend base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the configured backend
    ///
    /// The base URL is resolved here, once. Changing configuration later has
    /// no effect on an existing client.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.url)?;

        let jar = Arc::new(Jar::default());
        if let Some(ref cookie) = config.session_cookie {
            jar.add_cookie_str(cookie, &base_url);
        }

        let mut builder = Client::builder()
            .cookie_provider(jar)
            .user_agent(config.user_agent.as_str());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(PlaisError::Http)?;

        Ok(Self { client, base_url })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of `path` below the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Send a body-less DELETE; any response body is ignored
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        let request = self.client.delete(url.clone());
        self.send("DELETE", &url, request).await?;
        Ok(())
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let request = self.client.get(url.clone());
        let response = self.send("GET", &url, request).await?;

        let body = response.json::<T>().await.map_err(|e| ApiError::transport(&e))?;
        Ok(body)
    }

    async fn send(&self, method: &str, url: &Url, request: RequestBuilder) -> Result<Response> {
        debug!(method = method, url = %url, "Sending API request");
        let started = Instant::now();

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log_api_call(method, url.as_str(), None, elapsed_ms(started));
                return Err(ApiError::transport(&e).into());
            }
        };

        let status = response.status();
        log_api_call(method, url.as_str(), Some(status.as_u16()), elapsed_ms(started));

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, error_text).into());
        }

        Ok(response)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Parse the configured base URL so that relative joins append to its path
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlaisError::Config("API URL is required (set API_URL)".to_string()));
    }

    let mut url = Url::parse(trimmed)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn client(url: &str) -> ApiClient {
        ApiClient::new(&Settings::with_api_url(url).api).unwrap()
    }

    #[test]
    fn test_endpoint_joins_bare_host() {
        let api = client("https://api.example.org");
        assert_eq!(
            api.endpoint("api/Image/unused-images").unwrap().as_str(),
            "https://api.example.org/api/Image/unused-images"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        for base in ["https://host.example/backend", "https://host.example/backend/"] {
            let api = client(base);
            assert_eq!(
                api.endpoint("/api/Image/unused-images").unwrap().as_str(),
                "https://host.example/backend/api/Image/unused-images"
            );
        }
    }

    #[test]
    fn test_rejects_empty_and_invalid_base() {
        let mut config = Settings::default().api;
        assert!(matches!(ApiClient::new(&config), Err(PlaisError::Config(_))));

        config.url = "::not-a-url".to_string();
        assert!(matches!(ApiClient::new(&config), Err(PlaisError::UrlParse(_))));
    }
}
