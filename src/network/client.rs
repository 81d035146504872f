//! HTTP client for upstream requests

use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with application-wide configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(format!("islamweb-rs/{}", crate::VERSION))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// GET a URL and capture status + body text
    pub async fn get(&self, url: &str) -> std::result::Result<ApiResponse, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ApiResponse { status, text })
    }

    /// GET with a single CORS-proxy retry.
    ///
    /// The direct request is always attempted first; only a transport-level
    /// failure (not an HTTP error status) falls through to the proxy, and
    /// only when one is configured.
    pub async fn get_with_fallback(
        &self,
        url: &str,
        cors_proxy: Option<&str>,
    ) -> std::result::Result<ApiResponse, reqwest::Error> {
        match self.get(url).await {
            Ok(response) => Ok(response),
            Err(err) => match cors_proxy {
                Some(prefix) => {
                    debug!("direct fetch of {} failed ({}), retrying via proxy", url, err);
                    let proxied = format!("{}{}", prefix, urlencoding::encode(url));
                    self.get(&proxied).await
                }
                None => Err(err),
            },
        }
    }

    /// POST a JSON body, optionally with a bearer credential
    pub async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> std::result::Result<ApiResponse, reqwest::Error> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ApiResponse { status, text })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}

/// Captured upstream response
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ApiResponse {
    /// Parse the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
