use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::core::{ClientError, Result};

/// HTTP transport seam for the gateway client
///
/// The pipeline hands the transport a fully signed body; the transport must
/// send those exact bytes. No retry, backoff, or timeout policy lives here or
/// below — callers wanting one wrap the transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with the given headers and return the raw
    /// response body text
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: Vec<(&'static str, String)>,
    ) -> Result<String>;
}

/// Default transport backed by a reqwest client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: Vec<(&'static str, String)>,
    ) -> Result<String> {
        let mut request = self
            .client
            .post(url)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.body(body).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::transport(format!(
                    "Gateway unavailable: {} ({})",
                    if e.is_timeout() {
                        "timeout"
                    } else {
                        "connection failed"
                    },
                    e
                ))
            } else {
                ClientError::transport(format!("Gateway request failed: {}", e))
            }
        })?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("Failed to read gateway response: {}", e)))?;

        debug!(status = %status, bytes = response_body.len(), "Gateway responded");

        if !status.is_success() {
            return Err(ClientError::transport(format!(
                "Gateway error - HTTP {} ({})",
                status.as_u16(),
                response_body
            )));
        }

        Ok(response_body)
    }
}
