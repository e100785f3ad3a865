use crate::core::{ClientError, Result};
use std::env;

/// Per-environment gateway client configuration
///
/// Constructed once and immutable for the lifetime of a client session. The
/// auth and CSRF tokens are optional; when present they are forwarded as the
/// `AUTH` and `CSRF` headers on every call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub service_endpoint: String,
    pub hmac_secret: String,
    pub auth_token: Option<String>,
    pub csrf_token: Option<String>,
}

impl ClientConfig {
    /// Create a configuration, failing fast on a missing or malformed
    /// endpoint/secret before any network activity happens.
    pub fn new(service_endpoint: impl Into<String>, hmac_secret: impl Into<String>) -> Result<Self> {
        let config = ClientConfig {
            service_endpoint: service_endpoint.into(),
            hmac_secret: hmac_secret.into(),
            auth_token: None,
            csrf_token: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Attach an auth token, sent as the `AUTH` header
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Attach a CSRF token, sent as the `CSRF` header
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = ClientConfig {
            service_endpoint: env::var("FINREP_SERVICE_ENDPOINT").map_err(|_| {
                ClientError::configuration("FINREP_SERVICE_ENDPOINT not set")
            })?,
            hmac_secret: env::var("FINREP_HMAC_SECRET")
                .map_err(|_| ClientError::configuration("FINREP_HMAC_SECRET not set"))?,
            auth_token: env::var("FINREP_AUTH_TOKEN").ok(),
            csrf_token: env::var("FINREP_CSRF_TOKEN").ok(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.hmac_secret.is_empty() {
            return Err(ClientError::configuration("HMAC secret must not be empty"));
        }

        let url = reqwest::Url::parse(&self.service_endpoint).map_err(|e| {
            ClientError::configuration(format!(
                "Invalid service endpoint '{}': {}",
                self.service_endpoint, e
            ))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::configuration(format!(
                "Service endpoint must be http(s), got '{}'",
                other
            ))),
        }
    }
}
