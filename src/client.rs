use std::time::Duration;

use reqwest::Client as ReqwestClient;

use crate::endpoint::trigger_url;
use crate::errors::TriggerError;

/// The client for triggering the drive-index cron endpoint.
#[derive(Debug, Clone)]
pub struct TriggerClient {
    cron_secret: String,
    http_client: ReqwestClient,
}

/// Builder for `TriggerClient` instances.
///
/// # Example
///
/// ```
/// use drive_index_trigger::TriggerClient;
/// use std::time::Duration;
///
/// let client = TriggerClient::builder("cron_secret".to_string())
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(5))
///     .build();
/// ```
#[derive(Debug)]
pub struct TriggerClientBuilder {
    cron_secret: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl TriggerClientBuilder {
    /// Sets the total request timeout.
    ///
    /// This is the maximum time the request can take from start to finish,
    /// including connection time and reading the response body. If not set,
    /// uses reqwest's default (no timeout), matching the cron caller this
    /// binary replaces.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// A shorter timeout here helps fail fast when the site is unreachable.
    /// If not set, uses reqwest's default.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the `TriggerClient`.
    #[must_use]
    pub fn build(self) -> TriggerClient {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        // This should never fail with our configuration
        let http_client = builder.build().expect("Failed to build HTTP client");

        TriggerClient {
            cron_secret: self.cron_secret,
            http_client,
        }
    }
}

impl TriggerClient {
    /// Creates a new builder for `TriggerClient` instances.
    ///
    /// # Arguments
    ///
    /// * `cron_secret` - The bearer token expected by the cron endpoint.
    #[must_use]
    pub const fn builder(cron_secret: String) -> TriggerClientBuilder {
        TriggerClientBuilder {
            cron_secret,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Creates a new client with reqwest defaults.
    #[must_use]
    pub fn new(cron_secret: String) -> Self {
        Self {
            cron_secret,
            http_client: ReqwestClient::new(),
        }
    }

    /// Sends one authenticated GET request to the drive-index endpoint under
    /// `site_url` and returns the response body verbatim.
    ///
    /// # Errors
    /// Returns an error if the request fails to send, the response status is
    /// not successful, or the body cannot be read as text.
    pub async fn trigger(&self, site_url: &str) -> Result<String, TriggerError> {
        let url = trigger_url(site_url);
        tracing::debug!(%url, "triggering drive index");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.cron_secret)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(TriggerError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "drive index trigger succeeded");
        Ok(body)
    }
}
