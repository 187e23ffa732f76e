use crate::config::listings::{LISTINGS_API_KEY, LISTINGS_API_TIMEOUT, LISTINGS_API_URL};
use crate::resources::filter_set::FilterSet;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Missing REELLY_API_KEY. Set it as an environment variable.")]
    MissingApiKey,

    #[error("Reelly API error")]
    Upstream { status: u16, body: String },

    #[error("Reelly API returned a non-JSON body")]
    InvalidBody { status: u16, body: String },

    #[error("Reelly API request timed out")]
    Timeout,

    #[error("Reelly API request failed: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Transport(err)
        }
    }
}

impl GatewayError {
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GatewayError::Upstream { status, .. } | GatewayError::InvalidBody { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Raw upstream body, or the transport failure text.
    pub fn into_details(self) -> Option<String> {
        match self {
            GatewayError::Upstream { body, .. } | GatewayError::InvalidBody { body, .. } => {
                Some(body)
            }
            GatewayError::Transport(err) => Some(err.to_string()),
            GatewayError::MissingApiKey | GatewayError::Timeout => None,
        }
    }
}

/// Thin client for the Reelly listings search endpoint.
pub struct ListingsClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ListingsClient {
    /// Production endpoint, key from `REELLY_API_KEY`.
    pub fn from_env() -> reqwest::Result<Self> {
        Self::new(LISTINGS_API_URL, LISTINGS_API_KEY.clone())
    }

    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> reqwest::Result<Self> {
        Self::with_timeout(base_url, api_key, LISTINGS_API_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// One GET with the present filters as query parameters. No retries.
    pub async fn search(&self, filters: &FilterSet) -> Result<Value, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;
        let params = filters.query_params();
        if filters.is_empty() {
            debug!("querying listings API without filters");
        } else {
            debug!(?params, "querying listings API");
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&params)
            .header("x-api-key", api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|err| {
            debug!(error = %err, "listings API body is not JSON");
            GatewayError::InvalidBody {
                status: status.as_u16(),
                body,
            }
        })
    }
}
