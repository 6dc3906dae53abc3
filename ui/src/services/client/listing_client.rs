use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::instrument;

use super::errors::{SubmitError, SubmitResult};
use super::types::DonationListingRequest;
use crate::services::config::ListingConfig;
use crate::{console_debug, console_info};

#[cfg(not(target_arch = "wasm32"))]
fn with_timeout(builder: ClientBuilder, timeout_ms: Option<u64>) -> ClientBuilder {
    match timeout_ms {
        Some(ms) => builder.timeout(std::time::Duration::from_millis(ms)),
        None => builder,
    }
}

// The browser fetch backend has no client-wide timeout; requests run until
// the browser gives up.
#[cfg(target_arch = "wasm32")]
fn with_timeout(builder: ClientBuilder, timeout_ms: Option<u64>) -> ClientBuilder {
    if let Some(ms) = timeout_ms {
        crate::console_warn!("[ListingClient] Ignoring request timeout of {}ms in the browser", ms);
    }
    builder
}

/// Anything able to deliver a listing to the backend.
///
/// Returns the JSON body of a successful response.
#[async_trait(?Send)]
pub trait ListingSubmitter {
    async fn submit_listing(&self, request: &DonationListingRequest) -> SubmitResult<Value>;
}

/// HTTP client posting listings as JSON
#[derive(Clone)]
pub struct ListingClient {
    http_client: Client,
    config: ListingConfig,
}

impl ListingClient {
    pub fn new(config: ListingConfig) -> SubmitResult<Self> {
        let builder = Client::builder().user_agent(config.user_agent.clone());
        let http_client = with_timeout(builder, config.request_timeout_ms)
            .build()
            .map_err(|e| SubmitError::Network {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ListingSubmitter for ListingClient {
    /// One POST per call; no retry.
    #[instrument(skip(self, request), err)]
    async fn submit_listing(&self, request: &DonationListingRequest) -> SubmitResult<Value> {
        let url = self.config.submit_url()?;
        let body = serde_json::to_vec(request)?;

        console_debug!("[ListingClient] POST {}", url);

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|e| SubmitError::Decode {
                message: e.to_string(),
            })?;

        console_info!("[ListingClient] Listing accepted with status {}", status);
        Ok(payload)
    }
}
