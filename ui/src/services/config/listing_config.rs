//! Configuration for the donation listing form.
//!
//! The endpoint path is a fixed application-relative contract with the
//! backend; the base URL is taken from the page origin unless overridden.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::{page_origin, FALLBACK_ORIGIN};

pub const DEFAULT_SUBMIT_PATH: &str = "/api/healthofficer";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} = {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Application-relative path the listing is posted to
    pub submit_path: String,

    /// Absolute base URL; `None` resolves against the page origin
    pub api_base_url: Option<String>,

    pub user_agent: String,

    /// How long a notification stays on screen
    pub toast_duration_ms: u32,

    /// Request timeout; `None` keeps the HTTP client's default behaviour
    pub request_timeout_ms: Option<u64>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            submit_path: DEFAULT_SUBMIT_PATH.to_string(),
            api_base_url: None,
            user_agent: "donation-listing-ui/0.1".to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            request_timeout_ms: None,
        }
    }
}

impl ListingConfig {
    /// Check every setting, collecting all problems rather than stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if !self.submit_path.starts_with('/') {
            errors.push(ConfigError::InvalidValue {
                field: "submit_path".to_string(),
                value: self.submit_path.clone(),
            });
        }

        if let Some(base) = &self.api_base_url {
            if let Err(e) = reqwest::Url::parse(base) {
                errors.push(ConfigError::InvalidUrl {
                    url: base.clone(),
                    reason: e.to_string(),
                });
            }
        }

        if self.toast_duration_ms == 0 {
            errors.push(ConfigError::InvalidValue {
                field: "toast_duration_ms".to_string(),
                value: self.toast_duration_ms.to_string(),
            });
        }

        if self.request_timeout_ms == Some(0) {
            errors.push(ConfigError::InvalidValue {
                field: "request_timeout_ms".to_string(),
                value: "0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Base URL the submit path is joined onto.
    pub fn base_url(&self) -> String {
        self.api_base_url
            .clone()
            .or_else(page_origin)
            .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
    }

    /// Absolute URL of the submission endpoint.
    pub fn submit_url(&self) -> Result<reqwest::Url, ConfigError> {
        let base = self.base_url();
        let base_url = reqwest::Url::parse(&base).map_err(|e| ConfigError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        base_url
            .join(&self.submit_path)
            .map_err(|e| ConfigError::InvalidUrl {
                url: format!("{}{}", base, self.submit_path),
                reason: e.to_string(),
            })
    }
}
