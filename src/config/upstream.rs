use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Base URLs for the four upstream services the reports are assembled from
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub client_service_url: String,
    pub product_service_url: String,
    pub movement_service_url: String,
    pub debit_card_service_url: String,
    /// Per-request timeout for upstream calls, in seconds. A hung upstream
    /// surfaces as a report-level failure instead of blocking forever.
    pub request_timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_service_url: require("CLIENT_SERVICE_URL")?,
            product_service_url: require("PRODUCT_SERVICE_URL")?,
            movement_service_url: require("MOVEMENT_SERVICE_URL")?,
            debit_card_service_url: require("DEBIT_CARD_SERVICE_URL")?,
            request_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid UPSTREAM_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        for (name, url) in [
            ("CLIENT_SERVICE_URL", &self.client_service_url),
            ("PRODUCT_SERVICE_URL", &self.product_service_url),
            ("MOVEMENT_SERVICE_URL", &self.movement_service_url),
            ("DEBIT_CARD_SERVICE_URL", &self.debit_card_service_url),
        ] {
            if url.is_empty() {
                return Err(AppError::Configuration(format!("{name} must not be empty")));
            }
        }

        Ok(())
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AppError::Configuration(format!("{name} not set")))
}
