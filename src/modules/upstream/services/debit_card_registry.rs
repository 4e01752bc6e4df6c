use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::fetcher::DebitCardFetcher;
use crate::core::{AppError, Result};
use crate::modules::upstream::models::DebitCardRecord;

/// HTTP adapter for the debit-card registry service
pub struct DebitCardRegistryClient {
    client: Client,
    base_url: String,
}

impl DebitCardRegistryClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl DebitCardFetcher for DebitCardRegistryClient {
    async fn card_by_id(&self, card_id: &str) -> Result<DebitCardRecord> {
        let url = format!("{}/api/v1/debit-card/{}", self.base_url, card_id);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::not_found(format!(
                "debit card {card_id} not found"
            ))),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::upstream(format!(
                    "debit-card registry error {status}: {body}"
                )))
            }
            _ => response.json().await.map_err(|e| {
                AppError::upstream(format!("invalid debit-card registry payload: {e}"))
            }),
        }
    }
}
