use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::fetcher::MovementFetcher;
use crate::core::{AppError, Result};
use crate::modules::upstream::models::MovementRecord;

/// HTTP adapter for the movement ledger service
pub struct MovementLedgerClient {
    client: Client,
    base_url: String,
}

impl MovementLedgerClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<MovementRecord>> {
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                Err(AppError::not_found(format!("no movements at {url}")))
            }
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::upstream(format!(
                    "movement ledger error {status}: {body}"
                )))
            }
            _ => response
                .json()
                .await
                .map_err(|e| AppError::upstream(format!("invalid movement ledger payload: {e}"))),
        }
    }
}

#[async_trait]
impl MovementFetcher for MovementLedgerClient {
    async fn movements_by_client(&self, client_id: &str) -> Result<Vec<MovementRecord>> {
        let url = format!("{}/api/v1/movement/client/{}", self.base_url, client_id);
        self.fetch(&url).await
    }

    async fn movements_by_product(&self, product_id: &str) -> Result<Vec<MovementRecord>> {
        let url = format!("{}/api/v1/movement/product/{}", self.base_url, product_id);
        self.fetch(&url).await
    }
}
