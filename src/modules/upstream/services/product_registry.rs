use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::fetcher::ProductFetcher;
use crate::core::{AppError, Result};
use crate::modules::upstream::models::ProductRecord;

/// HTTP adapter for the product registry service
pub struct ProductRegistryClient {
    client: Client,
    base_url: String,
}

impl ProductRegistryClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ProductFetcher for ProductRegistryClient {
    async fn products_by_client(&self, client_id: &str) -> Result<Vec<ProductRecord>> {
        let url = format!("{}/api/v1/product/client/{}", self.base_url, client_id);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::not_found(format!(
                "no products for client {client_id}"
            ))),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::upstream(format!(
                    "product registry error {status}: {body}"
                )))
            }
            _ => response
                .json()
                .await
                .map_err(|e| AppError::upstream(format!("invalid product registry payload: {e}"))),
        }
    }
}
