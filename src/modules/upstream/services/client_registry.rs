use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::fetcher::ClientFetcher;
use crate::core::{AppError, Result};
use crate::modules::upstream::models::ClientRecord;

/// HTTP adapter for the client registry service
pub struct ClientRegistryClient {
    client: Client,
    base_url: String,
}

impl ClientRegistryClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ClientFetcher for ClientRegistryClient {
    async fn client_by_id(&self, client_id: &str) -> Result<ClientRecord> {
        let url = format!("{}/api/v1/client/{}", self.base_url, client_id);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                Err(AppError::not_found(format!("client {client_id} not found")))
            }
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::upstream(format!(
                    "client registry error {status}: {body}"
                )))
            }
            _ => response
                .json()
                .await
                .map_err(|e| AppError::upstream(format!("invalid client registry payload: {e}"))),
        }
    }
}
